//! Host-bundle model injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    FavoritesService, FileDetailsChannel, MemoryFavoritesService, MemoryFileDetailsChannel,
    MemoryPageService, MemoryPrefsStore, PageService, PrefsStore,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services (localStorage, Socket.IO, fetch).
    Browser,
    /// Placeholder services that talk to nothing.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Service bundle injected into the desktop runtime.
///
/// All environment-specific selection happens before this bundle reaches `desk_runtime`, which
/// keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Persisted pinned-file list storage.
    pub prefs: Rc<dyn PrefsStore>,
    /// Long-lived metadata channel.
    pub file_channel: Rc<dyn FileDetailsChannel>,
    /// Server-side favorite mutations.
    pub favorites: Rc<dyn FavoritesService>,
    /// Alerts, reloads and sibling-script hooks.
    pub page: Rc<dyn PageService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

/// In-memory bundle with handles kept for inspection in tests.
#[derive(Clone, Default)]
pub struct MemoryHost {
    /// Prefs backing store.
    pub prefs: MemoryPrefsStore,
    /// Channel recording requests.
    pub file_channel: MemoryFileDetailsChannel,
    /// Favorites recording calls.
    pub favorites: MemoryFavoritesService,
    /// Page recording alerts, reloads and hooks.
    pub page: MemoryPageService,
}

impl MemoryHost {
    /// Builds a [`HostServices`] bundle sharing state with this host.
    pub fn services(&self) -> HostServices {
        HostServices {
            prefs: Rc::new(self.prefs.clone()),
            file_channel: Rc::new(self.file_channel.clone()),
            favorites: Rc::new(self.favorites.clone()),
            page: Rc::new(self.page.clone()),
            host_strategy: HostStrategy::Stub,
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_host_services_share_state_with_handles() {
        let host = MemoryHost::default();
        let services = host.services();

        block_on(services.prefs.save_pref("desktop", "[]")).expect("save");
        services.page.alert("hello");

        assert_eq!(
            block_on(host.prefs.load_pref("desktop")).expect("load"),
            Some("[]".to_string())
        );
        assert_eq!(host.page.alerts(), vec!["hello".to_string()]);
        assert_eq!(services.host_strategy.as_str(), "stub");
    }
}
