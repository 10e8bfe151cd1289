use std::rc::Rc;

use platform_host::{
    FavoriteState, FavoritesFuture, FavoritesService, FileDetailsChannel, FileDetailsHandler,
    FileDetailsRequest, HostServices, HostStrategy, NoopFavoritesService, NoopFileDetailsChannel,
    NoopPageService, NoopPrefsStore, PageHook, PageService, PrefsStore, PrefsStoreFuture,
    RecordId,
};

use crate::{WebFavoritesService, WebFileChannel, WebPageService, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desk-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "desk-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preferences backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage`.
    Browser(WebPrefsStore),
    /// Nothing persisted.
    Stub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Stub(store) => store.save_pref(key, raw_json),
        }
    }
}

/// Adapter enum that erases the concrete channel behind [`FileDetailsChannel`].
#[derive(Debug, Clone)]
pub enum FileChannelAdapter {
    /// Socket.IO connection to the file-handler namespace.
    Browser(WebFileChannel),
    /// Channel that never answers.
    Stub(NoopFileDetailsChannel),
}

impl FileDetailsChannel for FileChannelAdapter {
    fn subscribe(&self, handler: FileDetailsHandler) -> Result<(), String> {
        match self {
            Self::Browser(channel) => channel.subscribe(handler),
            Self::Stub(channel) => channel.subscribe(handler),
        }
    }

    fn request_details(&self, request: &FileDetailsRequest) -> Result<(), String> {
        match self {
            Self::Browser(channel) => channel.request_details(request),
            Self::Stub(channel) => channel.request_details(request),
        }
    }
}

/// Adapter enum that erases the concrete favorites backend behind [`FavoritesService`].
#[derive(Debug, Clone, Copy)]
pub enum FavoritesServiceAdapter {
    /// `fetch` against the favorite endpoints.
    Browser(WebFavoritesService),
    /// Always rejects.
    Stub(NoopFavoritesService),
}

impl FavoritesService for FavoritesServiceAdapter {
    fn set_favorite<'a>(
        &'a self,
        file_id: &'a RecordId,
        target: FavoriteState,
    ) -> FavoritesFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.set_favorite(file_id, target),
            Self::Stub(service) => service.set_favorite(file_id, target),
        }
    }
}

/// Adapter enum that erases the concrete page backend behind [`PageService`].
#[derive(Debug, Clone, Copy)]
pub enum PageServiceAdapter {
    /// `window`-backed alerts, reloads and hooks.
    Browser(WebPageService),
    /// Ignores every request.
    Stub(NoopPageService),
}

impl PageService for PageServiceAdapter {
    fn alert(&self, message: &str) {
        match self {
            Self::Browser(page) => page.alert(message),
            Self::Stub(page) => page.alert(message),
        }
    }

    fn reload(&self) -> Result<(), String> {
        match self {
            Self::Browser(page) => page.reload(),
            Self::Stub(page) => page.reload(),
        }
    }

    fn run_hook(&self, hook: PageHook) -> Result<(), String> {
        match self {
            Self::Browser(page) => page.run_hook(hook),
            Self::Stub(page) => page.run_hook(hook),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

/// Builds the file-handler channel adapter for the compile-time selected host strategy.
pub fn file_channel() -> FileChannelAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => FileChannelAdapter::Browser(WebFileChannel::default()),
        HostStrategy::Stub => FileChannelAdapter::Stub(NoopFileDetailsChannel),
    }
}

/// Builds the favorites adapter for the compile-time selected host strategy.
pub fn favorites_service() -> FavoritesServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => FavoritesServiceAdapter::Browser(WebFavoritesService),
        HostStrategy::Stub => FavoritesServiceAdapter::Stub(NoopFavoritesService),
    }
}

/// Builds the page adapter for the compile-time selected host strategy.
pub fn page_service() -> PageServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PageServiceAdapter::Browser(WebPageService),
        HostStrategy::Stub => PageServiceAdapter::Stub(NoopPageService),
    }
}

/// Assembles the host bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        file_channel: Rc::new(file_channel()),
        favorites: Rc::new(favorites_service()),
        page: Rc::new(page_service()),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "desk-host-stub"))]
    #[test]
    fn default_build_selects_browser_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(prefs_store(), PrefsStoreAdapter::Browser(_)));
        assert!(matches!(file_channel(), FileChannelAdapter::Browser(_)));
        assert!(matches!(
            favorites_service(),
            FavoritesServiceAdapter::Browser(_)
        ));
        assert!(matches!(page_service(), PageServiceAdapter::Browser(_)));
    }

    #[cfg(feature = "desk-host-stub")]
    #[test]
    fn stub_build_selects_noop_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Stub);
        assert!(matches!(prefs_store(), PrefsStoreAdapter::Stub(_)));
        assert!(matches!(file_channel(), FileChannelAdapter::Stub(_)));
    }

    #[test]
    fn host_bundle_reports_selected_strategy() {
        assert_eq!(
            build_host_services().host_strategy,
            selected_host_strategy()
        );
    }
}
