//! Host-side runtime helpers for executing reducer effects against the injected services.
//!
//! Reducer semantics stay pure; everything that touches storage, the metadata channel, the
//! favorite endpoints or the document goes through [`DeskHostContext`].

mod boot;
mod dom;
mod effects;

use std::rc::Rc;

use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{FavoritesService, FileDetailsChannel, HostServices, PageService, PrefsStore};

pub(crate) use dom::event_target_within;

use crate::{
    model::card_body_dom_id,
    reducer::{DeskAction, RuntimeEffect},
    runtime_context::DeskRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DeskHostContext {
    prefs: Rc<dyn PrefsStore>,
    file_channel: Rc<dyn FileDetailsChannel>,
    favorites: Rc<dyn FavoritesService>,
    page: Rc<dyn PageService>,
    host_strategy_name: &'static str,
}

impl DeskHostContext {
    /// Creates a host context from an explicit host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            file_channel: services.file_channel,
            favorites: services.favorites,
            page: services.page,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the configured pinned-list store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured metadata channel.
    pub fn file_channel(&self) -> Rc<dyn FileDetailsChannel> {
        self.file_channel.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Installs the boot sequence: subscribe to metadata batches, load the pinned list, request
    /// its details.
    pub fn install_boot_hydration(&self, dispatch: Callback<DeskAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DeskRuntimeContext, effect: RuntimeEffect) {
        let host = self.clone();
        spawn_local(async move {
            host.execute_effect(effect, move |action| runtime.dispatch.call(action))
                .await;
        });
    }

    /// Runs `effect` against the host services; follow-up actions are handed to `dispatch`.
    pub(crate) async fn execute_effect(
        &self,
        effect: RuntimeEffect,
        dispatch: impl Fn(DeskAction) + 'static,
    ) {
        match effect {
            RuntimeEffect::RequestFileDetails(request) => {
                if let Err(err) = self.file_channel.request_details(&request) {
                    logging::error!("get_files_details emit failed: {err}");
                }
            }
            RuntimeEffect::ClickCard(number) => dom::click_element_deferred(card_body_dom_id(number)),
            RuntimeEffect::SubmitFavorite {
                number,
                file_id,
                target,
            } => {
                if effects::submit_favorite(self.favorites.as_ref(), self.page.as_ref(), &file_id, target)
                    .await
                {
                    dispatch(DeskAction::FavoriteConfirmed {
                        number,
                        file_id,
                        state: target,
                    });
                }
            }
            RuntimeEffect::RemovePinnedFile(file_id) => {
                effects::remove_from_desktop(self.prefs.as_ref(), self.page.as_ref(), &file_id).await;
            }
            RuntimeEffect::PersistPinnedFiles(pinned) => {
                effects::persist_pinned_files(self.prefs.as_ref(), &pinned).await;
            }
            RuntimeEffect::RunPageHook(hook) => {
                let page = self.page.clone();
                dom::defer(move || effects::run_page_hook(page.as_ref(), hook));
            }
        }
    }
}
