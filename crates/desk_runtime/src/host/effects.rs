use leptos::logging;
use platform_host::{
    FavoriteState, FavoritesService, PageHook, PageService, PinnedFiles, PrefsStore, RecordId,
};

use crate::persistence;

/// Sends the favorite mutation and alerts on failure. Returns whether the server confirmed it.
pub(super) async fn submit_favorite(
    favorites: &dyn FavoritesService,
    page: &dyn PageService,
    file_id: &RecordId,
    target: FavoriteState,
) -> bool {
    match favorites.set_favorite(file_id, target).await {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("favorite update for file {file_id} failed: {err}");
            page.alert(&favorite_failure_message(target, &err));
            false
        }
    }
}

pub(super) fn favorite_failure_message(target: FavoriteState, err: &str) -> String {
    let action = match target {
        FavoriteState::Favorite => "l'ajout du favori",
        FavoriteState::NotFavorite => "la suppression du favori",
    };
    if err.is_empty() {
        format!("Erreur lors de {action}.")
    } else {
        format!("Erreur lors de {action} : {err}")
    }
}

/// Removes one occurrence of `file_id` from the stored list and reloads the page.
pub(super) async fn remove_from_desktop(
    prefs: &dyn PrefsStore,
    page: &dyn PageService,
    file_id: &RecordId,
) {
    match persistence::remove_pinned_file(prefs, file_id).await {
        Ok(true) => {}
        Ok(false) => logging::log!("file {file_id} was not pinned"),
        Err(err) => logging::warn!("pinned file removal failed: {err}"),
    }
    if let Err(err) = page.reload() {
        logging::error!("page reload failed: {err}");
    }
}

pub(super) async fn persist_pinned_files(prefs: &dyn PrefsStore, pinned: &PinnedFiles) {
    if let Err(err) = persistence::save_pinned_files(prefs, pinned).await {
        logging::warn!("pinned files persist failed: {err}");
    }
}

pub(super) fn run_page_hook(page: &dyn PageService, hook: PageHook) {
    if let Err(err) = page.run_hook(hook) {
        logging::warn!("{} failed: {err}", hook.function_name());
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryHost, PINNED_FILES_KEY};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn confirmed_favorite_sends_target_without_alert() {
        let host = MemoryHost::default();
        let id = RecordId::Number(4);

        let confirmed = block_on(submit_favorite(
            &host.favorites,
            &host.page,
            &id,
            FavoriteState::Favorite,
        ));

        assert!(confirmed);
        assert_eq!(host.favorites.calls(), vec![(id, FavoriteState::Favorite)]);
        assert!(host.page.alerts().is_empty());
    }

    #[test]
    fn failed_favorite_alerts_with_server_message() {
        let host = MemoryHost::default();
        host.favorites.set_failure(Some("compte desactivé"));

        let confirmed = block_on(submit_favorite(
            &host.favorites,
            &host.page,
            &RecordId::Number(4),
            FavoriteState::NotFavorite,
        ));

        assert!(!confirmed);
        assert_eq!(
            host.page.alerts(),
            vec!["Erreur lors de la suppression du favori : compte desactivé".to_string()]
        );
    }

    #[test]
    fn failure_message_without_detail() {
        assert_eq!(
            favorite_failure_message(FavoriteState::Favorite, ""),
            "Erreur lors de l'ajout du favori."
        );
    }

    #[test]
    fn removal_rewrites_list_then_reloads() {
        let host = MemoryHost::default();
        block_on(host.prefs.save_pref(PINNED_FILES_KEY, "[1,2,1]")).expect("seed");

        block_on(remove_from_desktop(&host.prefs, &host.page, &RecordId::Number(1)));

        assert_eq!(
            block_on(host.prefs.load_pref(PINNED_FILES_KEY)).expect("load").as_deref(),
            Some("[2,1]")
        );
        assert_eq!(host.page.reloads(), 1);
    }

    #[test]
    fn removal_of_unpinned_file_still_reloads() {
        let host = MemoryHost::default();
        block_on(host.prefs.save_pref(PINNED_FILES_KEY, "[2]")).expect("seed");

        block_on(remove_from_desktop(&host.prefs, &host.page, &RecordId::Number(7)));

        assert_eq!(
            block_on(host.prefs.load_pref(PINNED_FILES_KEY)).expect("load").as_deref(),
            Some("[2]")
        );
        assert_eq!(host.page.reloads(), 1);
    }

    #[test]
    fn clear_all_effects_persist_and_run_hook() {
        let host = MemoryHost::default();
        block_on(host.prefs.save_pref(PINNED_FILES_KEY, "[3]")).expect("seed");

        block_on(persist_pinned_files(&host.prefs, &PinnedFiles::default()));
        run_page_hook(&host.page, PageHook::BaseAfterRender);

        assert_eq!(
            block_on(host.prefs.load_pref(PINNED_FILES_KEY)).expect("load").as_deref(),
            Some("[]")
        );
        assert_eq!(host.page.hooks(), vec![PageHook::BaseAfterRender]);
    }
}
