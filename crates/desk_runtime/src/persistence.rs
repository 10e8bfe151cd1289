//! Pinned-list persistence over the injected [`PrefsStore`].

use leptos::logging;
use platform_host::{
    load_pref_with, save_pref_with, PinnedFiles, PrefsStore, RecordId, PINNED_FILES_KEY,
};

/// Loads the pinned list, treating a missing key as empty.
///
/// A stored value that is not JSON, or not a JSON array, is overwritten with `[]` and logged.
pub async fn load_pinned_files(store: &dyn PrefsStore) -> PinnedFiles {
    match load_pref_with::<_, PinnedFiles>(store, PINNED_FILES_KEY).await {
        Ok(Some(pinned)) => pinned,
        Ok(None) => PinnedFiles::default(),
        Err(err) => {
            logging::warn!("pinned files reset after unreadable `{PINNED_FILES_KEY}` value: {err}");
            if let Err(err) = save_pinned_files(store, &PinnedFiles::default()).await {
                logging::warn!("pinned files reset failed: {err}");
            }
            PinnedFiles::default()
        }
    }
}

/// Overwrites the stored pinned list.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pinned_files(store: &dyn PrefsStore, pinned: &PinnedFiles) -> Result<(), String> {
    save_pref_with(store, PINNED_FILES_KEY, pinned).await
}

/// Re-reads the stored list, removes the first occurrence of `file_id`, and writes it back.
///
/// Returns whether an entry was removed; the list is written back either way.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn remove_pinned_file(store: &dyn PrefsStore, file_id: &RecordId) -> Result<bool, String> {
    let mut pinned = load_pinned_files(store).await;
    let removed = pinned.remove_first(file_id);
    save_pinned_files(store, &pinned).await?;
    Ok(removed)
}

/// Stores an empty pinned list.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn clear_pinned_files(store: &dyn PrefsStore) -> Result<(), String> {
    save_pinned_files(store, &PinnedFiles::default()).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn stored(store: &MemoryPrefsStore) -> Option<String> {
        block_on(store.load_pref(PINNED_FILES_KEY)).expect("load")
    }

    #[test]
    fn missing_key_loads_as_empty_list() {
        let store = MemoryPrefsStore::default();
        assert!(block_on(load_pinned_files(&store)).is_empty());
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn malformed_value_is_reset_to_empty_array() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "{\"not\":\"a list\"}")).expect("seed");

        assert!(block_on(load_pinned_files(&store)).is_empty());
        assert_eq!(stored(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn parseable_list_with_unusual_ids_is_kept() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "[5,-1,7]")).expect("seed");

        let pinned = block_on(load_pinned_files(&store));

        assert_eq!(pinned.len(), 3);
        assert_eq!(stored(&store).as_deref(), Some("[5,-1,7]"));
    }

    #[test]
    fn removal_keeps_unusual_ids_unchanged() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "[5,-1,true,5]")).expect("seed");

        let removed = block_on(remove_pinned_file(&store, &RecordId::Number(5))).expect("remove");

        assert!(removed);
        assert_eq!(stored(&store).as_deref(), Some("[-1,true,5]"));
    }

    #[test]
    fn remove_drops_only_first_occurrence() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "[5,7,5]")).expect("seed");

        let removed = block_on(remove_pinned_file(&store, &RecordId::Number(5))).expect("remove");

        assert!(removed);
        assert_eq!(stored(&store).as_deref(), Some("[7,5]"));
    }

    #[test]
    fn remove_matches_text_and_numeric_ids() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "[\"12\",3]")).expect("seed");

        let removed = block_on(remove_pinned_file(&store, &RecordId::Number(12))).expect("remove");

        assert!(removed);
        assert_eq!(stored(&store).as_deref(), Some("[3]"));
    }

    #[test]
    fn remove_of_absent_id_keeps_list() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "[1,2]")).expect("seed");

        let removed = block_on(remove_pinned_file(&store, &RecordId::Number(9))).expect("remove");

        assert!(!removed);
        assert_eq!(stored(&store).as_deref(), Some("[1,2]"));
    }

    #[test]
    fn clear_writes_empty_array() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "[1,2]")).expect("seed");

        block_on(clear_pinned_files(&store)).expect("clear");

        assert_eq!(stored(&store).as_deref(), Some("[]"));
    }
}
