//! Key/value preference storage contracts and adapters.
//!
//! Values are JSON text stored per key; the pinned-file list is the main tenant.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for small persisted values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store that persists nothing.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string, shared between clones.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{PinnedFiles, RecordId, PINNED_FILES_KEY};

    #[test]
    fn memory_prefs_store_shares_values_between_clones() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref(PINNED_FILES_KEY, "[1,2]")).expect("save");
        assert_eq!(
            block_on(other.load_pref(PINNED_FILES_KEY)).expect("load"),
            Some("[1,2]".to_string())
        );
        block_on(other.save_pref(PINNED_FILES_KEY, "[]")).expect("overwrite");
        assert_eq!(
            block_on(store_obj.load_pref(PINNED_FILES_KEY)).expect("load"),
            Some("[]".to_string())
        );
    }

    #[test]
    fn typed_helpers_round_trip_pinned_files() {
        let store = MemoryPrefsStore::default();
        let pinned = PinnedFiles::new(vec![RecordId::Number(3), RecordId::from("x")]);

        block_on(save_pref_with(&store, PINNED_FILES_KEY, &pinned)).expect("save typed");
        assert_eq!(
            block_on(store.load_pref(PINNED_FILES_KEY)).expect("raw"),
            Some("[3,\"x\"]".to_string())
        );
        let loaded: Option<PinnedFiles> =
            block_on(load_pref_with(&store, PINNED_FILES_KEY)).expect("load typed");
        assert_eq!(loaded, Some(pinned));
    }

    #[test]
    fn typed_load_reports_malformed_json() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(PINNED_FILES_KEY, "{not json")).expect("save");
        assert!(block_on(load_pref_with::<_, PinnedFiles>(&store, PINNED_FILES_KEY)).is_err());
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store_obj: &dyn PrefsStore = &NoopPrefsStore;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "[]")).expect("save");
    }
}
