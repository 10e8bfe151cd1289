//! Favorite-toggle service contracts and endpoint helpers.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::files::types::{FavoriteState, RecordId};

/// Request header carrying the page CSRF token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Object-safe boxed future used by [`FavoritesService`].
pub type FavoritesFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// `DELETE` endpoint removing a file from the user's favorites.
pub fn remove_favorite_url(file_id: &RecordId) -> String {
    format!("/favori/{file_id}")
}

/// `POST` endpoint adding a file to the user's favorites.
pub fn add_favorite_url(file_id: &RecordId) -> String {
    format!("/recherche/favori/{file_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// JSON body answered by both favorite endpoints.
///
/// Current servers answer `{ "status": "ok" }`; older ones echo `{ "file": <id> }` on success and
/// `{ "error": "<message>" }` on failure.
pub struct FavoriteResponse {
    /// `"ok"` on success.
    #[serde(default)]
    pub status: Option<String>,
    /// Echoed file id on success.
    #[serde(default)]
    pub file: Option<RecordId>,
    /// Server-side failure message.
    #[serde(default)]
    pub error: Option<String>,
}

impl FavoriteResponse {
    /// Returns `true` when the body confirms the mutation.
    pub fn is_ok(&self) -> bool {
        if self.error.is_some() {
            return false;
        }
        match self.status.as_deref() {
            Some(status) => status == "ok",
            None => self.file.is_some(),
        }
    }

    /// Converts the body into a service result.
    ///
    /// # Errors
    ///
    /// Returns the server message (or the unexpected status) when the body is not a confirmation.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_ok() {
            return Ok(());
        }
        Err(self
            .error
            .or_else(|| self.status.map(|status| format!("unexpected status `{status}`")))
            .unwrap_or_else(|| "empty response".to_string()))
    }
}

/// Host service for server-side favorite mutations.
pub trait FavoritesService {
    /// Moves `file_id` to `target`. Resolves only after the server confirmed the change.
    fn set_favorite<'a>(
        &'a self,
        file_id: &'a RecordId,
        target: FavoriteState,
    ) -> FavoritesFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Favorites service for targets without a server.
pub struct NoopFavoritesService;

impl FavoritesService for NoopFavoritesService {
    fn set_favorite<'a>(
        &'a self,
        _file_id: &'a RecordId,
        _target: FavoriteState,
    ) -> FavoritesFuture<'a, Result<(), String>> {
        Box::pin(async { Err("favorites are unavailable on this host".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory favorites service recording calls, with an optional forced failure.
pub struct MemoryFavoritesService {
    calls: Rc<RefCell<Vec<(RecordId, FavoriteState)>>>,
    failure: Rc<RefCell<Option<String>>>,
}

impl MemoryFavoritesService {
    /// Makes every following call fail with `message` (`None` restores success).
    pub fn set_failure(&self, message: Option<&str>) {
        *self.failure.borrow_mut() = message.map(str::to_string);
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<(RecordId, FavoriteState)> {
        self.calls.borrow().clone()
    }
}

impl FavoritesService for MemoryFavoritesService {
    fn set_favorite<'a>(
        &'a self,
        file_id: &'a RecordId,
        target: FavoriteState,
    ) -> FavoritesFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.calls.borrow_mut().push((file_id.clone(), target));
            match self.failure.borrow().clone() {
                Some(message) => Err(message),
                None => Ok(()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    #[test]
    fn endpoints_match_server_routes() {
        let id = RecordId::Number(42);
        assert_eq!(remove_favorite_url(&id), "/favori/42");
        assert_eq!(add_favorite_url(&id), "/recherche/favori/42");
    }

    #[test]
    fn response_accepts_status_ok_and_file_echo() {
        let ok: FavoriteResponse = serde_json::from_value(json!({ "status": "ok" })).expect("ok");
        assert!(ok.is_ok());

        let echo: FavoriteResponse = serde_json::from_value(json!({ "file": 42 })).expect("echo");
        assert!(echo.into_result().is_ok());
    }

    #[test]
    fn response_reports_server_error_or_status() {
        let error: FavoriteResponse =
            serde_json::from_value(json!({ "error": "Ce fichier n'existe pas." })).expect("error");
        assert_eq!(
            error.into_result(),
            Err("Ce fichier n'existe pas.".to_string())
        );

        let status: FavoriteResponse =
            serde_json::from_value(json!({ "status": "ko" })).expect("status");
        assert_eq!(
            status.into_result(),
            Err("unexpected status `ko`".to_string())
        );

        assert_eq!(
            FavoriteResponse::default().into_result(),
            Err("empty response".to_string())
        );
    }

    #[test]
    fn memory_service_records_calls_and_fails_on_demand() {
        let service = MemoryFavoritesService::default();
        let service_obj: &dyn FavoritesService = &service;
        let id = RecordId::Number(1);

        block_on(service_obj.set_favorite(&id, FavoriteState::Favorite)).expect("add");
        service.set_failure(Some("boom"));
        assert_eq!(
            block_on(service_obj.set_favorite(&id, FavoriteState::NotFavorite)),
            Err("boom".to_string())
        );
        assert_eq!(
            service.calls(),
            vec![
                (id.clone(), FavoriteState::Favorite),
                (id, FavoriteState::NotFavorite)
            ]
        );
    }

    #[test]
    fn noop_service_rejects() {
        let id = RecordId::Number(1);
        assert!(block_on(NoopFavoritesService.set_favorite(&id, FavoriteState::Favorite)).is_err());
    }
}
