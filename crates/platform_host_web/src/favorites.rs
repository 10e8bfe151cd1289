//! `fetch`-backed favorites service.

use platform_host::{
    add_favorite_url, remove_favorite_url, FavoriteResponse, FavoriteState, FavoritesFuture,
    FavoritesService, RecordId,
};

/// HTTP method and URL moving `file_id` to `target`.
pub fn favorite_request(file_id: &RecordId, target: FavoriteState) -> (&'static str, String) {
    match target {
        FavoriteState::Favorite => ("POST", add_favorite_url(file_id)),
        FavoriteState::NotFavorite => ("DELETE", remove_favorite_url(file_id)),
    }
}

/// Maps an HTTP outcome to the favorites service result.
///
/// # Errors
///
/// Returns the server message when present, otherwise the HTTP status or a decode failure.
pub fn settle_favorite_response(
    http_ok: bool,
    status: u16,
    body: Option<FavoriteResponse>,
) -> Result<(), String> {
    if !http_ok {
        return Err(body
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("HTTP {status}")));
    }
    match body {
        Some(body) => body.into_result(),
        None => Err("response is not valid JSON".to_string()),
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser favorites service calling the favorite endpoints with the page CSRF token.
pub struct WebFavoritesService;

impl FavoritesService for WebFavoritesService {
    fn set_favorite<'a>(
        &'a self,
        file_id: &'a RecordId,
        target: FavoriteState,
    ) -> FavoritesFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let (method, url) = favorite_request(file_id, target);

            #[cfg(target_arch = "wasm32")]
            {
                return fetch_favorite(method, &url).await;
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (method, url);
                Err("fetch is only available when compiled for wasm32".to_string())
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn csrf_token(window: &web_sys::Window) -> Option<String> {
    window
        .document()?
        .query_selector("meta[name=\"csrf-token\"]")
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(target_arch = "wasm32")]
async fn fetch_favorite(method: &str, url: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    if let Some(token) = csrf_token(&window) {
        headers
            .set(platform_host::CSRF_HEADER, &token)
            .map_err(js_error)?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(&headers);
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    let body = match response.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| serde_wasm_bindgen::from_value::<FavoriteResponse>(value).ok()),
        Err(_) => None,
    };
    settle_favorite_response(response.ok(), response.status(), body)
}
