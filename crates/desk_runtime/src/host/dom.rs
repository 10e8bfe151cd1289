#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Runs `f` on the next macrotask, once the current reactive flush has reached the DOM.
///
/// Outside the browser `f` runs immediately.
pub(super) fn defer(f: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(f);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
            .is_err()
        {
            leptos::logging::warn!("setTimeout unavailable; deferred desk task dropped");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    f();
}

/// Dispatches a real `click` on the element with `dom_id` so sibling page scripts observe it.
pub(super) fn click_element_deferred(dom_id: String) {
    #[cfg(target_arch = "wasm32")]
    defer(move || {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&dom_id) else {
            leptos::logging::warn!("click target #{dom_id} is not rendered");
            return;
        };
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            element.click();
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dom_id;
}

/// Returns `true` when the event target is, or sits inside, an element matching `selector`.
pub(crate) fn event_target_within(event: &web_sys::Event, selector: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(selector).ok().flatten())
            .is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, selector);
        false
    }
}
