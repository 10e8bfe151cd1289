//! Page-level service backed by `window`.

use platform_host::{PageHook, PageService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser page service: `window.alert`, `location.reload`, and global hook functions.
pub struct WebPageService;

impl PageService for WebPageService {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
        }
    }

    fn reload(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            return window
                .location()
                .reload()
                .map_err(|err| format!("location.reload failed: {err:?}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }

    fn run_hook(&self, hook: PageHook) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{JsCast, JsValue};

            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let value = js_sys::Reflect::get(&window, &JsValue::from_str(hook.function_name()))
                .map_err(|err| format!("{} lookup failed: {err:?}", hook.function_name()))?;
            let Some(function) = value.dyn_ref::<js_sys::Function>() else {
                return Ok(());
            };
            return function
                .call0(&window)
                .map(|_| ())
                .map_err(|err| format!("{} failed: {err:?}", hook.function_name()));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = hook;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_page_service_is_inert() {
        let page: &dyn PageService = &WebPageService;
        page.alert("ignored");
        page.reload().expect("reload");
        page.run_hook(PageHook::PreviewAfterRender).expect("hook");
    }
}
