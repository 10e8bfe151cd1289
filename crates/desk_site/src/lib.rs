mod web_app;

use desk_runtime::DeskConfig;

pub use web_app::DeskApp;

/// Id of the element [`mount_with`] replaces with the desktop for `config`.
pub fn render_target_id(config: &DeskConfig) -> &'static str {
    config.render_target_id
}

/// Mounts the desktop into the page's default render target.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    mount_with(DeskConfig::default());
}

/// Mounts the desktop described by `config`, replacing the render target's content.
///
/// Logs an error and mounts nothing when the target element is missing.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount_with(config: DeskConfig) {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let target_id = render_target_id(&config);
    let target = leptos::document()
        .get_element_by_id(target_id)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(target) = target else {
        leptos::logging::error!("#{target_id} not found; desktop not mounted");
        return;
    };
    desk_runtime::mount_replacing(target, move || leptos::view! { <DeskApp config /> })
}
