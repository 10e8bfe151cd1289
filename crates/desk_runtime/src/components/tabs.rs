use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::keyed_cards;
use crate::{
    model::{tab_dom_id, FileNumber},
    reducer::DeskAction,
    runtime_context::DeskRuntimeContext,
};

fn tab_link_class(active: bool) -> &'static str {
    if active {
        "nav-link text-truncate active"
    } else {
        "nav-link text-truncate"
    }
}

/// Replaces the content of the page's tab container with the tab list, or logs and skips when
/// the container is missing.
pub(super) fn mount_tabs(runtime: DeskRuntimeContext) {
    #[cfg(target_arch = "wasm32")]
    {
        let selector = runtime.config.get_value().tab_container_selector;
        let container = document()
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
        let Some(container) = container else {
            logging::error!("tab container `{selector}` not found; tabs are not rendered");
            return;
        };
        super::mount_replacing(container, move || view! { <DeskTabs runtime /> });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = runtime;
}

#[component]
fn DeskTabs(runtime: DeskRuntimeContext) -> impl IntoView {
    view! {
        <For
            each=move || runtime.state.with(keyed_cards)
            key=|(key, _)| *key
            let:entry
        >
            <DeskTab runtime number=entry.1.number name=entry.1.file.name />
        </For>
    }
}

#[component]
fn DeskTab(runtime: DeskRuntimeContext, number: FileNumber, name: String) -> impl IntoView {
    let active = create_memo(move |_| runtime.state.with(|state| state.is_active(number)));

    view! {
        <li class="nav-item" role="presentation">
            <button
                id=tab_dom_id(number)
                type="button"
                role="tab"
                class=move || tab_link_class(active.get())
                style="max-width: 12rem;"
                aria-selected=move || active.get().to_string()
                title=name.clone()
                on:click=move |_| {
                    runtime.dispatch_action(DeskAction::ActivateFromTab { number });
                }
            >
                {name}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_tab_is_marked() {
        assert_eq!(tab_link_class(true), "nav-link text-truncate active");
        assert_eq!(tab_link_class(false), "nav-link text-truncate");
    }
}
