//! Desktop UI composition: file cards, navigation tabs and page-wide input handlers.

mod card;
mod global_input;
mod tabs;

use leptos::*;

use self::{card::DeskFileCard, global_input::install_global_handlers, tabs::mount_tabs};

pub use crate::runtime_context::{use_desk_runtime, DeskProvider, DeskRuntimeContext};
use crate::model::{DeskCard, DeskState, FileNumber};

/// `<For>` key of a rendered card: a new batch never reuses views from the previous one.
type CardKey = (u64, FileNumber);

fn keyed_cards(state: &DeskState) -> Vec<(CardKey, DeskCard)> {
    state
        .cards
        .iter()
        .map(|card| ((state.render_generation, card.number), card.clone()))
        .collect()
}

/// Empties `container`, then mounts the view built by `f` as its only content.
#[cfg(target_arch = "wasm32")]
pub fn mount_replacing<F, N>(container: web_sys::HtmlElement, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    container.set_inner_html("");
    mount_to(container, f);
}

#[component]
/// Renders the pinned-file cards and wires the navigation tabs and page-wide handlers.
///
/// Mount this inside the render target; tabs are rendered into the page's tab container.
pub fn DeskShell() -> impl IntoView {
    let runtime = use_desk_runtime();
    install_global_handlers(runtime);
    mount_tabs(runtime);

    view! {
        <For
            each=move || runtime.state.with(keyed_cards)
            key=|(key, _)| *key
            let:entry
        >
            <DeskFileCard card=entry.1 />
        </For>
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{FileDetails, RecordId};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::cards_from_batch;

    fn file(id: u64) -> FileDetails {
        FileDetails {
            id: RecordId::Number(id),
            folder_id: RecordId::Number(1),
            name: format!("f{id}"),
            extension: String::new(),
            is_favorite: false,
        }
    }

    #[test]
    fn keys_change_with_every_render_batch() {
        let mut state = DeskState {
            cards: cards_from_batch(vec![file(1), file(2)]),
            render_generation: 1,
            ..DeskState::default()
        };
        let first: Vec<CardKey> = keyed_cards(&state).into_iter().map(|(key, _)| key).collect();
        state.render_generation = 2;
        let second: Vec<CardKey> = keyed_cards(&state).into_iter().map(|(key, _)| key).collect();

        assert_eq!(first, vec![(1, FileNumber(1)), (1, FileNumber(2))]);
        assert_eq!(second, vec![(2, FileNumber(1)), (2, FileNumber(2))]);
    }
}
