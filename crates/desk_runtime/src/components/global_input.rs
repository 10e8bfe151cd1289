use leptos::*;

use crate::{
    host::event_target_within, model::NavDirection, reducer::DeskAction,
    runtime_context::DeskRuntimeContext,
};

/// Arrow keys step between previews while one is open; other keys and a closed preview are
/// ignored.
pub(super) fn navigation_for_key(current_pointer: u32, key: &str) -> Option<NavDirection> {
    if current_pointer == 0 {
        return None;
    }
    NavDirection::from_key(key)
}

/// Registers the window-level keyboard and delegated click handlers for close and clear-all.
pub(super) fn install_global_handlers(runtime: DeskRuntimeContext) {
    let config = runtime.config.get_value();
    let close_selector = config.close_selector;
    let clear_selector = config.clear_selector();

    let keyboard_listener = window_event_listener(ev::keydown, move |ev| {
        let pointer = runtime.state.with_untracked(|state| state.current_pointer());
        if let Some(direction) = navigation_for_key(pointer, &ev.key()) {
            runtime.dispatch_action(DeskAction::Navigate { direction });
        }
    });

    let click_listener = window_event_listener(ev::click, move |ev| {
        if event_target_within(&ev, close_selector) {
            runtime.dispatch_action(DeskAction::ClosePreview);
        } else if event_target_within(&ev, &clear_selector) {
            ev.prevent_default();
            runtime.dispatch_action(DeskAction::ClearAll);
        }
    });

    on_cleanup(move || {
        keyboard_listener.remove();
        click_listener.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate_only_with_open_preview() {
        assert_eq!(navigation_for_key(0, "ArrowRight"), None);
        assert_eq!(navigation_for_key(2, "ArrowRight"), Some(NavDirection::Next));
        assert_eq!(navigation_for_key(2, "ArrowLeft"), Some(NavDirection::Previous));
        assert_eq!(navigation_for_key(2, "Escape"), None);
    }
}
