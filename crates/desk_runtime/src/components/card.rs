use leptos::*;
use platform_host::FavoriteState;

use crate::{
    model::{card_body_dom_id, DeskCard},
    reducer::DeskAction,
    runtime_context::use_desk_runtime,
};

const NAME_CLAMP_STYLE: &str =
    "display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden;";

fn favorite_icon_class(state: FavoriteState) -> &'static str {
    match state {
        FavoriteState::Favorite => "bi bi-star-fill",
        FavoriteState::NotFavorite => "bi bi-star",
    }
}

fn favorite_control_class(state: FavoriteState) -> &'static str {
    match state {
        FavoriteState::Favorite => "desk-favorite btn btn-link p-0 favorite",
        FavoriteState::NotFavorite => "desk-favorite btn btn-link p-0",
    }
}

fn favorite_control_label(state: FavoriteState) -> &'static str {
    match state {
        FavoriteState::Favorite => "Retirer des favoris",
        FavoriteState::NotFavorite => "Ajouter aux favoris",
    }
}

#[component]
pub(super) fn DeskFileCard(card: DeskCard) -> impl IntoView {
    let runtime = use_desk_runtime();
    let number = card.number;
    let download_url = card.file.download_url();
    let name = card.file.name;
    let file_id = card.file.id.to_string();
    let extension = card.file.extension;

    let favorite = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.card(number).map(|card| card.favorite))
            .unwrap_or_default()
    });
    let active = create_memo(move |_| runtime.state.with(|state| state.is_active(number)));

    view! {
        <div class="col">
            <div class="card h-100 desk-file" class:border-primary=move || active.get()>
                <div
                    id=card_body_dom_id(number)
                    class="card-body text-center"
                    role="button"
                    data-file-number=number.get()
                    data-file-id=file_id
                    data-extension=extension
                    on:click=move |_| {
                        runtime.dispatch_action(DeskAction::ActivateFromCard { number });
                    }
                >
                    <i class="bi bi-file-earmark fs-1" aria-hidden="true"></i>
                    <p class="card-text desk-file-name" style=NAME_CLAMP_STYLE title=name.clone()>
                        {name}
                    </p>
                </div>
                <div class="card-footer d-flex justify-content-between">
                    <a
                        href="#"
                        class=move || favorite_control_class(favorite.get())
                        title=move || favorite_control_label(favorite.get())
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            runtime.dispatch_action(DeskAction::ToggleFavorite { number });
                        }
                    >
                        <i class=move || favorite_icon_class(favorite.get())></i>
                    </a>
                    <a
                        href="#"
                        class="desk-remove btn btn-link p-0"
                        title="Retirer du bureau"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            runtime.dispatch_action(DeskAction::RemoveFromDesktop { number });
                        }
                    >
                        <i class="bi bi-pin-angle-fill"></i>
                    </a>
                    <a href=download_url class="desk-download btn btn-link p-0" title="Télécharger">
                        <i class="bi bi-download"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_visuals_follow_state() {
        assert_eq!(favorite_icon_class(FavoriteState::Favorite), "bi bi-star-fill");
        assert_eq!(favorite_icon_class(FavoriteState::NotFavorite), "bi bi-star");
        assert!(favorite_control_class(FavoriteState::Favorite).ends_with(" favorite"));
        assert!(!favorite_control_class(FavoriteState::NotFavorite).contains(" favorite"));
    }
}
