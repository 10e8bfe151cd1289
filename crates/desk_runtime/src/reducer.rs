//! Reducer actions, side-effect intents, and transition logic for the pinned-file desktop.

use platform_host::{
    FavoriteState, FileDetails, FileDetailsRequest, PageHook, PinnedFiles, RecordId,
};
use thiserror::Error;

use crate::model::{cards_from_batch, DeskState, FileNumber, NavDirection};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desk`] to mutate [`DeskState`].
pub enum DeskAction {
    /// The pinned list was read from storage at boot.
    PinnedFilesLoaded {
        /// Loaded (or reset) list.
        pinned: PinnedFiles,
    },
    /// A `files_details` batch arrived; replaces the whole desktop.
    FilesLoaded {
        /// Records in server order.
        batch: Vec<FileDetails>,
    },
    /// The card body was clicked (by the user or programmatically).
    ActivateFromCard {
        /// Clicked card.
        number: FileNumber,
    },
    /// The navigation tab was clicked.
    ActivateFromTab {
        /// Clicked tab.
        number: FileNumber,
    },
    /// Arrow-key navigation between previews.
    Navigate {
        /// Step direction.
        direction: NavDirection,
    },
    /// The preview close button was clicked.
    ClosePreview,
    /// The clear-all control was clicked.
    ClearAll,
    /// The favorite control of a card was clicked.
    ToggleFavorite {
        /// Card whose control was clicked.
        number: FileNumber,
    },
    /// The server confirmed a favorite mutation.
    FavoriteConfirmed {
        /// Card the request was issued for.
        number: FileNumber,
        /// File the request was issued for.
        file_id: RecordId,
        /// Confirmed state.
        state: FavoriteState,
    },
    /// The remove-from-desktop control of a card was clicked.
    RemoveFromDesktop {
        /// Card whose control was clicked.
        number: FileNumber,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desk`] for the host to execute.
pub enum RuntimeEffect {
    /// Emit `get_files_details` on the file-handler channel.
    RequestFileDetails(FileDetailsRequest),
    /// Click the card body in the DOM once it exists, so page scripts observe the activation.
    ClickCard(FileNumber),
    /// Ask the server to move a file to a favorite state.
    SubmitFavorite {
        /// Card the request is issued for.
        number: FileNumber,
        /// File to mutate.
        file_id: RecordId,
        /// Requested state.
        target: FavoriteState,
    },
    /// Remove one occurrence of a file from the stored pinned list, then reload the page.
    RemovePinnedFile(RecordId),
    /// Overwrite the stored pinned list.
    PersistPinnedFiles(PinnedFiles),
    /// Invoke a sibling-script hook after the DOM settles.
    RunPageHook(PageHook),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not apply to the current render.
pub enum ReducerError {
    /// The file number is not part of the last rendered batch.
    #[error("file number {0} is not rendered")]
    UnknownFile(FileNumber),
    /// A favorite confirmation arrived for a card that now shows another file.
    #[error("favorite confirmation for file {file_id} no longer matches card {number}")]
    StaleFavorite {
        /// Card the request was issued for.
        number: FileNumber,
        /// File the request was issued for.
        file_id: RecordId,
    },
}

/// Applies a [`DeskAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action addresses a card that is not rendered; the state is
/// left untouched in that case.
pub fn reduce_desk(
    state: &mut DeskState,
    action: DeskAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DeskAction::PinnedFilesLoaded { pinned } => {
            effects.push(RuntimeEffect::RequestFileDetails(pinned.details_request()));
            state.pinned = pinned;
        }
        DeskAction::FilesLoaded { batch } => {
            state.cards = cards_from_batch(batch);
            state.current = None;
            state.render_generation += 1;
            effects.push(RuntimeEffect::RunPageHook(PageHook::PreviewAfterRender));
        }
        DeskAction::ActivateFromCard { number } => {
            activate(state, number)?;
        }
        DeskAction::ActivateFromTab { number } => {
            activate(state, number)?;
            effects.push(RuntimeEffect::ClickCard(number));
        }
        DeskAction::Navigate { direction } => {
            let Some(current) = state.current else {
                return Ok(effects);
            };
            match direction.step(current, state.cards.len()) {
                Some(next) => {
                    activate(state, next)?;
                    effects.push(RuntimeEffect::ClickCard(next));
                }
                None => state.current = None,
            }
        }
        DeskAction::ClosePreview => {
            state.current = None;
        }
        DeskAction::ClearAll => {
            state.pinned = PinnedFiles::default();
            state.cards.clear();
            state.current = None;
            state.render_generation += 1;
            effects.push(RuntimeEffect::PersistPinnedFiles(PinnedFiles::default()));
            effects.push(RuntimeEffect::RunPageHook(PageHook::BaseAfterRender));
        }
        DeskAction::ToggleFavorite { number } => {
            let card = state
                .card(number)
                .ok_or(ReducerError::UnknownFile(number))?;
            effects.push(RuntimeEffect::SubmitFavorite {
                number,
                file_id: card.file.id.clone(),
                target: card.favorite.toggled(),
            });
        }
        DeskAction::FavoriteConfirmed {
            number,
            file_id,
            state: confirmed,
        } => {
            match state.card_mut(number) {
                Some(card) if card.file.id.matches(&file_id) => card.favorite = confirmed,
                _ => return Err(ReducerError::StaleFavorite { number, file_id }),
            }
        }
        DeskAction::RemoveFromDesktop { number } => {
            let card = state
                .card(number)
                .ok_or(ReducerError::UnknownFile(number))?;
            effects.push(RuntimeEffect::RemovePinnedFile(card.file.id.clone()));
        }
    }
    Ok(effects)
}

fn activate(state: &mut DeskState, number: FileNumber) -> Result<(), ReducerError> {
    if state.card(number).is_none() {
        return Err(ReducerError::UnknownFile(number));
    }
    state.current = Some(number);
    Ok(())
}
