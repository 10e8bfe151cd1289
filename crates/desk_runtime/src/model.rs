use std::fmt;

use platform_host::{FavoriteState, FileDetails, PinnedFiles};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// 1-based position of a card within the last rendered batch.
pub struct FileNumber(pub u32);

impl FileNumber {
    /// First file of a batch.
    pub const FIRST: Self = Self(1);

    /// Numeric value (never 0 for a valid card).
    pub const fn get(self) -> u32 {
        self.0
    }

    fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl fmt::Display for FileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction of keyboard navigation between previews.
pub enum NavDirection {
    /// `ArrowRight`.
    Next,
    /// `ArrowLeft`.
    Previous,
}

impl NavDirection {
    /// Maps a `KeyboardEvent.key` value; other keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }

    /// Steps from `current` among `count` cards, wrapping at both ends.
    ///
    /// Returns `None` when there are no cards.
    pub fn step(self, current: FileNumber, count: usize) -> Option<FileNumber> {
        let count = u32::try_from(count).ok().filter(|count| *count > 0)?;
        let current = current.0.clamp(1, count);
        let next = match self {
            Self::Next if current == count => 1,
            Self::Next => current + 1,
            Self::Previous if current == 1 => count,
            Self::Previous => current - 1,
        };
        Some(FileNumber(next))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered file card and its navigation tab.
pub struct DeskCard {
    /// Position in the batch.
    pub number: FileNumber,
    /// Server metadata.
    pub file: FileDetails,
    /// Confirmed favorite state.
    pub favorite: FavoriteState,
}

impl DeskCard {
    fn new(number: FileNumber, file: FileDetails) -> Self {
        Self {
            number,
            favorite: FavoriteState::from_flag(file.is_favorite),
            file,
        }
    }
}

/// DOM id of the clickable body of a card, the target of programmatic activation clicks.
pub fn card_body_dom_id(number: FileNumber) -> String {
    format!("desk-file-{number}")
}

/// DOM id of the navigation tab paired with a card.
pub fn tab_dom_id(number: FileNumber) -> String {
    format!("desk-tab-{number}")
}

/// Numbers a metadata batch 1..=N in delivery order.
pub fn cards_from_batch(batch: Vec<FileDetails>) -> Vec<DeskCard> {
    batch
        .into_iter()
        .enumerate()
        .map(|(index, file)| DeskCard::new(FileNumber::from_index(index), file))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Whole desktop UI state owned by the runtime provider.
pub struct DeskState {
    /// Pinned list as last loaded or written by this page.
    pub pinned: PinnedFiles,
    /// Cards of the last rendered batch, ordered by file number.
    pub cards: Vec<DeskCard>,
    /// Open preview, if any.
    pub current: Option<FileNumber>,
    /// Bumped on every render so keyed views are rebuilt instead of patched.
    pub render_generation: u64,
}

impl DeskState {
    /// Current-file pointer, `0` when no preview is open.
    pub fn current_pointer(&self) -> u32 {
        self.current.map_or(0, FileNumber::get)
    }

    /// Looks up a card by number.
    pub fn card(&self, number: FileNumber) -> Option<&DeskCard> {
        let index = number.0.checked_sub(1)? as usize;
        self.cards.get(index)
    }

    /// Mutable lookup by number.
    pub fn card_mut(&mut self, number: FileNumber) -> Option<&mut DeskCard> {
        let index = number.0.checked_sub(1)? as usize;
        self.cards.get_mut(index)
    }

    /// Returns `true` when `number` is the open preview.
    pub fn is_active(&self, number: FileNumber) -> bool {
        self.current == Some(number)
    }
}
