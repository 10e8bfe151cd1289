//! Desktop file data types shared across host contracts and implementations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// localStorage key holding the pinned-file list.
pub const PINNED_FILES_KEY: &str = "desktop";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Server-side record identifier (file or folder).
///
/// The pinned list and the metadata service may carry identifiers either as JSON integers or as
/// JSON strings. Any other JSON value (negative or fractional numbers, booleans, `null`) is kept
/// as-is so a read-modify-write cycle never rewrites or drops stored entries;
/// [`RecordId::matches`] compares by textual value.
pub enum RecordId {
    /// Integer identifier.
    Number(u64),
    /// String identifier.
    Text(String),
    /// Any other JSON value, carried through unchanged.
    Other(serde_json::Value),
}

impl RecordId {
    /// Returns `true` when both ids render to the same textual value (`12` matches `"12"`).
    pub fn matches(&self, other: &RecordId) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Metadata record delivered by the file-handler service for one pinned file.
pub struct FileDetails {
    /// File identifier.
    #[serde(rename = "id_Fichier")]
    pub id: RecordId,
    /// Containing folder identifier.
    #[serde(rename = "id_Dossier")]
    pub folder_id: RecordId,
    /// Display name.
    #[serde(rename = "nom_Fichier")]
    pub name: String,
    /// File extension without the leading dot.
    #[serde(rename = "extension_Fichier", default)]
    pub extension: String,
    /// Whether the current user has favorited the file.
    #[serde(default)]
    pub is_favorite: bool,
}

impl FileDetails {
    /// Direct download URL for this file.
    pub fn download_url(&self) -> String {
        download_url(&self.folder_id, &self.id)
    }
}

/// Builds the attachment download URL for a file inside a folder.
pub fn download_url(folder_id: &RecordId, file_id: &RecordId) -> String {
    format!("/classeur/{folder_id}/fichier/{file_id}?as_attachment=true")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload of the `get_files_details` channel event.
pub struct FileDetailsRequest {
    /// Identifiers to resolve, in pinned-list order.
    pub files: Vec<RecordId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Favorite flag of a rendered file card.
pub enum FavoriteState {
    /// The file is in the user's favorites.
    Favorite,
    /// The file is not in the user's favorites.
    #[default]
    NotFavorite,
}

impl FavoriteState {
    /// Maps the server `is_favorite` flag.
    pub const fn from_flag(is_favorite: bool) -> Self {
        if is_favorite {
            Self::Favorite
        } else {
            Self::NotFavorite
        }
    }

    /// Returns the opposite state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Favorite => Self::NotFavorite,
            Self::NotFavorite => Self::Favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
/// Ordered list of pinned file identifiers persisted under [`PINNED_FILES_KEY`].
///
/// Duplicates are allowed and preserved.
pub struct PinnedFiles(Vec<RecordId>);

impl PinnedFiles {
    /// Builds a pinned list from identifiers in order.
    pub fn new(ids: Vec<RecordId>) -> Self {
        Self(ids)
    }

    /// Identifiers in pinned order.
    pub fn ids(&self) -> &[RecordId] {
        &self.0
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing is pinned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes the first entry matching `id`. Returns whether an entry was removed.
    pub fn remove_first(&mut self, id: &RecordId) -> bool {
        match self.0.iter().position(|pinned| pinned.matches(id)) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Builds the channel request for the full list.
    pub fn details_request(&self) -> FileDetailsRequest {
        FileDetailsRequest {
            files: self.0.clone(),
        }
    }
}
