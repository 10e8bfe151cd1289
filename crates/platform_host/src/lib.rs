//! Typed host-domain contracts and shared models for the pinned-file desktop.
//!
//! This crate is the API-first boundary for platform services. It exposes the pinned-file and
//! metadata models, the storage, channel, favorites and page service traits, and in-memory
//! adapters used by tests. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod favorites;
pub mod files;
pub mod host;
pub mod page;
pub mod storage;

pub use favorites::{
    add_favorite_url, remove_favorite_url, FavoriteResponse, FavoritesFuture, FavoritesService,
    MemoryFavoritesService, NoopFavoritesService, CSRF_HEADER,
};
pub use files::channel::{
    FileDetailsChannel, FileDetailsHandler, MemoryFileDetailsChannel, NoopFileDetailsChannel,
    FILES_DETAILS_EVENT, FILE_HANDLER_NAMESPACE, GET_FILES_DETAILS_EVENT,
};
pub use files::types::{
    download_url, FavoriteState, FileDetails, FileDetailsRequest, PinnedFiles, RecordId,
    PINNED_FILES_KEY,
};
pub use host::{HostServices, HostStrategy, MemoryHost};
pub use page::{MemoryPageService, NoopPageService, PageHook, PageService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
