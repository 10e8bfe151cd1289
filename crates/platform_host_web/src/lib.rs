//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for pinned-list storage, the
//! Socket.IO file-handler channel, favorite mutations over `fetch`, and page services.
//!
//! Non-wasm builds compile to inert fallbacks so the adapters stay unit-testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod channel;
pub mod favorites;
pub mod page;
pub mod storage;

pub use adapters::{
    build_host_services, favorites_service, file_channel, host_strategy_name, page_service,
    prefs_store, selected_host_strategy, FavoritesServiceAdapter, FileChannelAdapter,
    PageServiceAdapter, PrefsStoreAdapter,
};
pub use channel::{decode_files_details, WebFileChannel};
pub use favorites::{favorite_request, settle_favorite_response, WebFavoritesService};
pub use page::WebPageService;
pub use storage::local_prefs::WebPrefsStore;
