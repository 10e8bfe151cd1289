//! Pinned-file desktop runtime: state model, reducer, host effect execution and Leptos views.

pub mod components;
pub mod config;
mod effect_executor;
mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;

#[cfg(target_arch = "wasm32")]
pub use components::mount_replacing;
pub use components::{use_desk_runtime, DeskProvider, DeskRuntimeContext, DeskShell};
pub use config::DeskConfig;
pub use host::DeskHostContext;
pub use model::*;
pub use persistence::{clear_pinned_files, load_pinned_files, remove_pinned_file, save_pinned_files};
pub use reducer::{reduce_desk, DeskAction, ReducerError, RuntimeEffect};
