//! Pinned-file models and the file-handler channel contract.

pub mod channel;
pub mod types;
