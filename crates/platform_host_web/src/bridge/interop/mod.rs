//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use serde::Serialize;
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::SocketHandle;

/// Handler receiving a socket event payload converted to JSON.
pub type SocketEventHandler = Box<dyn Fn(Result<Value, String>)>;

pub fn socket_connect(namespace: &str) -> Result<SocketHandle, String> {
    imp::socket_connect(namespace)
}

pub fn socket_on(
    socket: &SocketHandle,
    event: &str,
    handler: SocketEventHandler,
) -> Result<(), String> {
    imp::socket_on(socket, event, handler)
}

pub fn socket_emit<T: Serialize>(
    socket: &SocketHandle,
    event: &str,
    payload: &T,
) -> Result<(), String> {
    imp::socket_emit(socket, event, payload)
}
