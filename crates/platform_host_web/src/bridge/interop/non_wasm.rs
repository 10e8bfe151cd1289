use super::*;

fn unsupported() -> String {
    "Socket.IO transport is only available when compiled for wasm32".to_string()
}

#[derive(Debug, Clone)]
pub struct SocketHandle;

pub fn socket_connect(_namespace: &str) -> Result<SocketHandle, String> {
    Err(unsupported())
}

pub fn socket_on(
    _socket: &SocketHandle,
    _event: &str,
    _handler: SocketEventHandler,
) -> Result<(), String> {
    Err(unsupported())
}

pub fn socket_emit<T: Serialize>(
    _socket: &SocketHandle,
    _event: &str,
    _payload: &T,
) -> Result<(), String> {
    Err(unsupported())
}
