use super::*;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::{prelude::*, JsCast};

#[wasm_bindgen(inline_js = r#"
function fail(message) {
  throw new Error(message);
}

export function jsSocketConnect(namespace) {
  if (typeof io !== 'function') {
    fail('Socket.IO client is not loaded on this page');
  }
  return io(namespace);
}

export function jsSocketOn(socket, event, handler) {
  socket.on(event, (payload) => handler(payload));
}

export function jsSocketEmit(socket, event, payload) {
  socket.emit(event, payload);
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = jsSocketConnect)]
    fn js_socket_connect(namespace: &str) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch, js_name = jsSocketOn)]
    fn js_socket_on(socket: &JsValue, event: &str, handler: &js_sys::Function)
        -> Result<(), JsValue>;
    #[wasm_bindgen(catch, js_name = jsSocketEmit)]
    fn js_socket_emit(socket: &JsValue, event: &str, payload: JsValue) -> Result<(), JsValue>;
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

#[derive(Debug, Clone)]
pub struct SocketHandle(JsValue);

pub fn socket_connect(namespace: &str) -> Result<SocketHandle, String> {
    js_socket_connect(namespace)
        .map(SocketHandle)
        .map_err(js_error_to_string)
}

pub fn socket_on(
    socket: &SocketHandle,
    event: &str,
    handler: SocketEventHandler,
) -> Result<(), String> {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
        handler(from_value::<Value>(payload).map_err(|e| e.to_string()));
    });
    js_socket_on(&socket.0, event, callback.as_ref().unchecked_ref())
        .map_err(js_error_to_string)?;
    // Subscriptions live as long as the document.
    callback.forget();
    Ok(())
}

pub fn socket_emit<T: Serialize>(
    socket: &SocketHandle,
    event: &str,
    payload: &T,
) -> Result<(), String> {
    let value = payload
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    js_socket_emit(&socket.0, event, value).map_err(js_error_to_string)
}
