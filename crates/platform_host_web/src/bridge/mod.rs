//! Browser capability bridge implementations for `platform_host_web` service adapters.
//!
//! The only JS-side transport is the page's Socket.IO client; storage, fetch and page services
//! go through `web-sys` directly.

mod interop;

pub(crate) use interop::{socket_connect, socket_emit, socket_on, SocketHandle};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn socket_public_api_non_wasm_parity() {
        let expected = "Socket.IO transport is only available when compiled for wasm32".to_string();

        assert_eq!(
            socket_connect("/file_handler").expect_err("connect should fail"),
            expected
        );
        let socket = SocketHandle;
        assert_eq!(
            socket_on(&socket, "files_details", Box::new(|_| {})).expect_err("on should fail"),
            expected
        );
        assert_eq!(
            socket_emit(&socket, "get_files_details", &json!({ "files": [] }))
                .expect_err("emit should fail"),
            expected
        );
    }
}
