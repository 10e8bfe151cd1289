//! Socket.IO-backed file-handler channel.

use std::{cell::RefCell, rc::Rc};

use platform_host::{
    FileDetails, FileDetailsChannel, FileDetailsHandler, FileDetailsRequest, FILES_DETAILS_EVENT,
    FILE_HANDLER_NAMESPACE, GET_FILES_DETAILS_EVENT,
};
use serde_json::Value;

use crate::bridge::{self, SocketHandle};

/// Decodes a raw `files_details` payload into metadata records.
///
/// # Errors
///
/// Returns an error when the payload is not an array of file records.
pub fn decode_files_details(payload: Value) -> Result<Vec<FileDetails>, String> {
    serde_json::from_value(payload).map_err(|e| format!("invalid files_details payload: {e}"))
}

#[derive(Debug, Clone, Default)]
/// Browser channel connected lazily to the `/file_handler` namespace.
///
/// The connection is opened on first use and shared by every clone for the document lifetime.
pub struct WebFileChannel {
    socket: Rc<RefCell<Option<SocketHandle>>>,
}

impl WebFileChannel {
    fn socket(&self) -> Result<SocketHandle, String> {
        if let Some(socket) = self.socket.borrow().as_ref() {
            return Ok(socket.clone());
        }
        let socket = bridge::socket_connect(FILE_HANDLER_NAMESPACE)?;
        *self.socket.borrow_mut() = Some(socket.clone());
        Ok(socket)
    }
}

impl FileDetailsChannel for WebFileChannel {
    fn subscribe(&self, handler: FileDetailsHandler) -> Result<(), String> {
        let socket = self.socket()?;
        bridge::socket_on(
            &socket,
            FILES_DETAILS_EVENT,
            Box::new(move |payload| handler(payload.and_then(decode_files_details))),
        )
    }

    fn request_details(&self, request: &FileDetailsRequest) -> Result<(), String> {
        let socket = self.socket()?;
        bridge::socket_emit(&socket, GET_FILES_DETAILS_EVENT, request)
    }
}

#[cfg(test)]
mod tests {
    use platform_host::RecordId;
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_keeps_server_order() {
        let batch = decode_files_details(json!([
            { "id_Fichier": 2, "id_Dossier": 1, "nom_Fichier": "b", "extension_Fichier": "txt", "is_favorite": false },
            { "id_Fichier": 1, "id_Dossier": 1, "nom_Fichier": "a", "extension_Fichier": "pdf", "is_favorite": true }
        ]))
        .expect("decode");

        assert_eq!(
            batch.iter().map(|file| file.id.clone()).collect::<Vec<_>>(),
            vec![RecordId::Number(2), RecordId::Number(1)]
        );
    }

    #[test]
    fn decode_rejects_non_array_payload() {
        let err = decode_files_details(json!({ "files": [] })).expect_err("object payload");
        assert!(err.starts_with("invalid files_details payload"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_channel_reports_missing_transport() {
        let channel = WebFileChannel::default();
        let channel_obj: &dyn FileDetailsChannel = &channel;
        assert!(channel_obj.subscribe(Box::new(|_| {})).is_err());
        assert!(channel_obj
            .request_details(&FileDetailsRequest { files: Vec::new() })
            .is_err());
    }
}
