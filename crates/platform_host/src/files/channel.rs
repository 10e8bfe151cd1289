//! Real-time file-handler channel contracts.

use std::{cell::RefCell, rc::Rc};

use super::types::{FileDetails, FileDetailsRequest};

/// Socket.IO namespace of the file-handler service.
pub const FILE_HANDLER_NAMESPACE: &str = "/file_handler";
/// Client event requesting metadata for a list of file ids.
pub const GET_FILES_DETAILS_EVENT: &str = "get_files_details";
/// Server event carrying a metadata batch.
pub const FILES_DETAILS_EVENT: &str = "files_details";

/// Callback receiving every decoded (or undecodable) `files_details` batch.
pub type FileDetailsHandler = Box<dyn Fn(Result<Vec<FileDetails>, String>)>;

/// Host service for the long-lived file-handler channel.
///
/// Implementations keep one connection for the document lifetime. Responses are not correlated
/// with requests: every batch delivered to the subscribed handler replaces the previous one.
pub trait FileDetailsChannel {
    /// Registers the batch handler. Called once per document.
    fn subscribe(&self, handler: FileDetailsHandler) -> Result<(), String>;

    /// Emits a metadata request.
    fn request_details(&self, request: &FileDetailsRequest) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Channel that accepts requests and never answers.
pub struct NoopFileDetailsChannel;

impl FileDetailsChannel for NoopFileDetailsChannel {
    fn subscribe(&self, _handler: FileDetailsHandler) -> Result<(), String> {
        Ok(())
    }

    fn request_details(&self, _request: &FileDetailsRequest) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Clone, Default)]
/// In-memory channel recording requests; batches are pushed with [`MemoryFileDetailsChannel::deliver`].
pub struct MemoryFileDetailsChannel {
    handler: Rc<RefCell<Option<FileDetailsHandler>>>,
    requests: Rc<RefCell<Vec<FileDetailsRequest>>>,
}

impl MemoryFileDetailsChannel {
    /// Requests emitted so far, oldest first.
    pub fn requests(&self) -> Vec<FileDetailsRequest> {
        self.requests.borrow().clone()
    }

    /// Delivers a server batch to the subscribed handler. Returns `false` without a subscriber.
    pub fn deliver(&self, batch: Result<Vec<FileDetails>, String>) -> bool {
        match self.handler.borrow().as_ref() {
            Some(handler) => {
                handler(batch);
                true
            }
            None => false,
        }
    }
}

impl FileDetailsChannel for MemoryFileDetailsChannel {
    fn subscribe(&self, handler: FileDetailsHandler) -> Result<(), String> {
        let mut slot = self.handler.borrow_mut();
        if slot.is_some() {
            return Err("file details handler already registered".to_string());
        }
        *slot = Some(handler);
        Ok(())
    }

    fn request_details(&self, request: &FileDetailsRequest) -> Result<(), String> {
        self.requests.borrow_mut().push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{PinnedFiles, RecordId};

    #[test]
    fn memory_channel_records_requests_and_delivers_to_single_handler() {
        let channel = MemoryFileDetailsChannel::default();
        let channel_obj: &dyn FileDetailsChannel = &channel;
        let seen = Rc::new(Cell::new(0usize));

        assert!(!channel.deliver(Ok(Vec::new())));

        let seen_in_handler = seen.clone();
        channel_obj
            .subscribe(Box::new(move |batch| {
                seen_in_handler.set(batch.expect("batch").len());
            }))
            .expect("subscribe");
        assert!(channel_obj.subscribe(Box::new(|_| {})).is_err());

        let pinned = PinnedFiles::new(vec![RecordId::Number(4)]);
        channel_obj
            .request_details(&pinned.details_request())
            .expect("request");
        assert_eq!(channel.requests(), vec![pinned.details_request()]);

        assert!(channel.deliver(Ok(Vec::new())));
        assert_eq!(seen.get(), 0);
    }
}
