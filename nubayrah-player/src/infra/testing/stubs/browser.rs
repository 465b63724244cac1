use std::io;
use std::sync::{Arc, RwLock};

use crate::infra::services::browser::{BrowsingContextOpener, OpenRequest};

/// Opener that remembers every request instead of launching anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    requests: Arc<RwLock<Vec<OpenRequest>>>,
    fail: Arc<RwLock<bool>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent opens fail after recording the request.
    pub fn set_failing(&self, fail: bool) {
        if let Ok(mut guard) = self.fail.write() {
            *guard = fail;
        }
    }

    pub fn requests(&self) -> Vec<OpenRequest> {
        self.requests.read().expect("lock poisoned").clone()
    }
}

impl BrowsingContextOpener for RecordingOpener {
    fn open(&self, request: &OpenRequest) -> io::Result<()> {
        self.requests
            .write()
            .expect("lock poisoned")
            .push(request.clone());

        if *self.fail.read().expect("lock poisoned") {
            Err(io::Error::other("no browser available"))
        } else {
            Ok(())
        }
    }
}
