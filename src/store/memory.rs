use std::sync::Mutex;

use crate::errors::ServerError;
use crate::store::StateStore;

/// In-memory fake used by the router tests: same contract as `JsonStore`,
/// no filesystem.
#[derive(Default)]
pub struct MemStore {
    document: Mutex<Option<String>>,
}

impl StateStore for MemStore {
    fn load(&self) -> Result<Option<String>, ServerError> {
        Ok(self
            .document
            .lock()
            .map_err(|_| ServerError::InternalError)?
            .clone())
    }

    fn store(&self, document: &str) -> Result<(), ServerError> {
        *self
            .document
            .lock()
            .map_err(|_| ServerError::InternalError)? = Some(document.to_string());
        Ok(())
    }
}
