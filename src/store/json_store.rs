use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::errors::ServerError;
use crate::store::StateStore;

/// File-backed store: the whole ledger document lives in a single JSON file,
/// rewritten after every mutation.
#[derive(Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStore for JsonStore {
    fn load(&self) -> Result<Option<String>, ServerError> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServerError::StoreError(format!(
                "read {} failed: {e}",
                self.path.display()
            ))),
        }
    }

    fn store(&self, document: &str) -> Result<(), ServerError> {
        fs::write(&self.path, document).map_err(|e| {
            ServerError::StoreError(format!("write {} failed: {e}", self.path.display()))
        })
    }
}
