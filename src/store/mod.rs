pub mod json_store;

#[cfg(test)]
pub mod memory;

pub use json_store::JsonStore;

use crate::errors::ServerError;

/// Whole-document persistence: the ledger is written and read as one opaque
/// document.
pub trait StateStore {
    /// Read the persisted document, or `None` if nothing was stored yet.
    fn load(&self) -> Result<Option<String>, ServerError>;

    /// Overwrite the persisted document.
    fn store(&self, document: &str) -> Result<(), ServerError>;
}
