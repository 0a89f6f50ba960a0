// src/app.rs

use std::sync::Mutex;

use crate::domain::Ledger;
use crate::errors::ServerError;
use crate::store::StateStore;

/// The one service object behind every request: owns the in-memory ledger
/// and the store it is persisted to. All state access goes through the two
/// closure helpers.
pub struct App {
    ledger: Mutex<Ledger>,
    store: Box<dyn StateStore + Send + Sync>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").finish_non_exhaustive()
    }
}

impl App {
    /// Load the persisted document once at startup. An absent document means
    /// a fresh, empty ledger; a malformed one is a startup failure.
    pub fn load(store: impl StateStore + Send + Sync + 'static) -> Result<Self, ServerError> {
        let ledger = match store.load()? {
            Some(document) => Ledger::from_document(&document)?,
            None => Ledger::default(),
        };
        Ok(Self {
            ledger: Mutex::new(ledger),
            store: Box::new(store),
        })
    }

    /// Run `f` with read access to the current ledger state.
    pub fn with_ledger<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Ledger) -> T,
    {
        let guard = self.ledger.lock().map_err(|_| ServerError::InternalError)?;
        Ok(f(&guard))
    }

    /// Run a mutation and, if it succeeds, persist the whole document before
    /// releasing the lock. A failed mutation writes nothing; the mutex makes
    /// update-then-persist a single step with respect to other requests.
    pub fn with_ledger_mut<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Ledger) -> Result<T, ServerError>,
    {
        let mut guard = self.ledger.lock().map_err(|_| ServerError::InternalError)?;
        let out = f(&mut guard)?;
        let document = guard.to_document()?;
        self.store.store(&document)?;
        Ok(out)
    }
}
