//! Shared state handed to every handler.

use scribe_interface::{BlogWriter, GenerationStore};
use std::sync::Arc;

/// Collaborators the router delegates to.
#[derive(Clone)]
pub struct AppState {
    writer: Arc<dyn BlogWriter>,
    store: Arc<dyn GenerationStore>,
}

impl AppState {
    /// Creates new state from an inference backend and a store.
    pub fn new(writer: Arc<dyn BlogWriter>, store: Arc<dyn GenerationStore>) -> Self {
        Self { writer, store }
    }

    /// The inference backend.
    pub fn writer(&self) -> &dyn BlogWriter {
        self.writer.as_ref()
    }

    /// The generation store.
    pub fn store(&self) -> &dyn GenerationStore {
        self.store.as_ref()
    }
}
