//! Application state for the Shift Recording Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::ShiftStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded rate schedule and the shift store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate schedule configuration.
    config: Arc<ConfigLoader>,
    /// The shift entry store.
    store: Arc<ShiftStore>,
}

impl AppState {
    /// Creates a new application state from its shared resources.
    pub fn new(config: ConfigLoader, store: ShiftStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the shift store.
    pub fn store(&self) -> &ShiftStore {
        &self.store
    }
}
