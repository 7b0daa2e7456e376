//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! account store sits behind a trait object so tests can swap the flat-file
//! implementation for an in-memory one.

use std::sync::Arc;

use crate::services::session::SessionRegistry;
use crate::services::store::ProfileStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub sessions: SessionRegistry,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ProfileStore>, sessions: SessionRegistry) -> Self {
        Self { store, sessions }
    }
}
