use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both collaborators sit behind trait objects so tests swap in
/// `MemoryStore` and stub generators.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub llm: Arc<dyn TextGenerator>,
}
