//! Shared application state for all routes. Dependencies are built once at startup and injected here.

use crate::store::RecipeStore;
use crate::suggest::SuggestionGateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub suggestions: Arc<SuggestionGateway>,
}

impl AppState {
    pub fn new(store: impl RecipeStore + 'static, suggestions: SuggestionGateway) -> Self {
        AppState {
            store: Arc::new(store),
            suggestions: Arc::new(suggestions),
        }
    }
}
