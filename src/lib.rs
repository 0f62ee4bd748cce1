//! Recipe Explorer: recipe CRUD over PostgreSQL plus LLM recipe suggestions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod query;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod suggest;

pub use config::{AppConfig, DatabaseTarget, Environment};
pub use error::{AppError, ConfigError};
pub use model::{Recipe, RecipeInput, SuggestionRequest, SuggestionResponse};
pub use query::{RecipeQuery, SortKey};
pub use routes::{app, common_routes, docs_routes, recipe_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_recipes_table, MemoryRecipeStore, PgRecipeStore, RecipeStore};
pub use suggest::{CompletionProvider, CompletionRequest, GroqProvider, ProviderError, SuggestionGateway};
