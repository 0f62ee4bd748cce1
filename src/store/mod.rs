//! Record store: persistence for recipes behind one trait, so handlers never see the engine.

mod memory;
mod postgres;

pub use memory::MemoryRecipeStore;
pub use postgres::{ensure_database_exists, ensure_recipes_table, PgRecipeStore};

use crate::error::AppError;
use crate::model::{Recipe, RecipeInput};
use crate::query::RecipeQuery;
use async_trait::async_trait;

/// CRUD over recipes. Missing ids surface as [`AppError::NotFound`].
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist a new recipe and return it with its assigned id.
    async fn create(&self, input: RecipeInput) -> Result<Recipe, AppError>;

    async fn get(&self, id: i64) -> Result<Recipe, AppError>;

    /// Filter, order and paginate according to `query`.
    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, AppError>;

    /// Replace every field of an existing recipe.
    async fn update(&self, id: i64, input: RecipeInput) -> Result<Recipe, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
