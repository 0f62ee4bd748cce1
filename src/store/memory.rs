//! In-process recipe store with the same semantics as the PostgreSQL store.

use super::RecipeStore;
use crate::error::AppError;
use crate::model::{Recipe, RecipeInput};
use crate::query::RecipeQuery;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Recipe>,
}

/// Recipes held in memory. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryRecipeStore {
    table: RwLock<Table>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn create(&self, input: RecipeInput) -> Result<Recipe, AppError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let recipe = input.into_recipe(table.next_id);
        table.rows.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn get(&self, id: i64) -> Result<Recipe, AppError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::recipe_not_found(id))
    }

    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, AppError> {
        let table = self.table.read().await;
        Ok(query.apply(table.rows.values()))
    }

    async fn update(&self, id: i64, input: RecipeInput) -> Result<Recipe, AppError> {
        let mut table = self.table.write().await;
        let slot = table.rows.get_mut(&id).ok_or_else(|| AppError::recipe_not_found(id))?;
        *slot = input.into_recipe(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::recipe_not_found(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
