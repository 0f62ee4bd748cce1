//! Recipe entity and request/response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored recipe. Every field is populated; `id` is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: String,
    /// Minutes.
    pub cooking_time: i32,
}

/// The complete caller-supplied field set for create and full replace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: String,
    pub cooking_time: i32,
}

impl RecipeInput {
    pub fn into_recipe(self, id: i64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
            category: self.category,
            cooking_time: self.cooking_time,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionRequest {
    pub ingredients: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponse {
    pub suggestion: String,
}
