//! Request validation for recipe and suggestion payloads.

use crate::error::AppError;
use crate::model::{RecipeInput, SuggestionRequest};
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create or replace body. All five fields are required; extra keys (including `id`) are ignored.
    pub fn recipe_input(body: Value) -> Result<RecipeInput, AppError> {
        let mut body = body_to_map(body)?;
        Ok(RecipeInput {
            name: required_text(&mut body, "name")?,
            ingredients: required_text(&mut body, "ingredients")?,
            instructions: required_text(&mut body, "instructions")?,
            category: required_text(&mut body, "category")?,
            cooking_time: required_minutes(&body, "cooking_time")?,
        })
    }

    /// Validate a suggestion body: `ingredients` must be a non-blank string.
    pub fn suggestion(body: Value) -> Result<SuggestionRequest, AppError> {
        let mut body = body_to_map(body)?;
        let ingredients = required_text(&mut body, "ingredients")?;
        Ok(SuggestionRequest { ingredients })
    }
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn required_text(body: &mut Map<String, Value>, field: &str) -> Result<String, AppError> {
    match body.remove(field) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", field))),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(AppError::Validation(format!("{} must not be empty", field)))
        }
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}

fn required_minutes(body: &Map<String, Value>, field: &str) -> Result<i32, AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", field))),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| AppError::Validation(format!("{} must be an integer number of minutes", field))),
        Some(_) => Err(AppError::Validation(format!("{} must be an integer number of minutes", field))),
    }
}
