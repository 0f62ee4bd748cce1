//! Recipe CRUD handlers: create, read, update, delete, list.

use crate::error::AppError;
use crate::model::{Recipe, RecipeInput};
use crate::query::RecipeQuery;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// Unwrap a JSON body. Oversized and non-JSON content types keep their 413/415 status; the rest is 400.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v).map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(e.body_text()),
        _ => AppError::BadRequest(e.body_text()),
    })
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    params(
        ("skip" = Option<u64>, Query, description = "Matching recipes to skip, default 0"),
        ("limit" = Option<u32>, Query, description = "Maximum recipes to return, default 10, at most 1000"),
        ("search" = Option<String>, Query, description = "Substring of name or ingredients, case-insensitive"),
        ("name" = Option<String>, Query, description = "Substring of name, case-insensitive"),
        ("ingredient" = Option<String>, Query, description = "Substring of ingredients, case-insensitive"),
        ("category" = Option<String>, Query, description = "Substring of category, case-insensitive"),
        ("max_time" = Option<i64>, Query, description = "Keep recipes with cooking_time <= max_time"),
        ("sort_by" = Option<String>, Query, description = "`name` or `time`; anything else keeps id order")
    ),
    responses((status = 200, description = "Matching recipes", body = [Recipe]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let query = RecipeQuery::from_params(&params);
    let rows = state.store.list(&query).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Created", body = Recipe),
        (status = 422, description = "Missing or invalid field")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::recipe_input(json_body(body)?)?;
    let row = state.store.create(input).await?;
    tracing::info!(id = row.id, "recipe created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 404, description = "No recipe with that id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let id = parse_id(&id_str)?;
    Ok(Json(state.store.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    request_body = RecipeInput,
    responses(
        (status = 200, description = "Replaced", body = Recipe),
        (status = 404, description = "No recipe with that id"),
        (status = 422, description = "Missing or invalid field")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Recipe>, AppError> {
    let id = parse_id(&id_str)?;
    let input = RequestValidator::recipe_input(json_body(body)?)?;
    Ok(Json(state.store.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No recipe with that id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete(id).await?;
    tracing::info!(id, "recipe deleted");
    Ok(StatusCode::NO_CONTENT)
}
