//! AI recipe suggestion handler.

use super::recipe::json_body;
use crate::error::AppError;
use crate::model::{SuggestionRequest, SuggestionResponse};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/ai/suggest",
    tag = "ai",
    request_body = SuggestionRequest,
    responses(
        (status = 200, description = "Raw provider text", body = SuggestionResponse),
        (status = 503, description = "Provider call failed")
    )
)]
pub async fn suggest(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let request = RequestValidator::suggestion(json_body(body)?)?;
    let suggestion = state
        .suggestions
        .suggest(&request.ingredients)
        .await
        .ok_or_else(|| AppError::ServiceUnavailable("AI service unavailable".into()))?;
    Ok(Json(SuggestionResponse { suggestion }))
}
