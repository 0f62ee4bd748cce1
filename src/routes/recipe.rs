//! Recipe CRUD and AI suggestion routes.

use crate::handlers::{create, delete as delete_handler, list, read, suggest, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn recipe_routes(state: AppState) -> Router {
    Router::new()
        .route("/recipes", get(list).post(create))
        .route("/recipes/:id", get(read).put(update).delete(delete_handler))
        .route("/ai/suggest", post(suggest))
        .with_state(state)
}
