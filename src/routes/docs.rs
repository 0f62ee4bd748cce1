//! OpenAPI document and an interactive Swagger UI page. Mounted only outside production.

use crate::handlers;
use crate::model::{Recipe, RecipeInput, SuggestionRequest, SuggestionResponse};
use crate::routes::common;
use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Smart Recipe Explorer"),
    paths(
        handlers::recipe::list,
        handlers::recipe::create,
        handlers::recipe::read,
        handlers::recipe::update,
        handlers::recipe::delete,
        handlers::suggest::suggest,
        common::health
    ),
    components(schemas(Recipe, RecipeInput, SuggestionRequest, SuggestionResponse)),
    tags(
        (name = "recipes", description = "Recipe records"),
        (name = "ai", description = "LLM recipe suggestions"),
        (name = "ops", description = "Liveness")
    )
)]
pub struct ApiDoc;

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>Smart Recipe Explorer API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5.10.3/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.10.3/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                tryItOutEnabled: true
            });
        };
    </script>
</body>
</html>
"#;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn docs_page() -> Html<&'static str> {
    Html(DOCS_HTML)
}

/// GET /docs, GET /openapi.json.
pub fn docs_routes() -> Router {
    Router::new()
        .route("/docs", get(docs_page))
        .route("/openapi.json", get(openapi_json))
}
