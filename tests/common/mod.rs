//! Helpers to drive the router without binding a socket.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use recipe_explorer::{
    app, AppConfig, AppState, CompletionProvider, CompletionRequest, GroqProvider, MemoryRecipeStore,
    ProviderError, SuggestionGateway,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Provider that answers every prompt with a fixed reply.
pub struct CannedProvider(pub &'static str);

#[async_trait]
impl CompletionProvider for CannedProvider {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let prompt = &request.messages[1].content;
        Ok(format!("{}\n(for: {})", self.0, prompt.lines().nth(1).unwrap_or_default()))
    }
}

/// Router over a fresh in-memory store with the canned provider.
pub fn test_app() -> Router {
    app_with(SuggestionGateway::new(CannedProvider("Recipe Name: Egg Fried Rice")), &[])
}

/// Router whose provider points at a closed local port.
pub fn app_with_unreachable_provider() -> Router {
    let provider = GroqProvider::new("http://127.0.0.1:9/v1", Some("test-key".into()));
    app_with(SuggestionGateway::new(provider), &[])
}

pub fn app_with(gateway: SuggestionGateway, env: &[(&str, &str)]) -> Router {
    let env: Vec<(String, String)> = env.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    let config = AppConfig::from_lookup(|key| env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
        .expect("test config");
    let state = AppState::new(MemoryRecipeStore::new(), gateway);
    app(state, &config).expect("router")
}

pub fn pasta() -> Value {
    json!({
        "name": "Pasta",
        "ingredients": "pasta, tomato",
        "instructions": "boil then mix",
        "category": "Italian",
        "cooking_time": 20
    })
}

pub fn recipe(name: &str, ingredients: &str, category: &str, cooking_time: i32) -> Value {
    json!({
        "name": name,
        "ingredients": ingredients,
        "instructions": "cook it",
        "category": category,
        "cooking_time": cooking_time
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body").to_vec();
    TestResponse { status, headers, body }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// POST a recipe and return its id.
pub async fn create(app: &Router, body: Value) -> i64 {
    let res = post(app, "/recipes", body).await;
    assert_eq!(res.status, StatusCode::CREATED);
    res.json()["id"].as_i64().expect("id")
}
