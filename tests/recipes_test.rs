//! HTTP tests for recipe CRUD, filtering, sorting and pagination.

mod common;

use axum::http::StatusCode;
use common::*;
use recipe_explorer::Recipe;
use serde_json::json;

fn recipes(res: &TestResponse) -> Vec<Recipe> {
    serde_json::from_slice(&res.body).expect("recipe array")
}

async fn seed(app: &axum::Router) {
    create(app, pasta()).await;
    create(app, recipe("Omelette", "egg, butter", "Breakfast", 10)).await;
    create(app, recipe("Fried Rice", "rice, egg, soy", "Asian", 15)).await;
    create(app, recipe("Tomato Soup", "tomato, basil", "Soup", 30)).await;
    create(app, recipe("Beef Stew", "beef, carrot", "Comfort", 120)).await;
}

#[tokio::test]
async fn create_then_get_returns_equal_record() {
    let app = test_app();
    let res = post(&app, "/recipes", pasta()).await;
    assert_eq!(res.status, StatusCode::CREATED);
    let created: Recipe = serde_json::from_slice(&res.body).unwrap();
    assert_eq!(created.name, "Pasta");
    assert_eq!(created.cooking_time, 20);

    let fetched = get(&app, &format!("/recipes/{}", created.id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    let fetched: Recipe = serde_json::from_slice(&fetched.body).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_missing_field() {
    let app = test_app();
    let mut body = pasta();
    body.as_object_mut().unwrap().remove("instructions");
    let res = post(&app, "/recipes", body).await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    let err = res.json();
    assert_eq!(err["error"]["code"], "validation_error");
    assert!(err["error"]["message"].as_str().unwrap().contains("instructions is required"));

    let list = get(&app, "/recipes").await;
    assert!(recipes(&list).is_empty(), "nothing persisted");
}

#[tokio::test]
async fn create_rejects_non_integer_cooking_time_and_empty_name() {
    let app = test_app();
    let mut body = pasta();
    body["cooking_time"] = json!("twenty");
    assert_eq!(post(&app, "/recipes", body).await.status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut body = pasta();
    body["name"] = json!("");
    assert_eq!(post(&app, "/recipes", body).await.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = test_app();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/recipes")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let res = tower::ServiceExt::oneshot(app, req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported_media_type() {
    let app = test_app();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/recipes")
        .body(axum::body::Body::from(pasta().to_string()))
        .unwrap();
    let res = tower::ServiceExt::oneshot(app, req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = test_app();
    let mut body = pasta();
    body["instructions"] = json!("x".repeat(recipe_explorer::routes::BODY_LIMIT_BYTES + 1));
    let res = post(&app, "/recipes", body).await;
    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(res.json()["error"]["code"], "payload_too_large");
    assert!(recipes(&get(&app, "/recipes").await).is_empty());
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = test_app();
    let res = get(&app, "/recipes/9999").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["error"]["code"], "not_found");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = test_app();
    assert_eq!(get(&app, "/recipes/pasta").await.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let app = test_app();
    let id = create(&app, pasta()).await;
    let replacement = recipe("Risotto", "rice, stock", "Rice", 35);
    let res = put(&app, &format!("/recipes/{}", id), replacement).await;
    assert_eq!(res.status, StatusCode::OK);

    let stored: Recipe = serde_json::from_slice(&get(&app, &format!("/recipes/{}", id)).await.body).unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.name, "Risotto");
    assert_eq!(stored.ingredients, "rice, stock");
    assert_eq!(stored.instructions, "cook it");
    assert_eq!(stored.category, "Rice");
    assert_eq!(stored.cooking_time, 35);
}

#[tokio::test]
async fn update_requires_the_full_field_set() {
    let app = test_app();
    let id = create(&app, pasta()).await;
    let res = put(&app, &format!("/recipes/{}", id), json!({"name": "Only a name"})).await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);

    let stored: Recipe = serde_json::from_slice(&get(&app, &format!("/recipes/{}", id)).await.body).unwrap();
    assert_eq!(stored.name, "Pasta");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = test_app();
    assert_eq!(put(&app, "/recipes/9999", pasta()).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = test_app();
    let id = create(&app, pasta()).await;
    let res = delete(&app, &format!("/recipes/{}", id)).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_empty());

    assert_eq!(get(&app, &format!("/recipes/{}", id)).await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, &format!("/recipes/{}", id)).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_is_not_found() {
    let app = test_app();
    assert_eq!(delete(&app, "/recipes/9999").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn max_time_filter_and_time_sort() {
    let app = test_app();
    create(&app, pasta()).await;

    let included = recipes(&get(&app, "/recipes?max_time=25&sort_by=time").await);
    assert!(included.iter().any(|r| r.name == "Pasta"));

    let excluded = recipes(&get(&app, "/recipes?max_time=10").await);
    assert!(excluded.iter().all(|r| r.name != "Pasta"));
}

#[tokio::test]
async fn every_result_satisfies_every_filter() {
    let app = test_app();
    seed(&app).await;

    let hits = recipes(&get(&app, "/recipes?ingredient=EGG&max_time=12").await);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Omelette");

    let hits = recipes(&get(&app, "/recipes?search=tomato&category=soup").await);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Tomato Soup");

    let hits = recipes(&get(&app, "/recipes?search=egg").await);
    for r in &hits {
        let term = "egg";
        assert!(r.name.to_lowercase().contains(term) || r.ingredients.to_lowercase().contains(term));
    }
    assert_eq!(hits.len(), 2);

    let hits = recipes(&get(&app, "/recipes?name=rice").await);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Fried Rice");
}

#[tokio::test]
async fn search_and_name_together_must_both_hold() {
    let app = test_app();
    seed(&app).await;

    let hits = recipes(&get(&app, "/recipes?search=egg&name=rice").await);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Fried Rice");

    assert!(recipes(&get(&app, "/recipes?search=egg&name=stew").await).is_empty());
}

#[tokio::test]
async fn like_metacharacters_match_literally() {
    let app = test_app();
    seed(&app).await;
    create(&app, recipe("100% Rye", "rye, water", "Bread", 240)).await;
    create(&app, recipe("Salt_Crust Fish", "fish, salt", "Seafood", 45)).await;

    let hits = recipes(&get(&app, "/recipes?search=%25").await);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "100% Rye");

    let hits = recipes(&get(&app, "/recipes?name=_").await);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Salt_Crust Fish");
}

#[tokio::test]
async fn out_of_range_integers_still_filter_and_skip() {
    let app = test_app();
    seed(&app).await;
    assert!(recipes(&get(&app, "/recipes?max_time=-99999999999").await).is_empty());
    assert!(recipes(&get(&app, "/recipes?skip=5000000000").await).is_empty());
    assert_eq!(recipes(&get(&app, "/recipes?max_time=99999999999").await).len(), 5);
}

#[tokio::test]
async fn unknown_params_and_sort_keys_impose_nothing() {
    let app = test_app();
    seed(&app).await;
    let all = recipes(&get(&app, "/recipes").await);
    let with_noise = recipes(&get(&app, "/recipes?colour=red&sort_by=rating&max_time=soon").await);
    assert_eq!(all, with_noise);
    assert_eq!(all.len(), 5);
}

#[tokio::test]
async fn sort_by_name_and_time_are_non_decreasing() {
    let app = test_app();
    seed(&app).await;

    let by_name = recipes(&get(&app, "/recipes?sort_by=name").await);
    assert_eq!(by_name.len(), 5);
    assert!(by_name.windows(2).all(|w| w[0].name <= w[1].name));

    let by_time = recipes(&get(&app, "/recipes?sort_by=time").await);
    assert!(by_time.windows(2).all(|w| w[0].cooking_time <= w[1].cooking_time));
}

#[tokio::test]
async fn skip_and_limit_window_the_ordered_result() {
    let app = test_app();
    seed(&app).await;

    let ordered = recipes(&get(&app, "/recipes?sort_by=time").await);
    let page = recipes(&get(&app, "/recipes?sort_by=time&skip=1&limit=2").await);
    assert_eq!(page, ordered[1..3].to_vec());

    let tail = recipes(&get(&app, "/recipes?skip=4&limit=10").await);
    assert_eq!(tail.len(), 1);
    assert!(recipes(&get(&app, "/recipes?skip=50").await).is_empty());
}

#[tokio::test]
async fn default_limit_is_ten() {
    let app = test_app();
    for i in 0..12 {
        create(&app, recipe(&format!("Dish {:02}", i), "salt", "Misc", i)).await;
    }
    assert_eq!(recipes(&get(&app, "/recipes").await).len(), 10);
    assert_eq!(recipes(&get(&app, "/recipes?limit=20").await).len(), 12);
}

#[tokio::test]
async fn routes_are_also_served_under_api_v1() {
    let app = test_app();
    let res = post(&app, "/api/v1/recipes", pasta()).await;
    assert_eq!(res.status, StatusCode::CREATED);
    let id = res.json()["id"].as_i64().unwrap();
    assert_eq!(get(&app, &format!("/recipes/{}", id)).await.status, StatusCode::OK);
    assert_eq!(recipes(&get(&app, "/api/v1/recipes").await).len(), 1);
}
