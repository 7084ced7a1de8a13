//! Integration tests for `/api/v1/imports/{id}/rows`.

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, put_json};
use importer_api::store::{ImportRowStore, NewImportRow};
use importer_core::types::ImportId;
use serde_json::json;

/// Seed an import with `count` rows; every third row (0, 3, 6, ...) carries an error.
async fn seeded_store(count: usize) -> (Arc<ImportRowStore>, ImportId) {
    let store = Arc::new(ImportRowStore::new());
    let id = ImportId::new_v4();
    let rows = (0..count)
        .map(|i| NewImportRow {
            values: BTreeMap::from([("email".to_string(), format!("user{i}@example.com"))]),
            errors: if i % 3 == 0 {
                vec!["email is already registered".to_string()]
            } else {
                Vec::new()
            },
        })
        .collect();
    store.replace(id, rows).await;
    (store, id)
}

fn indices(json: &serde_json::Value) -> Vec<i64> {
    json["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["index"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[tokio::test]
async fn defaults_to_first_hundred_rows() {
    let (store, id) = seeded_store(150).await;
    let app = common::build_test_app(store);

    let response = get(app, &format!("/api/v1/imports/{id}/rows")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let pagination = &json["data"]["pagination"];
    assert_eq!(pagination["offset"], 0);
    assert_eq!(pagination["limit"], 100);
    assert_eq!(pagination["total"], 150);
    assert_eq!(pagination["next_offset"], 100);
    assert_eq!(json["data"]["filter"], "all");
    assert_eq!(indices(&json).len(), 100);
}

#[tokio::test]
async fn explicit_offset_and_limit_select_window() {
    let (store, id) = seeded_store(10).await;
    let app = common::build_test_app(store);

    let response = get(app, &format!("/api/v1/imports/{id}/rows?offset=8&limit=5")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(indices(&json), vec![8, 9]);
    assert_eq!(json["data"]["pagination"]["next_offset"], 10);
}

#[tokio::test]
async fn limit_without_offset_returns_400() {
    let (store, id) = seeded_store(3).await;
    let app = common::build_test_app(store);

    let response = get(app, &format!("/api/v1/imports/{id}/rows?limit=10")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "The parameter 'offset' is required when providing a limit"
    );
}

#[tokio::test]
async fn non_numeric_offset_returns_400() {
    let (store, id) = seeded_store(3).await;
    let app = common::build_test_app(store);

    let response = get(app, &format!("/api/v1/imports/{id}/rows?offset=abc&limit=10")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid offset parameter");
}

#[tokio::test]
async fn limit_above_maximum_returns_400() {
    let (store, id) = seeded_store(3).await;
    let app = common::build_test_app(store);

    let response = get(app, &format!("/api/v1/imports/{id}/rows?offset=0&limit=1001")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Limit cannot be greater than 1000");
}

#[tokio::test]
async fn repeated_pagination_keys_use_first_value() {
    let (store, id) = seeded_store(10).await;
    let app = common::build_test_app(store);

    let response = get(
        app,
        &format!("/api/v1/imports/{id}/rows?offset=0&limit=5&limit=2000"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["pagination"]["limit"], 5);
    assert_eq!(indices(&json), vec![0, 1, 2, 3, 4]);
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

#[tokio::test]
async fn filter_error_returns_only_failing_rows() {
    let (store, id) = seeded_store(10).await;
    let app = common::build_test_app(store);

    let response = get(app, &format!("/api/v1/imports/{id}/rows?filter=ERROR")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(indices(&json), vec![0, 3, 6, 9]);
    assert_eq!(json["data"]["filter"], "error");
    assert_eq!(json["data"]["pagination"]["total"], 4);
}

#[tokio::test]
async fn filter_valid_combines_with_pagination() {
    let (store, id) = seeded_store(10).await;
    let app = common::build_test_app(store);

    let response = get(
        app,
        &format!("/api/v1/imports/{id}/rows?filter=valid&offset=2&limit=2"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(indices(&json), vec![4, 5]);
    assert_eq!(json["data"]["pagination"]["total"], 6);
    assert_eq!(json["data"]["pagination"]["next_offset"], 4);
}

#[tokio::test]
async fn repeated_filter_key_uses_first_value() {
    let (store, id) = seeded_store(10).await;
    let app = common::build_test_app(store);

    let response = get(
        app,
        &format!("/api/v1/imports/{id}/rows?filter=valid&filter=bogus"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["filter"], "valid");
    assert_eq!(indices(&json), vec![1, 2, 4, 5, 7, 8]);
}

#[tokio::test]
async fn unknown_filter_returns_400() {
    let (store, id) = seeded_store(3).await;
    let app = common::build_test_app(store);

    let response = get(app, &format!("/api/v1/imports/{id}/rows?filter=bogus")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "The parameter 'filter' is invalid");
}

// ---------------------------------------------------------------------------
// Import lookup and replacement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_import_returns_404() {
    let app = common::build_test_app(Arc::new(ImportRowStore::new()));
    let id = ImportId::new_v4();

    let response = get(app, &format!("/api/v1/imports/{id}/rows")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn replace_then_list_round_trip() {
    let store = Arc::new(ImportRowStore::new());
    let id = ImportId::new_v4();

    let response = put_json(
        common::build_test_app(Arc::clone(&store)),
        &format!("/api/v1/imports/{id}/rows"),
        json!([
            { "values": { "email": "a@example.com" } },
            { "values": { "email": "" }, "errors": ["email is required"] }
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["row_count"], 2);
    assert_eq!(json["data"]["import_id"], id.to_string());

    let response = get(
        common::build_test_app(store),
        &format!("/api/v1/imports/{id}/rows?filter=error"),
    )
    .await;
    let json = body_json(response).await;
    let rows = json["data"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["index"], 1);
    assert_eq!(rows[0]["errors"][0], "email is required");
}
