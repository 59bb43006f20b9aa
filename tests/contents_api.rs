//! HTTP-level integration tests for content CRUD, history and rollback.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, create_content, delete, get, post, post_json, put_json,
    test_pool,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: POST /api/contents creates content with views = 0 and version 1
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_tags() {
    let app = build_test_app(test_pool().await);

    let response = post_json(
        app.clone(),
        "/api/contents",
        json!({ "title": "Test Content", "body": "Test Body", "tags": ["tag1", "tag2"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Test Content");
    assert_eq!(json["body"], "Test Body");
    assert_eq!(json["views"], 0);
    assert_eq!(json["tags"], json!(["tag1", "tag2"]));

    let id = json["id"].as_i64().unwrap();
    let history = body_json(get(app, &format!("/api/contents/{id}/history")).await).await;
    let arr = history.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["version"], 1);
    assert_eq!(arr[0]["contentId"], id);
    assert_eq!(arr[0]["title"], "Test Content");
    assert!(arr[0]["updatedAt"].is_string());
}

#[tokio::test]
async fn create_with_blank_title_is_400() {
    let app = build_test_app(test_pool().await);
    let response = post_json(app, "/api/contents", json!({ "title": "  ", "body": "B" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let app = build_test_app(test_pool().await);
    let response = post_json(app, "/api/contents", json!({ "body": "B" })).await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Test: GET /api/contents lists everything with tags
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_all_contents() {
    let app = build_test_app(test_pool().await);
    create_content(
        app.clone(),
        json!({ "title": "Test Content", "body": "Test Body", "tags": ["test1", "test2"] }),
    )
    .await;

    let response = get(app, "/api/contents").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["title"], "Test Content");
    assert_eq!(arr[0]["views"], 0);
    assert_eq!(arr[0]["tags"], json!(["test1", "test2"]));
}

// ---------------------------------------------------------------------------
// Test: GET /api/contents/{id} increments views
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_increments_views() {
    let app = build_test_app(test_pool().await);
    let id = create_content(app.clone(), json!({ "title": "T", "body": "B" })).await;

    for expected in 1..=3 {
        let response = get(app.clone(), &format!("/api/contents/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["views"], expected);
    }
}

#[tokio::test]
async fn get_missing_is_404_with_empty_body() {
    let app = build_test_app(test_pool().await);
    let response = get(app, "/api/contents/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = build_test_app(test_pool().await);
    let response = get(app, "/api/contents/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: PUT /api/contents/{id} appends history
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_appends_history_entries() {
    let app = build_test_app(test_pool().await);
    let id = create_content(app.clone(), json!({ "title": "Test Content", "body": "Test Body" })).await;

    for i in 1..=3 {
        let response = put_json(
            app.clone(),
            &format!("/api/contents/{id}"),
            json!({ "title": format!("Updated {i}"), "body": format!("Body {i}") }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let history = body_json(get(app.clone(), &format!("/api/contents/{id}/history")).await).await;
    let versions: Vec<i64> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["version"].as_i64().unwrap())
        .collect();
    assert_eq!(versions, vec![4, 3, 2, 1]);
    assert_eq!(history[0]["title"], "Updated 3");
    assert_eq!(history[3]["title"], "Test Content");
}

#[tokio::test]
async fn update_tags_absent_keeps_empty_clears() {
    let app = build_test_app(test_pool().await);
    let id = create_content(app.clone(), json!({ "title": "T", "body": "B", "tags": ["a"] })).await;
    let uri = format!("/api/contents/{id}");

    let kept = body_json(put_json(app.clone(), &uri, json!({ "title": "T2" })).await).await;
    assert_eq!(kept["tags"], json!(["a"]));

    let replaced = body_json(put_json(app.clone(), &uri, json!({ "tags": ["b", "c"] })).await).await;
    assert_eq!(replaced["tags"], json!(["b", "c"]));

    let cleared = body_json(put_json(app.clone(), &uri, json!({ "tags": [] })).await).await;
    assert_eq!(cleared["tags"], json!([]));

    let tags = body_json(get(app, "/api/tags").await).await;
    assert_eq!(tags.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_missing_is_404() {
    let app = build_test_app(test_pool().await);
    let response = put_json(app, "/api/contents/9999", json!({ "title": "T" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: DELETE /api/contents/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_history_but_keeps_tags() {
    let app = build_test_app(test_pool().await);
    let id = create_content(
        app.clone(),
        json!({ "title": "T", "body": "B", "tags": ["test1", "test2"] }),
    )
    .await;

    let response = delete(app.clone(), &format!("/api/contents/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let history = get(app.clone(), &format!("/api/contents/{id}/history")).await;
    assert_eq!(history.status(), StatusCode::NOT_FOUND);

    let again = delete(app.clone(), &format!("/api/contents/{id}")).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let tags = body_json(get(app, "/api/tags").await).await;
    assert_eq!(tags.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: history and rollback 404s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_of_missing_content_is_404() {
    let app = build_test_app(test_pool().await);
    let response = get(app, "/api/contents/9999/history").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rollback_to_unknown_version_is_404() {
    let app = build_test_app(test_pool().await);
    let id = create_content(app.clone(), json!({ "title": "T", "body": "B" })).await;

    let response = post(app, &format!("/api/contents/{id}/rollback/7")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: the create → read → update → rollback scenario end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_read_update_rollback_scenario() {
    let app = build_test_app(test_pool().await);

    let created = post_json(
        app.clone(),
        "/api/contents",
        json!({ "title": "T", "body": "B", "tags": ["x", "y"] }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["views"], 0);
    let id = created["id"].as_i64().unwrap();

    let fetched = body_json(get(app.clone(), &format!("/api/contents/{id}")).await).await;
    assert_eq!(fetched["views"], 1);

    let updated = put_json(app.clone(), &format!("/api/contents/{id}"), json!({ "title": "T2" })).await;
    assert_eq!(updated.status(), StatusCode::OK);
    let history = body_json(get(app.clone(), &format!("/api/contents/{id}/history")).await).await;
    assert_eq!(history.as_array().unwrap().len(), 2);
    assert_eq!(history[0]["version"], 2);
    assert_eq!(history[1]["version"], 1);

    let rolled = post(app.clone(), &format!("/api/contents/{id}/rollback/1")).await;
    assert_eq!(rolled.status(), StatusCode::OK);
    let rolled = body_json(rolled).await;
    assert_eq!(rolled["title"], "T");
    assert_eq!(rolled["body"], "B");
    assert_eq!(rolled["views"], 1);

    let history = body_json(get(app, &format!("/api/contents/{id}/history")).await).await;
    let arr = history.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["version"], 3);
    assert_eq!(arr[0]["title"], "T");
    assert_eq!(arr[0]["body"], "B");
}
