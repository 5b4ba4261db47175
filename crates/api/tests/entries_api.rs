//! Integration tests for the `/api/v1/entries` JSON endpoints.

mod common;

use axum::http::StatusCode;
use blog_db::repositories::{CommentRepo, EntryRepo};
use common::{body_json, create_entry, create_user, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_entry_returns_201_with_slug_and_url(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/entries",
        json!({ "title": "My entry title", "body": "body", "author_id": author.id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["title"], "My entry title");
    assert_eq!(data["slug"], "my-entry-title");
    assert_eq!(data["author_id"], author.id);

    let url = data["url"].as_str().unwrap();
    let id = data["id"].as_i64().unwrap();
    assert!(url.ends_with(&format!("/{id}-my-entry-title/")), "url {url}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_entry_rejects_blank_title(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/entries",
        json!({ "title": "  ", "body": "body", "author_id": author.id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Title must not be empty");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_entry_rejects_overlong_title(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/entries",
        json!({ "title": "a".repeat(501), "body": "body", "author_id": author.id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_entry_for_unknown_author_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/entries",
        json!({ "title": "Orphan", "body": "body", "author_id": 999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "User with id 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_entry_by_id(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;
    let entry = create_entry(&pool, &author, "My entry title", "body").await;

    let app = common::build_test_app(pool);
    let response = get(app.clone(), &format!("/api/v1/entries/{}", entry.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], entry.id);
    assert_eq!(json["data"]["url"], entry.absolute_url());

    let missing = get(app, "/api/v1/entries/999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_entries_defaults_to_five_newest(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;
    for n in 1..=6 {
        create_entry(&pool, &author, &format!("entry {n}"), "body").await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app.clone(), "/api/v1/entries").await).await;
    let titles: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        vec!["entry 6", "entry 5", "entry 4", "entry 3", "entry 2"]
    );

    let json = body_json(get(app, "/api/v1/entries?limit=2").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_entries_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/entries").await).await;
    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_entry_recomputes_slug(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;
    let entry = create_entry(&pool, &author, "Old title", "body").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/entries/{}", entry.id),
        json!({ "title": "Brand New Title" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "brand-new-title");
    assert_eq!(json["data"]["body"], "body");

    let saved = EntryRepo::find_by_id(&pool, entry.id).await.unwrap().unwrap();
    assert_eq!(saved.slug, "brand-new-title");
    assert!(saved.modified_at >= entry.modified_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_entry_validates_and_404s(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;
    let entry = create_entry(&pool, &author, "Title", "body").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app.clone(),
        &format!("/api/v1/entries/{}", entry.id),
        json!({ "body": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(app, "/api/v1/entries/999", json!({ "title": "x" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_entry_removes_comments(pool: PgPool) {
    let author = create_user(&pool, "some_user").await;
    let entry = create_entry(&pool, &author, "Title", "body").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app.clone(),
        &format!("/api/v1/entries/{}/comments", entry.id),
        json!({ "email": "fred@example.com", "body": "Hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete(app.clone(), &format!("/api/v1/entries/{}", entry.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(EntryRepo::find_by_id(&pool, entry.id).await.unwrap().is_none());
    assert_eq!(CommentRepo::count_for_entry(&pool, entry.id).await.unwrap(), 0);

    let response = delete(app, &format!("/api/v1/entries/{}", entry.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
