//! HTTP-level tests for contact inquiries and customer reviews.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get, get_auth, post_json, put_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_without_email_or_phone_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "name": "Ann", "email": "", "message": "Hello" });
    let response = post_json(app, "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_with_bad_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Ann", "email": "ann-at-example" });
    let response = post_json(app, "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_roundtrip_for_admin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Ann",
        "phone": "555-0101",
        "bestTime": "evenings",
        "service": "Dog walk",
        "petInfo": "Two beagles",
        "dates": "July 4-6",
    });
    let response = post_json(app.clone(), "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["best_time"], "evenings");
    assert!(json["data"]["email"].is_null());
    let first = json["data"]["id"].as_i64().unwrap();

    let body = serde_json::json!({ "name": "Ben", "email": "ben@example.com" });
    let response = post_json(app.clone(), "/api/contact", body).await;
    let second = body_json(response).await["data"]["id"].as_i64().unwrap();

    let list = body_json(get_auth(app.clone(), "/api/contact", &admin_token()).await).await;
    assert_eq!(list[0]["id"], second);
    assert_eq!(list[1]["id"], first);

    let uri = format!("/api/contact/{first}");
    let response = delete_auth(app.clone(), &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = delete_auth(app, &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

async fn submit_review(app: axum::Router, name: &str, rating: i64) -> i64 {
    let body = serde_json::json!({
        "customerName": name,
        "rating": rating,
        "reviewText": "Wonderful with our dog",
    });
    let response = post_json(app, "/api/reviews", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    json["data"]["id"].as_i64().unwrap()
}

async fn moderate(app: axum::Router, id: i64, status: &str) -> StatusCode {
    put_json_auth(
        app,
        &format!("/api/reviews/{id}/status"),
        serde_json::json!({ "status": status }),
        &admin_token(),
    )
    .await
    .status()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn public_reviews_only_show_approved(pool: PgPool) {
    let app = common::build_test_app(pool);
    let kept = submit_review(app.clone(), "Cara", 5).await;
    let rejected = submit_review(app.clone(), "Dan", 2).await;
    submit_review(app.clone(), "Eve", 4).await;

    assert_eq!(moderate(app.clone(), kept, "approved").await, StatusCode::OK);
    assert_eq!(moderate(app.clone(), rejected, "rejected").await, StatusCode::OK);

    let public = body_json(get(app.clone(), "/api/reviews").await).await;
    let public = public.as_array().unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["id"], kept);

    let all = body_json(get_auth(app, "/api/admin/reviews", &admin_token()).await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submitted_status_is_ignored(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "customerName": "Mallory",
        "rating": 5,
        "reviewText": "Best ever",
        "status": "approved",
    });
    let response = post_json(app.clone(), "/api/reviews", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["status"], "pending");

    let public = body_json(get(app, "/api/reviews").await).await;
    assert_eq!(public, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn review_validation_and_moderation_errors(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "customerName": "Zed", "rating": 6, "reviewText": "Too good" });
    let response = post_json(app.clone(), "/api/reviews", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({ "customerName": "", "rating": 3, "reviewText": "" });
    let response = post_json(app.clone(), "/api/reviews", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let id = submit_review(app.clone(), "Cara", 5).await;
    assert_eq!(moderate(app.clone(), id, "published").await, StatusCode::BAD_REQUEST);
    assert_eq!(moderate(app.clone(), 9999, "approved").await, StatusCode::NOT_FOUND);

    let uri = format!("/api/reviews/{id}");
    let response = delete_auth(app.clone(), &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = delete_auth(app, &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
