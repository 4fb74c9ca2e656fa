mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app};
use gradebook::modules::users::model::UserRole;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_fetch_result(pool: PgPool) {
    let student = create_test_user(&pool, &generate_unique_email(), "secret123", UserRole::Student)
        .await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/results")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "user_id": student.id,
                "mathematics": "A",
                "english": "B",
                "session": "2024/2025",
                "year": "2025"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Result created successfully");

    // Visible in the listing, then retrievable by its own id.
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("GET")
        .uri("/api/results")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["mathematics"], "A");
    assert_eq!(results[0]["user_id"], student.id.to_string());

    let result_id = results[0]["id"].as_str().unwrap();
    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/results/{}", result_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["english"], "B");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_result_orphan_owner_accepted(pool: PgPool) {
    // The store enforces no referential integrity on user_id: a result
    // for a non-existent owner is accepted and retrievable.
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/results")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "user_id": Uuid::new_v4(),
                "mathematics": "C"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri("/api/results")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_result_empty_payload_accepted(pool: PgPool) {
    // No field is required; the permissive surface is preserved as-is.
    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("POST")
        .uri("/api/results")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_result_by_unknown_id_is_empty_array(pool: PgPool) {
    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/results/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body.as_array().unwrap().is_empty());
}
