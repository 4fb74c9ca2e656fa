mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app};
use gradebook::modules::users::model::UserRole;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_users_scoped_by_role(pool: PgPool) {
    let student_email = generate_unique_email();
    create_test_user(&pool, &student_email, "secret123", UserRole::Student).await;
    create_test_user(&pool, &generate_unique_email(), "secret123", UserRole::Teacher).await;
    create_test_user(&pool, &generate_unique_email(), "secret123", UserRole::Admin).await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri("/api/users/student")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let raw = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], student_email.as_str());
    assert_eq!(users[0]["role"], "student");

    // The hash must not appear anywhere in the serialized payload.
    let raw_text = String::from_utf8(raw.to_vec()).unwrap();
    assert!(!raw_text.contains("password"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_cross_role_is_not_found(pool: PgPool) {
    let student = create_test_user(&pool, &generate_unique_email(), "secret123", UserRole::Student)
        .await;

    let app = setup_test_app(pool);

    // The student's id exists, but not under the teacher role.
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/users/teacher/{}", student.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/users/student/{}", student.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_without_password_preserves_hash(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, "secret123", UserRole::Student).await;
    let new_email = generate_unique_email();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/student/{}", user.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Renamed",
                "email": new_email
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["email"], new_email.as_str());
    assert_eq!(body["role"], "student");
    assert!(body.get("password").is_none());
    // UpdatedUser is the reduced projection: no username either.
    assert!(body.get("username").is_none());

    // The old password still logs in, proving the hash column was not
    // touched by the partial update.
    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": new_email,
                "password": "secret123"
            }))
            .unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_with_password_rehashes(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, "secret123", UserRole::Teacher).await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/teacher/{}", user.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Renamed",
                "email": email,
                "password": "newsecret456"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // New password works, old one no longer does.
    for (password, expected) in [
        ("newsecret456", StatusCode::OK),
        ("secret123", StatusCode::BAD_REQUEST),
    ] {
        let app = setup_test_app(pool.clone());
        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({
                    "email": email,
                    "password": password
                }))
                .unwrap(),
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), expected);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_requires_name_and_email(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "secret123", UserRole::Student)
        .await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/student/{}", user.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "OnlyName" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "email is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_cross_role_is_not_found(pool: PgPool) {
    let student = create_test_user(&pool, &generate_unique_email(), "secret123", UserRole::Student)
        .await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/admin/{}", student.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Renamed",
                "email": generate_unique_email()
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_scoped_by_role(pool: PgPool) {
    let student = create_test_user(&pool, &generate_unique_email(), "secret123", UserRole::Student)
        .await;

    // Deleting the student's id under the teacher role must not touch it.
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/teacher/{}", student.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The student row is still queryable.
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/users/student/{}", student.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Deletion under the right role removes it.
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/student/{}", student.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/users/student/{}", student.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
