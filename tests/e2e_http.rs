// tests/e2e_http.rs
mod support;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::json;
use tower::util::ServiceExt;

use newsroom_core::domain::user::Role;
use support::{RegisterBody, assert_error_response, login_body, test_app, token_for};

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_lists_api_paths() {
    let app = test_app();
    let (status, body) = app.send(Method::GET, "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().expect("paths object");
    for path in [
        "/api/v1/auth/login",
        "/api/v1/reader/dashboard",
        "/api/v1/journalist/articles",
        "/api/v1/editor/approve/{article_id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn first_registered_account_is_editor() {
    let app = test_app();
    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(RegisterBody::new("founder").role("reader").build()),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "editor");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(RegisterBody::new("second").build()),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "reader");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn journalist_keeps_bio_reader_does_not() {
    let app = test_app();
    app.add_user("founder", Role::Editor).await;

    let (_, journalist) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(
                RegisterBody::new("grace")
                    .role("journalist")
                    .bio("covers hardware")
                    .build(),
            ),
        )
        .await;
    assert_eq!(journalist["role"], "journalist");
    assert_eq!(journalist["bio"], "covers hardware");

    let (_, reader) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(RegisterBody::new("ada").bio("likes news").build()),
        )
        .await;
    assert_eq!(reader["role"], "reader");
    assert!(reader.get("bio").is_none());
}

#[tokio::test]
async fn login_returns_token_and_dashboard() {
    let app = test_app();
    app.add_user("ada", Role::Reader).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(login_body("ada", "password123")),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dashboard"], "/api/v1/reader/dashboard");
    assert_eq!(body["user"]["username"], "ada");
    assert!(body["token"]["token"].as_str().unwrap().starts_with("test:"));
    assert!(body["token"]["session_id"].is_string());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = test_app();
    app.add_user("ada", Role::Reader).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(login_body("ada", "wrong-password")),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_response(&body, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(login_body("nobody", "password123")),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn inactive_account_cannot_log_in() {
    let app = test_app();
    app.add_user_with("dormant", Role::Reader, false).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(login_body("dormant", "password123")),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_response(&body, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn me_returns_profile_with_groups() {
    let app = test_app();
    let grace = app.add_user("grace", Role::Journalist).await;

    let (status, body) = app
        .send(Method::GET, "/api/v1/auth/me", Some(&token_for(&grace)), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "grace");
    assert_eq!(body["groups"], json!(["journalist"]));
    assert_eq!(body["dashboard"], "/api/v1/journalist/dashboard");
}

#[tokio::test]
async fn dashboard_redirects_by_role() {
    let app = test_app();
    let editor = app.add_user("eve", Role::Editor).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/dashboard")
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(&editor)))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1/editor/dashboard"
    );
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = test_app();
    app.add_user("ada", Role::Reader).await;

    let (_, login) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(login_body("ada", "password123")),
        )
        .await;
    let token = login["token"]["token"].as_str().unwrap().to_string();

    let (status, _) = app
        .send(Method::GET, "/api/v1/reader/dashboard", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(Method::POST, "/api/v1/auth/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = app
        .send(Method::GET, "/api/v1/auth/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::GET, "/api/v1/reader/dashboard", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
