// tests/e2e_rbac.rs
mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;

use newsroom_core::domain::user::Role;
use support::{RegisterBody, article_body, assert_error_response, ids, test_app, token_for};

#[tokio::test]
async fn only_editors_can_approve() {
    let app = test_app();
    let grace = app.add_user("grace", Role::Journalist).await;
    let ada = app.add_user("ada", Role::Reader).await;
    let tech = app.add_publisher("Tech News").await;
    let article = app.add_article("Draft", tech, Some(grace.id), false, 1).await;
    let uri = format!("/api/v1/editor/approve/{}", i64::from(article));

    for user in [&grace, &ada] {
        let (status, body) = app
            .send(Method::POST, &uri, Some(&token_for(user)), None)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_error_response(&body, StatusCode::FORBIDDEN);
    }

    assert!(!app.store.article(article).unwrap().is_approved);
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn editor_approval_publishes_the_article() {
    let app = test_app();
    let eve = app.add_user("eve", Role::Editor).await;
    let grace = app.add_user("grace", Role::Journalist).await;
    let tech = app.add_publisher("Tech News").await;
    let article = app.add_article("Draft", tech, Some(grace.id), false, 1).await;

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/api/v1/editor/approve/{}", i64::from(article)),
            Some(&token_for(&eve)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["is_approved"], true);
    assert_eq!(body["transitioned"], true);
    assert!(app.store.article(article).unwrap().is_approved);

    let (_, pending) = app
        .send(Method::GET, "/api/v1/editor/dashboard", Some(&token_for(&eve)), None)
        .await;
    assert_eq!(pending["articles"], json!([]));
}

#[tokio::test]
async fn approving_a_missing_article_is_not_found() {
    let app = test_app();
    let eve = app.add_user("eve", Role::Editor).await;
    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/editor/approve/404",
            Some(&token_for(&eve)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_response(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn role_dashboards_are_guarded() {
    let app = test_app();
    let ada = app.add_user("ada", Role::Reader).await;
    let grace = app.add_user("grace", Role::Journalist).await;
    let eve = app.add_user("eve", Role::Editor).await;

    let cases = [
        ("/api/v1/reader/dashboard", &ada),
        ("/api/v1/journalist/dashboard", &grace),
        ("/api/v1/editor/dashboard", &eve),
    ];
    for (path, owner) in cases {
        for user in [&ada, &grace, &eve] {
            let (status, _) = app
                .send(Method::GET, path, Some(&token_for(user)), None)
                .await;
            let expected = if user.id == owner.id {
                StatusCode::OK
            } else {
                StatusCode::FORBIDDEN
            };
            assert_eq!(status, expected, "{} on {path}", user.username);
        }
    }
}

#[tokio::test]
async fn journalist_submission_lands_in_pending_queue() {
    let app = test_app();
    let grace = app.add_user("grace", Role::Journalist).await;
    let eve = app.add_user("eve", Role::Editor).await;
    let ada = app.add_user("ada", Role::Reader).await;
    let tech = app.add_publisher("Tech News").await;

    let (status, created) = app
        .send(
            Method::POST,
            "/api/v1/journalist/articles",
            Some(&token_for(&grace)),
            Some(article_body("Rust 2024", "Editions explained", i64::from(tech))),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["is_approved"], false);
    assert_eq!(created["journalist_id"], i64::from(grace.id));
    let id = created["id"].as_i64().unwrap();

    let (_, own) = app
        .send(
            Method::GET,
            "/api/v1/journalist/dashboard",
            Some(&token_for(&grace)),
            None,
        )
        .await;
    assert_eq!(ids(&own["articles"]), vec![id]);

    let (_, pending) = app
        .send(Method::GET, "/api/v1/editor/dashboard", Some(&token_for(&eve)), None)
        .await;
    assert_eq!(ids(&pending["articles"]), vec![id]);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/journalist/articles",
            Some(&token_for(&ada)),
            Some(article_body("Nope", "Readers cannot write", i64::from(tech))),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn submission_to_unknown_publisher_is_not_found() {
    let app = test_app();
    let grace = app.add_user("grace", Role::Journalist).await;
    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/journalist/articles",
            Some(&token_for(&grace)),
            Some(article_body("Lost", "No such publisher", 77)),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn editors_manage_publishers() {
    let app = test_app();
    let eve = app.add_user("eve", Role::Editor).await;
    let ada = app.add_user("ada", Role::Reader).await;
    let token = token_for(&eve);

    let (status, created) = app
        .send(
            Method::POST,
            "/api/v1/publishers",
            Some(&token),
            Some(json!({ "name": "Tech News", "description": "Daily tech" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Tech News");
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/publishers",
            Some(&token_for(&ada)),
            Some(json!({ "name": "Reader Press" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, list) = app.send(Method::GET, "/api/v1/publishers", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![id]);

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/v1/publishers/{id}"),
            Some(&token_for(&ada)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/v1/publishers/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/v1/publishers/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_publisher_removes_its_articles() {
    let app = test_app();
    let eve = app.add_user("eve", Role::Editor).await;
    let ada = app.add_user("ada", Role::Reader).await;
    let tech = app.add_publisher("Tech News").await;
    let article = app.add_article("Gone soon", tech, None, true, 1).await;
    app.subscribe(&ada, tech).await;

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/v1/publishers/{}", i64::from(tech)),
            Some(&token_for(&eve)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(app.store.article(article).is_none());

    let (_, dashboard) = app
        .send(Method::GET, "/api/v1/reader/dashboard", Some(&token_for(&ada)), None)
        .await;
    assert_eq!(dashboard["subscriptions"]["publisher_ids"], json!([]));
}

#[tokio::test]
async fn editor_accounts_require_an_editor() {
    let app = test_app();
    let eve = app.add_user("eve", Role::Editor).await;
    let ada = app.add_user("ada", Role::Reader).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(RegisterBody::new("mallory").role("editor").build()),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_response(&body, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            Some(&token_for(&ada)),
            Some(RegisterBody::new("mallory").role("editor").build()),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            Some(&token_for(&eve)),
            Some(RegisterBody::new("carol").role("editor").build()),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "editor");
}
