// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt;

use newsroom_core::application::dto::AuthenticatedUser;
use newsroom_core::application::services::ApplicationServices;
use newsroom_core::domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleWriteRepository, NewArticle};
use newsroom_core::domain::publisher::{NewPublisher, PublisherId, PublisherName, PublisherRepository};
use newsroom_core::domain::subscription::SubscriptionRepository;
use newsroom_core::domain::user::{
    EmailAddress, NewUser, PasswordHash, Role, User, UserId, UserRepository, Username,
};
use newsroom_core::infrastructure::security::session_store::InMemorySessionRevocationStore;
use newsroom_core::presentation::http::routes::{RouterOptions, build_router};
use newsroom_core::presentation::http::state::HttpState;

use super::mocks::{
    DummyClock, DummyPasswordHasher, DummyTokenManager, FIXED_NOW, InMemoryStore, RecordingMailer,
    encode_test_token,
};

pub const MAIL_FROM: &str = "noreply@newsapp.com";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub mailer: Arc<RecordingMailer>,
    pub services: Arc<ApplicationServices>,
}

pub fn test_app() -> TestApp {
    test_app_with_mailer(RecordingMailer::default())
}

pub fn test_app_with_mailer(mailer: RecordingMailer) -> TestApp {
    let store = Arc::new(InMemoryStore::default());
    let mailer = Arc::new(mailer);
    let services = Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(DummyPasswordHasher),
        Arc::new(DummyTokenManager),
        Arc::new(InMemorySessionRevocationStore::new()),
        mailer.clone(),
        Arc::new(DummyClock::default()),
        MAIL_FROM,
    ));
    let router = build_router(
        HttpState {
            services: services.clone(),
        },
        RouterOptions::default(),
    );

    TestApp {
        router,
        store,
        mailer,
        services,
    }
}

impl TestApp {
    /// Inserts an active user whose password is `password123`.
    pub async fn add_user(&self, username: &str, role: Role) -> User {
        self.add_user_with(username, role, true).await
    }

    pub async fn add_user_with(&self, username: &str, role: Role, is_active: bool) -> User {
        let mut new_user = NewUser::new(
            Username::new(username).unwrap(),
            EmailAddress::new(format!("{username}@example.com")).unwrap(),
            PasswordHash::new("hashed:password123").unwrap(),
            role,
            None,
            *FIXED_NOW,
        )
        .unwrap();
        new_user.is_active = is_active;
        UserRepository::insert(self.store.as_ref(), new_user)
            .await
            .unwrap()
    }

    pub async fn add_publisher(&self, name: &str) -> PublisherId {
        let publisher = PublisherRepository::insert(
            self.store.as_ref(),
            NewPublisher::new(PublisherName::new(name).unwrap(), None),
        )
        .await
        .unwrap();
        publisher.id
    }

    pub async fn add_article(
        &self,
        title: &str,
        publisher: PublisherId,
        journalist: Option<UserId>,
        approved: bool,
        minutes_after_base: i64,
    ) -> ArticleId {
        let article = ArticleWriteRepository::insert(
            self.store.as_ref(),
            NewArticle {
                title: ArticleTitle::new(title).unwrap(),
                content: ArticleContent::new(format!("{title} body")).unwrap(),
                publisher_id: publisher,
                journalist_id: journalist,
                is_approved: approved,
                created_at: *FIXED_NOW + chrono::Duration::minutes(minutes_after_base),
            },
        )
        .await
        .unwrap();
        article.id
    }

    pub async fn subscribe(&self, reader: &User, publisher: PublisherId) {
        self.store.add_publisher(reader.id, publisher).await.unwrap();
    }

    pub async fn follow(&self, reader: &User, journalist: &User) {
        self.store
            .add_journalist(reader.id, journalist.id)
            .await
            .unwrap();
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.router, method, uri, token, body).await
    }
}

pub fn token_for(user: &User) -> String {
    encode_test_token(i64::from(user.id), user.role, None)
}

pub fn actor(user: &User) -> AuthenticatedUser {
    let now = chrono::Utc::now();
    AuthenticatedUser {
        id: user.id,
        username: user.username.to_string(),
        role: user.role,
        capabilities: user.role.default_capabilities(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
        session_id: None,
    }
}

/// Drives one request through the router. Empty bodies decode as `Value::Null`.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

pub fn assert_error_response(body: &Value, status: StatusCode) {
    assert_eq!(
        body["error"].as_str(),
        status.canonical_reason(),
        "unexpected body: {body}"
    );
    assert!(body["message"].is_string(), "missing message: {body}");
}

pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap_or_else(|| panic!("expected array, got {list}"))
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
