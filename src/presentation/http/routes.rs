// src/presentation/http/routes.rs
use crate::domain::user::Role;
use crate::presentation::http::middleware::{rate_limit::rate_limit_layer, require_role::require_role};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, editor, journalist, journalists, publishers, reader},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Knobs that differ between production and tests.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub rate_limit: bool,
    pub allowed_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            rate_limit: false,
            allowed_origins: vec!["http://localhost:3000".into()],
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

fn role_routes(role: Role, routes: Router) -> Router {
    routes.route_layer(middleware::from_fn(move |req, next| {
        require_role(req, next, role)
    }))
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let reader_routes = role_routes(
        Role::Reader,
        Router::new()
            .route("/api/v1/reader/dashboard", get(reader::dashboard))
            .route("/api/v1/reader/subscribe/{publisher_id}", post(reader::subscribe))
            .route(
                "/api/v1/reader/unsubscribe/{publisher_id}",
                post(reader::unsubscribe),
            )
            .route("/api/v1/reader/follow/{journalist_id}", post(reader::follow))
            .route("/api/v1/reader/unfollow/{journalist_id}", post(reader::unfollow)),
    );

    let journalist_routes = role_routes(
        Role::Journalist,
        Router::new()
            .route("/api/v1/journalist/dashboard", get(journalist::dashboard))
            .route("/api/v1/journalist/articles", post(journalist::create_article)),
    );

    let editor_routes = role_routes(
        Role::Editor,
        Router::new()
            .route("/api/v1/editor/dashboard", get(editor::dashboard))
            .route("/api/v1/editor/approve/{article_id}", post(editor::approve)),
    );

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/dashboard", get(auth::dashboard))
        .route(
            "/api/v1/publishers",
            get(publishers::list_publishers).post(publishers::create_publisher),
        )
        .route("/api/v1/publishers/{id}", delete(publishers::delete_publisher))
        .route("/api/v1/journalists", get(journalists::list_journalists))
        .route("/api/v1/articles", get(articles::list_articles))
        .route("/api/v1/articles/{id}", get(articles::get_article))
        .merge(reader_routes)
        .merge(journalist_routes)
        .merge(editor_routes);

    if options.rate_limit {
        match rate_limit_layer() {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!("rate limiter configuration rejected; continuing without it"),
        }
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
