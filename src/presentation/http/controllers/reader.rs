// src/presentation/http/controllers/reader.rs
use crate::application::dto::{ReaderDashboardDto, SubscriptionStateDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/reader/dashboard",
    responses(
        (status = 200, description = "Reader feed and subscription catalogue.", body = ReaderDashboardDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not a reader.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reader"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ReaderDashboardDto>> {
    state
        .services
        .dashboard_queries
        .reader_dashboard(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/reader/subscribe/{publisher_id}",
    params(("publisher_id" = i64, Path, description = "Publisher identifier")),
    responses(
        (status = 200, description = "Subscription state after the change.", body = SubscriptionStateDto),
        (status = 404, description = "Publisher not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reader"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(publisher_id): Path<i64>,
) -> HttpResult<Json<SubscriptionStateDto>> {
    state
        .services
        .subscription_commands
        .subscribe(&user, publisher_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/reader/unsubscribe/{publisher_id}",
    params(("publisher_id" = i64, Path, description = "Publisher identifier")),
    responses(
        (status = 200, description = "Subscription state after the change.", body = SubscriptionStateDto),
        (status = 404, description = "Publisher not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reader"
)]
pub async fn unsubscribe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(publisher_id): Path<i64>,
) -> HttpResult<Json<SubscriptionStateDto>> {
    state
        .services
        .subscription_commands
        .unsubscribe(&user, publisher_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/reader/follow/{journalist_id}",
    params(("journalist_id" = i64, Path, description = "Journalist user identifier")),
    responses(
        (status = 200, description = "Subscription state after the change.", body = SubscriptionStateDto),
        (status = 404, description = "Journalist not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reader"
)]
pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(journalist_id): Path<i64>,
) -> HttpResult<Json<SubscriptionStateDto>> {
    state
        .services
        .subscription_commands
        .follow(&user, journalist_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/reader/unfollow/{journalist_id}",
    params(("journalist_id" = i64, Path, description = "Journalist user identifier")),
    responses(
        (status = 200, description = "Subscription state after the change.", body = SubscriptionStateDto),
        (status = 404, description = "Journalist not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reader"
)]
pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(journalist_id): Path<i64>,
) -> HttpResult<Json<SubscriptionStateDto>> {
    state
        .services
        .subscription_commands
        .unfollow(&user, journalist_id)
        .await
        .into_http()
        .map(Json)
}
