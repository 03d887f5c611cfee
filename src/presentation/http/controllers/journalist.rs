// src/presentation/http/controllers/journalist.rs
use crate::application::{
    commands::articles::CreateArticleCommand,
    dto::{ArticleDto, JournalistDashboardDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub publisher_id: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/journalist/dashboard",
    responses(
        (status = 200, description = "Articles written by the caller.", body = JournalistDashboardDto),
        (status = 403, description = "Not a journalist.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Journalist"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<JournalistDashboardDto>> {
    state
        .services
        .dashboard_queries
        .journalist_dashboard(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/journalist/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article submitted for approval.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Publisher not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Journalist"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        publisher_id: payload.publisher_id,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}
