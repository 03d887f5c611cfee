// src/presentation/http/controllers/editor.rs
use crate::application::{
    commands::articles::ApproveArticleCommand,
    dto::{ApprovalResultDto, EditorDashboardDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/editor/dashboard",
    responses(
        (status = 200, description = "Articles waiting for approval.", body = EditorDashboardDto),
        (status = 403, description = "Not an editor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<EditorDashboardDto>> {
    state
        .services
        .dashboard_queries
        .editor_dashboard(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/editor/approve/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article approved; notifications reported.", body = ApprovalResultDto),
        (status = 403, description = "Not an editor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn approve(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<ApprovalResultDto>> {
    state
        .services
        .article_commands
        .approve_article(&user, ApproveArticleCommand { id: article_id })
        .await
        .into_http()
        .map(Json)
}
