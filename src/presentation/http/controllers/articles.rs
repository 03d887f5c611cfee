// src/presentation/http/controllers/articles.rs
use crate::application::{dto::ArticleDto, queries::articles::GetArticleByIdQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Approved articles, newest first.", body = [ArticleDto])
    ),
    security(()),
    tag = "Catalogue"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_approved()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article detail.", body = ArticleDto),
        (status = 404, description = "Missing, or pending and not visible to the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Catalogue"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(viewer.as_ref(), GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
