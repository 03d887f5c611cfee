// src/presentation/http/controllers/journalists.rs
use crate::application::dto::JournalistDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/journalists",
    responses(
        (status = 200, description = "All journalists by username.", body = [JournalistDto])
    ),
    security(()),
    tag = "Catalogue"
)]
pub async fn list_journalists(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<JournalistDto>>> {
    state
        .services
        .user_queries
        .list_journalists()
        .await
        .into_http()
        .map(Json)
}
