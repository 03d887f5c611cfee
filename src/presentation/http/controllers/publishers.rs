// src/presentation/http/controllers/publishers.rs
use crate::application::{
    commands::publishers::{CreatePublisherCommand, DeletePublisherCommand},
    dto::PublisherDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublisherRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers",
    responses(
        (status = 200, description = "All publishers by name.", body = [PublisherDto])
    ),
    security(()),
    tag = "Catalogue"
)]
pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublisherDto>>> {
    state
        .services
        .publisher_queries
        .list_publishers()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/publishers",
    request_body = CreatePublisherRequest,
    responses(
        (status = 201, description = "Publisher created.", body = PublisherDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not an editor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalogue"
)]
pub async fn create_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePublisherRequest>,
) -> HttpResult<(StatusCode, Json<PublisherDto>)> {
    let command = CreatePublisherCommand {
        name: payload.name,
        description: payload.description,
    };
    let publisher = state
        .services
        .publisher_commands
        .create_publisher(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/publishers/{id}",
    params(("id" = i64, Path, description = "Publisher identifier")),
    responses(
        (status = 204, description = "Publisher and its articles deleted."),
        (status = 403, description = "Not an editor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Publisher not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalogue"
)]
pub async fn delete_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .publisher_commands
        .delete_publisher(&user, DeletePublisherCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
