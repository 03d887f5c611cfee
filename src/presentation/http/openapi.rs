// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::auth::dashboard,
        crate::presentation::http::controllers::reader::dashboard,
        crate::presentation::http::controllers::reader::subscribe,
        crate::presentation::http::controllers::reader::unsubscribe,
        crate::presentation::http::controllers::reader::follow,
        crate::presentation::http::controllers::reader::unfollow,
        crate::presentation::http::controllers::journalist::dashboard,
        crate::presentation::http::controllers::journalist::create_article,
        crate::presentation::http::controllers::editor::dashboard,
        crate::presentation::http::controllers::editor::approve,
        crate::presentation::http::controllers::publishers::list_publishers,
        crate::presentation::http::controllers::publishers::create_publisher,
        crate::presentation::http::controllers::publishers::delete_publisher,
        crate::presentation::http::controllers::journalists::list_journalists,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::journalist::CreateArticleRequest,
            crate::presentation::http::controllers::publishers::CreatePublisherRequest,
            crate::domain::user::Role,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::ArticleDto,
            crate::application::dto::ApprovalResultDto,
            crate::application::dto::PublisherDto,
            crate::application::dto::JournalistDto,
            crate::application::dto::SubscriptionStateDto,
            crate::application::dto::ReaderDashboardDto,
            crate::application::dto::JournalistDashboardDto,
            crate::application::dto::EditorDashboardDto
        )
    ),
    tags(
        (name = "Auth", description = "Accounts, sessions and dashboard routing"),
        (name = "Reader", description = "Feed and subscription management"),
        (name = "Journalist", description = "Article submission"),
        (name = "Editor", description = "Review and approval"),
        (name = "Catalogue", description = "Publishers, journalists and approved articles"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Newsroom API",
        description = "Role-based news publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` (default
/// `openapi.json`).
pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
