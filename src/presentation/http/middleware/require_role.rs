// src/presentation/http/middleware/require_role.rs
use crate::application::error::ApplicationError;
use crate::domain::user::Role;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Guards a route group so only users of `role` reach it. The authenticated
/// user is stored in the request extensions for the handlers.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_role(req, next, Role::Editor))`
pub async fn require_role(mut req: Request<Body>, next: Next, role: Role) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let user = match state.services.authenticate(header.token()).await {
        Ok(user) => user,
        Err(err) => return HttpError::from_error(err).into_response(),
    };

    if user.role != role {
        tracing::debug!(user_id = %user.id, role = %user.role, required = %role, "role guard rejected request");
        return HttpError::from_error(ApplicationError::forbidden(format!(
            "only {role} accounts may access this resource"
        )))
        .into_response();
    }

    req.extensions_mut().insert(user);
    next.run(req).await
}
