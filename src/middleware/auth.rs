//! Auth middleware: bearer-token gate for protected routes.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::error::AppError;
use crate::handlers::http::AppState;

/// Middleware: require a valid `Authorization: Bearer <token>` header.
///
/// Only the allow/deny decision is made here; no identity is attached to the
/// request for downstream handlers.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = state.auth_service().authorize(header) {
        debug!(error = %e, "rejected request: bearer check failed");
        return Err(e);
    }

    Ok(next.run(request).await)
}
