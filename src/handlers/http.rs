//! HTTP handlers: protected resource and health.

use axum::{http::StatusCode, Json};
use serde_json::json;
use tracing::info;

use crate::auth::AuthService;

/// Shared application state for the router.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(auth_service: AuthService) -> Self {
        Self { auth_service }
    }

    pub fn auth_service(&self) -> &AuthService {
        &self.auth_service
    }
}

/// GET /protected: only reached once the bearer check has passed.
pub async fn protected() -> StatusCode {
    info!("protected endpoint invoked");
    StatusCode::OK
}

/// GET /health: liveness check.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "authapi" })),
    )
}
