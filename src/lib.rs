//! Minimal signup/login API issuing JWT bearer tokens.
//!
//! Accounts are stored with Argon2id password hashes; login returns an
//! HS256-signed token that unlocks `GET /protected`.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use tower_http::trace::TraceLayer;

/// Build the API router (signup, login, protected, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let protected_routes = axum::Router::new()
        .route("/protected", get(http::protected))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_bearer,
        ));

    axum::Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/health", get(http::health))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
