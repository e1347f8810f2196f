//! Middleware: bearer-token access check for protected routes.

pub mod auth;

pub use auth::require_bearer;
