//! Data models for accounts and the auth request/response payloads.

pub mod account;

pub use account::*;
