//! Authentication: password hashing, JWT issue/verify, signup and login.

mod handlers;
mod jwt;
mod password;
mod service;

pub use handlers::{login, signup};
pub use jwt::{bearer_token, Claims, TokenError, TokenIssuer};
pub use password::{CredentialHasher, HashError};
pub use service::AuthService;
