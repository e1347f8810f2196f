//! Account record and the JSON bodies of `/signup` and `/login`.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A stored user. `password_hash` is the PHC string, never the plaintext.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Body of `POST /signup` and `POST /login`. Missing or `null` fields decode as empty.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Credentials {
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

impl Credentials {
    /// Decode a request body; an empty body is the same as `{}`.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Account as returned to the caller: the password field is always blank.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PublicAccount {
    pub id: i64,
    pub email: String,
    pub password: String,
}

impl From<Account> for PublicAccount {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            password: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
