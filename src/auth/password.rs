//! Password hashing and verification (Argon2id, PHC string format).

use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

use crate::config::HashCost;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid hash parameters: {0}")]
    Params(argon2::Error),
    #[error("password hashing failed: {0}")]
    Hashing(password_hash::Error),
    #[error("stored password hash is malformed: {0}")]
    Malformed(password_hash::Error),
}

/// Salted one-way password transform with a configurable work factor.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new(cost: HashCost) -> Result<Self, HashError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(HashError::Params)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(HashError::Hashing)?
            .to_string();
        Ok(hash)
    }

    /// Returns `Ok(false)` on mismatch. The salt and cost come from `hash`
    /// itself, so hashes made under an older work factor still verify.
    pub fn verify(&self, hash: &str, password: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(HashError::Malformed)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::Hashing(e)),
        }
    }
}
