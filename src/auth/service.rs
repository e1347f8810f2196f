//! Auth application service: signup, login and the access check for protected routes.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info};

use super::jwt::{bearer_token, Claims, TokenError, TokenIssuer};
use super::password::{CredentialHasher, HashError};
use crate::config::Config;
use crate::db::{AccountStore, StoreError};
use crate::error::{AppError, AppResult, INVALID_TOKEN_MESSAGE};
use crate::models::{Account, Credentials, PublicAccount};

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn AccountStore>,
    hasher: CredentialHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(store: Arc<dyn AccountStore>, hasher: CredentialHasher, tokens: TokenIssuer) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Wire the hasher and token issuer from configuration around `store`.
    pub fn from_config(config: &Config, store: Arc<dyn AccountStore>) -> Result<Self, HashError> {
        let hasher = CredentialHasher::new(config.hash_cost)?;
        let tokens = TokenIssuer::new(
            &config.jwt_secret,
            config.jwt_issuer.clone(),
            Duration::seconds(config.token_ttl_secs),
        );
        Ok(Self::new(store, hasher, tokens))
    }

    pub async fn signup(&self, creds: Credentials) -> AppResult<PublicAccount> {
        require_credentials(&creds)?;

        let Credentials { email, password } = creds;
        let password_hash = self.hash_password(password).await?;

        let id = self
            .store
            .create(&email, &password_hash)
            .await
            .map_err(|e| {
                if matches!(e, StoreError::DuplicateEmail) {
                    debug!("signup rejected: email already registered");
                }
                AppError::Server(e.into())
            })?;
        info!(account_id = id, "account created");

        Ok(PublicAccount::from(Account {
            id,
            email,
            password_hash,
        }))
    }

    /// Returns a signed access token for the account.
    pub async fn login(&self, creds: Credentials) -> AppResult<String> {
        require_credentials(&creds)?;

        let account = match self.store.find_by_email(&creds.email).await {
            Ok(account) => account,
            Err(StoreError::NotFound) => return Err(AppError::AccountNotFound),
            Err(e) => return Err(AppError::Server(e.into())),
        };

        if !self.verify_password(account.password_hash, creds.password).await? {
            debug!(account_id = account.id, "login rejected: password mismatch");
            return Err(AppError::InvalidPassword);
        }

        let token = self
            .tokens
            .issue(&account.email)
            .map_err(|e| AppError::Server(e.into()))?;
        info!(account_id = account.id, "token issued");
        Ok(token)
    }

    /// Decide whether a request carrying this `Authorization` value may proceed.
    pub fn authorize(&self, header: Option<&str>) -> AppResult<Claims> {
        let token = header
            .and_then(bearer_token)
            .ok_or_else(|| AppError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string()))?;

        self.tokens.verify(token).map_err(|e| match e {
            TokenError::Invalid(reason) => AppError::Unauthorized(reason.to_string()),
            TokenError::Signing(_) => AppError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string()),
        })
    }

    async fn hash_password(&self, password: String) -> AppResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Server(e.into()))?
            .map_err(|e| AppError::Server(e.into()))
    }

    async fn verify_password(&self, hash: String, password: String) -> AppResult<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&hash, &password))
            .await
            .map_err(|e| AppError::Server(e.into()))?
            .map_err(|e| AppError::Server(e.into()))
    }
}

fn require_credentials(creds: &Credentials) -> AppResult<()> {
    if creds.email.is_empty() {
        return Err(AppError::Validation("Email missing".to_string()));
    }
    if creds.password.is_empty() {
        return Err(AppError::Validation("Password missing".to_string()));
    }
    Ok(())
}
