//! Domain service for account registration and login.
//!
//! Validation runs before any store access; the store's unique index
//! on username settles races the existence pre-check cannot.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::config::AccountPolicyConfig;
use crate::db::repositories::account::hash_password;
use crate::db::{Account, Store};

/// Errors specific to account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("A user with this name already exists")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Store(String),
}

#[derive(Clone)]
pub struct AccountService {
    store: Store,
    policy: AccountPolicyConfig,
}

impl AccountService {
    #[must_use]
    pub const fn new(store: Store, policy: AccountPolicyConfig) -> Self {
        Self { store, policy }
    }

    /// Registers a new account, hashing the password before persisting.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidInput`] for blank or too-short
    /// credentials and [`AccountError::DuplicateUsername`] when the
    /// username is already taken, whether detected by the pre-check or
    /// by the unique index during insert.
    pub async fn register(&self, username: &str, password: &str) -> Result<Account, AccountError> {
        validate_presence(username, password)?;

        if password.chars().count() < self.policy.minimum_password_length {
            return Err(AccountError::InvalidInput(format!(
                "Password must be at least {} characters",
                self.policy.minimum_password_length
            )));
        }

        if self
            .store
            .username_exists(username)
            .await
            .map_err(store_error)?
        {
            return Err(AccountError::DuplicateUsername);
        }

        let password_hash = hash_password(password);

        match self.store.insert_account(username, &password_hash).await {
            Ok(account) => Ok(account),
            Err(e) if is_unique_violation(&e) => Err(AccountError::DuplicateUsername),
            Err(e) => Err(store_error(e)),
        }
    }

    /// Verifies credentials and returns the username.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidCredentials`] for both an unknown
    /// user and a wrong password; the two are not distinguishable from
    /// the outside.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AccountError> {
        validate_presence(username, password)?;

        let Some(stored_hash) = self
            .store
            .account_password_hash(username)
            .await
            .map_err(store_error)?
        else {
            return Err(AccountError::InvalidCredentials);
        };

        if stored_hash != hash_password(password) {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(username.to_string())
    }
}

fn validate_presence(username: &str, password: &str) -> Result<(), AccountError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(AccountError::InvalidInput(
            "Username and password are required".to_string(),
        ));
    }
    Ok(())
}

fn store_error(e: anyhow::Error) -> AccountError {
    AccountError::Store(e.to_string())
}

fn is_unique_violation(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<DbErr>().and_then(DbErr::sql_err),
        Some(SqlErr::UniqueConstraintViolation(_))
    )
}
