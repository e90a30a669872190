use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use sha2::{Digest, Sha256};

use crate::entities::users;

/// Account data returned from the repository (without the password hash)
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i32,
    pub username: String,
}

impl From<users::Model> for Account {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}

pub struct AccountRepository {
    conn: DatabaseConnection,
}

impl AccountRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// True iff an account with that exact username is present.
    pub async fn exists(&self, username: &str) -> Result<bool> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.conn)
            .await
            .context("Failed to check username existence")?;

        Ok(count > 0)
    }

    /// Insert a new account row. The unique index on `username` is the
    /// final arbiter against concurrent registrations; a constraint
    /// violation surfaces as the underlying [`sea_orm::DbErr`] for the
    /// caller to classify.
    pub async fn insert(&self, username: &str, password_hash: &str) -> Result<Account> {
        let active = users::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        };

        let model = active.insert(&self.conn).await?;
        Ok(Account::from(model))
    }

    /// Stored password digest for a username, `None` if no such account.
    pub async fn password_hash(&self, username: &str) -> Result<Option<String>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query account by username")?;

        Ok(user.map(|u| u.password_hash))
    }
}

/// Hash a password as base64(SHA-256(utf8 bytes)).
///
/// Deterministic and unsalted; stored digests from the original
/// records stay valid. Not a hardened KDF.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    BASE64.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
    }

    #[test]
    fn test_distinct_passwords_distinct_digests() {
        assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
        assert_ne!(hash_password(""), hash_password(" "));
    }

    #[test]
    fn test_digest_format() {
        // base64 of a 32-byte digest is always 44 chars with padding.
        let digest = hash_password("password");
        assert_eq!(digest.len(), 44);
        assert!(digest.ends_with('='));
    }

    #[test]
    fn test_known_vector() {
        // SHA-256("abc") = ba7816bf..., base64-encoded.
        assert_eq!(hash_password("abc"), "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
    }
}
