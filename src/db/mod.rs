use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::user_actions;

pub mod migrator;
pub mod repositories;

pub use repositories::account::Account;
pub use repositories::action::HISTORY_WINDOW;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn account_repo(&self) -> repositories::account::AccountRepository {
        repositories::account::AccountRepository::new(self.conn.clone())
    }

    fn action_repo(&self) -> repositories::action::ActionRepository {
        repositories::action::ActionRepository::new(self.conn.clone())
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        self.account_repo().exists(username).await
    }

    pub async fn insert_account(&self, username: &str, password_hash: &str) -> Result<Account> {
        self.account_repo().insert(username, password_hash).await
    }

    pub async fn account_password_hash(&self, username: &str) -> Result<Option<String>> {
        self.account_repo().password_hash(username).await
    }

    pub async fn append_action(
        &self,
        username: &str,
        action_type: &str,
        details: Option<String>,
    ) -> Result<()> {
        self.action_repo()
            .append(username, action_type, details)
            .await
    }

    pub async fn recent_actions_for_user(
        &self,
        username: &str,
        max_count: u64,
    ) -> Result<Vec<user_actions::Model>> {
        self.action_repo()
            .recent_for_user(username, max_count)
            .await
    }
}
