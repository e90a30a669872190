use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::entities::{prelude::*, user_actions};

/// History reads return at most this many rows, newest first.
pub const HISTORY_WINDOW: u64 = 100;

pub struct ActionRepository {
    conn: DatabaseConnection,
}

impl ActionRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Append one immutable row with a fresh UTC timestamp.
    ///
    /// Missing details are stored as the empty string rather than NULL
    /// so history responses never have to distinguish the two.
    pub async fn append(
        &self,
        username: &str,
        action_type: &str,
        details: Option<String>,
    ) -> Result<()> {
        let active = user_actions::ActiveModel {
            username: Set(username.to_string()),
            action_type: Set(action_type.to_string()),
            details: Set(Some(details.unwrap_or_default())),
            timestamp: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        UserActions::insert(active)
            .exec(&self.conn)
            .await
            .context("Failed to append user action")?;

        Ok(())
    }

    /// Up to `max_count` entries for the user, ordered by descending id
    /// (most recent first). Unknown users yield an empty vec.
    pub async fn recent_for_user(
        &self,
        username: &str,
        max_count: u64,
    ) -> Result<Vec<user_actions::Model>> {
        let entries = UserActions::find()
            .filter(user_actions::Column::Username.eq(username))
            .order_by_desc(user_actions::Column::Id)
            .limit(max_count)
            .all(&self.conn)
            .await
            .context("Failed to query user action history")?;

        Ok(entries)
    }
}
