//! Read-only SQLite Profile Repository

use crate::StorageError;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;
use tracing::{debug, info};

/// User profile row from the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub name: String,
    pub age: i64,
    pub gender: String,
}

/// Profile lookups against a pre-existing SQLite database
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    /// Open the database at `path` in read-only mode
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.is_file() {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }

        let options = SqliteConnectOptions::new().filename(path).read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!("Opened profile database {}", path.display());
        Ok(Self::with_pool(pool))
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up a single user's profile
    pub async fn find(&self, user_id: u32) -> Result<Option<UserProfile>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT user_id, name, age, gender
            FROM users
            WHERE user_id = ?1
            ",
        )
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await?;

        debug!("Profile lookup for user {}: found={}", user_id, row.is_some());
        row.map(|r| row_to_profile(&r)).transpose()
    }

    /// Close the underlying pool
    pub async fn close(self) {
        self.pool.close().await;
    }
}

fn row_to_profile(row: &SqliteRow) -> Result<UserProfile, StorageError> {
    Ok(UserProfile {
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        gender: row.try_get("gender")?,
    })
}
