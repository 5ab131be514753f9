//! # Database Store
//!
//! Database connection pool, schema bootstrap, and the comment repository.
//!
//! The `comments` table is the only locally owned state. `post_id` references
//! posts held by the external blog service, so there is no foreign key; the
//! reference is checked at write time by the comment service instead.

// region: --- Modules
pub mod models;
pub mod comment_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use comment_repository::CommentRepository;
pub use models::{Comment, CommentForCreate};
// endregion: --- Re-exports

// region: --- Types and Functions
use async_trait::async_trait;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::time::Duration;
use tracing::info;

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a new SQLite connection pool, creating the database file if missing.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

/// Create the `comments` table if it does not exist yet.
///
/// Idempotent; safe to run on every startup.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("[STORE] comments table ready");
    Ok(())
}

/// Storage seam used by the comment service.
///
/// Implemented for [`DbPool`] by delegating to [`CommentRepository`]; handlers hold it
/// as `Arc<dyn CommentStore>` so tests can substitute their own.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// All stored comments, ordered by id.
    async fn list(&self) -> crate::Result<Vec<Comment>>;

    /// Persist a comment and return its newly assigned id.
    async fn insert(&self, comment: &CommentForCreate) -> crate::Result<i64>;
}

#[async_trait]
impl CommentStore for DbPool {
    async fn list(&self) -> crate::Result<Vec<Comment>> {
        Ok(CommentRepository::list(self).await?)
    }

    async fn insert(&self, comment: &CommentForCreate) -> crate::Result<i64> {
        Ok(CommentRepository::create(self, comment.post_id, &comment.title, &comment.content).await?)
    }
}
// endregion: --- Types and Functions
