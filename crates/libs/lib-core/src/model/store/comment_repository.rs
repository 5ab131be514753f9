//! # Comment Repository
//!
//! Provides database access layer for comment records.
//!
//! Each method is a single statement, so no transaction handling is needed;
//! SQLite serializes concurrent writers.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{CommentRepository, create_pool, init_schema};
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite::memory:").await?;
//! init_schema(&pool).await?;
//!
//! let id = CommentRepository::create(&pool, 1, "Nice", "Good post").await?;
//! let comments = CommentRepository::list(&pool).await?;
//! assert_eq!(comments[0].id, id);
//! # Ok(())
//! # }
//! ```

use super::models::Comment;
use super::DbPool;
use sqlx::query_as;

/// Comment repository for database operations.
pub struct CommentRepository;

impl CommentRepository {
    /// List every stored comment, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection or query fails.
    pub async fn list(pool: &DbPool) -> Result<Vec<Comment>, sqlx::Error> {
        query_as::<_, Comment>("SELECT id, post_id, title, content FROM comments ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Insert a comment and return the id assigned by SQLite.
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `post_id` - Id of the post in the external blog service
    /// * `title` - Comment title
    /// * `content` - Comment body
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection fails or a constraint is violated.
    pub async fn create(
        pool: &DbPool,
        post_id: i64,
        title: &str,
        content: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO comments (post_id, title, content) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(post_id)
        .bind(title)
        .bind(content)
        .fetch_one(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::{init_schema, CommentForCreate, CommentStore};
    use sqlx::sqlite::SqlitePoolOptions;
    use std::collections::HashSet;

    async fn setup_test_db() -> DbPool {
        // Single connection: every new `sqlite::memory:` connection is a fresh database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        init_schema(&pool).await.expect("Failed to create comments table");

        pool
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = setup_test_db().await;

        let id = CommentRepository::create(&pool, 1, "Nice", "Good post")
            .await
            .unwrap();
        assert_eq!(id, 1);

        let comments = CommentRepository::list(&pool).await.unwrap();
        assert_eq!(
            comments,
            vec![Comment {
                id: 1,
                post_id: 1,
                title: "Nice".to_string(),
                content: "Good post".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_empty() {
        let pool = setup_test_db().await;

        let comments = CommentRepository::list(&pool).await.unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = setup_test_db().await;
        CommentRepository::create(&pool, 3, "Keep", "me").await.unwrap();

        init_schema(&pool).await.unwrap();

        assert_eq!(CommentRepository::list(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let pool = setup_test_db().await;

        let first = CommentRepository::create(&pool, 1, "a", "a").await.unwrap();
        let second = CommentRepository::create(&pool, 1, "b", "b").await.unwrap();
        let third = CommentRepository::create(&pool, 2, "c", "c").await.unwrap();

        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_listed_once() {
        let pool = setup_test_db().await;

        let mut handles = Vec::new();
        for i in 0..20_i64 {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move {
                let comment = CommentForCreate::new(i % 3 + 1, format!("title {i}"), format!("content {i}"));
                pool.insert(&comment).await.unwrap()
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        let comments = CommentStore::list(&pool).await.unwrap();
        assert_eq!(comments.len(), 20);

        let listed: HashSet<i64> = comments.iter().map(|c| c.id).collect();
        assert_eq!(listed, ids);

        let titles: HashSet<&str> = comments.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles.len(), 20);
    }

    #[tokio::test]
    async fn test_missing_table_is_an_error() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let err = CommentStore::list(&pool).await.unwrap_err();
        assert!(matches!(err, crate::AppError::Storage(_)));
    }
}
