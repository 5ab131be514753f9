//! # Comment Handler Tests
//!
//! Drive the full router (auth gate included) with test doubles for the
//! identity service, the blog service, and a counting wrapper around an
//! in-memory SQLite store.


use crate::server::{create_router, AppState};
use crate::services::{PostResolver, ResolverError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Request, Response};
use axum::Router;
use lib_auth::{BearerToken, IdentityVerifier, VerifyError};
use lib_core::dto::ErrorResponse;
use lib_core::model::store::{Comment, CommentForCreate};
use lib_core::{init_schema, CommentStore, DbPool};
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "test-token";

/// Setup test database, optionally with the comments table
pub async fn setup_test_db(with_schema: bool) -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    if with_schema {
        init_schema(&pool).await.expect("Failed to create comments table");
    }

    pool
}

/// Identity service double accepting or rejecting every token.
pub struct StubVerifier {
    accept: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl IdentityVerifier for StubVerifier {
    async fn verify(&self, _token: &BearerToken) -> Result<(), VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.accept {
            Ok(())
        } else {
            Err(VerifyError::Rejected(401))
        }
    }
}

/// Blog service double returning a fixed answer and recording the token it saw.
pub struct StubPosts {
    result: Result<HashSet<i64>, ResolverError>,
    pub calls: AtomicUsize,
    pub last_token: Mutex<Option<String>>,
}

#[async_trait]
impl PostResolver for StubPosts {
    async fn resolve(&self, token: &BearerToken) -> Result<HashSet<i64>, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_token.lock().unwrap() = Some(token.as_str().to_string());
        self.result.clone()
    }
}

/// SQLite store that counts how often it is used.
pub struct CountingStore {
    pool: DbPool,
    pub lists: AtomicUsize,
    pub inserts: AtomicUsize,
}

#[async_trait]
impl CommentStore for CountingStore {
    async fn list(&self) -> lib_core::Result<Vec<Comment>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.pool.list().await
    }

    async fn insert(&self, comment: &CommentForCreate) -> lib_core::Result<i64> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.pool.insert(comment).await
    }
}

/// Test fixture holding the doubles behind one router.
pub struct TestCtx {
    pub pool: DbPool,
    pub store: Arc<CountingStore>,
    pub posts: Arc<StubPosts>,
    pub identity: Arc<StubVerifier>,
}

impl TestCtx {
    /// Accepting identity service, blog service knowing `post_ids`.
    pub async fn new(post_ids: &[i64]) -> Self {
        Self::build(Ok(post_ids.iter().copied().collect()), true, true).await
    }

    pub async fn build(
        posts: Result<HashSet<i64>, ResolverError>,
        accept_tokens: bool,
        with_schema: bool,
    ) -> Self {
        let pool = setup_test_db(with_schema).await;
        Self {
            store: Arc::new(CountingStore {
                pool: pool.clone(),
                lists: AtomicUsize::new(0),
                inserts: AtomicUsize::new(0),
            }),
            posts: Arc::new(StubPosts {
                result: posts,
                calls: AtomicUsize::new(0),
                last_token: Mutex::new(None),
            }),
            identity: Arc::new(StubVerifier {
                accept: accept_tokens,
                calls: AtomicUsize::new(0),
            }),
            pool,
        }
    }

    pub fn app(&self) -> Router {
        create_router(AppState::new(
            self.store.clone(),
            self.posts.clone(),
            self.identity.clone(),
        ))
    }

    pub async fn stored(&self) -> Vec<Comment> {
        lib_core::model::store::CommentRepository::list(&self.pool)
            .await
            .expect("listing test database should succeed")
    }

    pub fn resolver_calls(&self) -> usize {
        self.posts.calls.load(Ordering::SeqCst)
    }

    pub fn identity_calls(&self) -> usize {
        self.identity.calls.load(Ordering::SeqCst)
    }

    pub fn store_calls(&self) -> usize {
        self.store.lists.load(Ordering::SeqCst) + self.store.inserts.load(Ordering::SeqCst)
    }
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

pub fn get_comments(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/comments");
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_comments(auth: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/comments")
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    builder.body(body.into()).unwrap()
}

pub async fn body_error(response: Response<Body>) -> ErrorResponse {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
