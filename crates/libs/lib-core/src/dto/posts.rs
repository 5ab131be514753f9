//! # Blog Service Data Transfer Objects
//!
//! Shape of the post objects returned by `GET <blog-url>/blogs`.

use serde::{Deserialize, Serialize};

/// A post owned by the external blog service.
///
/// Only `id` is consulted. The other fields are optional because the blog
/// service's payload varies (it may send `content` and `author` instead of
/// `body`); unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}
