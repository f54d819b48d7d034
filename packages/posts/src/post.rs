use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A stored blog post.
///
/// The id and creation time are assigned by the store; a post never changes
/// after it has been created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Ordering used by every store's `list`: newest first, later ids first on ties.
    pub fn newest_first(a: &Post, b: &Post) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}

/// Payload for creating a post.
///
/// Any string is accepted for either field, including the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A store of blog posts.
///
/// There is no update, delete or pagination.
pub trait PostStore {
    /// Insert a post stamped with the current time and return its new id.
    fn create(&mut self, post: NewPost) -> Result<i64, Error>;

    /// Every post, newest first. An empty store yields an empty vec.
    fn list(&mut self) -> Result<Vec<Post>, Error>;
}

impl<S: PostStore + ?Sized> PostStore for Box<S> {
    fn create(&mut self, post: NewPost) -> Result<i64, Error> {
        (**self).create(post)
    }

    fn list(&mut self) -> Result<Vec<Post>, Error> {
        (**self).list()
    }
}
