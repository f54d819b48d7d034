//! In-memory post store.

use chrono::Utc;

use crate::error::Error;
use crate::post::{NewPost, Post, PostStore};

/// A post store that keeps everything in a vector.
///
/// Ids start at 1 and increase by one per created post, like SQLite's
/// autoincrement rowids.
///
/// # Example
///
/// ```rust
/// use termfolio_posts::{InMemoryPostStore, NewPost, PostStore};
///
/// let mut store = InMemoryPostStore::new();
/// store.create(NewPost::new("first", "a")).unwrap();
/// store.create(NewPost::new("second", "b")).unwrap();
///
/// let titles: Vec<String> = store.list().unwrap().into_iter().map(|p| p.title).collect();
/// assert_eq!(titles, vec!["second", "first"]);
/// ```
pub struct InMemoryPostStore {
    posts: Vec<Post>,
    next_id: i64,
}

impl InMemoryPostStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store seeded with existing posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self { posts, next_id }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for InMemoryPostStore {
    fn create(&mut self, post: NewPost) -> Result<i64, Error> {
        let id = self.next_id;
        self.next_id += 1;
        self.posts.push(Post {
            id,
            title: post.title,
            content: post.content,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    fn list(&mut self) -> Result<Vec<Post>, Error> {
        let mut posts = self.posts.clone();
        posts.sort_by(Post::newest_first);
        Ok(posts)
    }
}
