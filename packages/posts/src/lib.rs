//! # termfolio-posts
//!
//! Storage for blog posts.
//!
//! Posts are immutable records with an id and creation timestamp assigned by
//! the store. A store supports exactly two operations: create a post, and list
//! every post newest first.
//!
//! ## Store Types
//!
//! - [`SqlitePostStore`] - durable store backed by a single SQLite table
//! - [`InMemoryPostStore`] - vector-backed store for tests and throwaway servers
//!
//! ```rust
//! use termfolio_posts::{InMemoryPostStore, NewPost, PostStore};
//!
//! let mut store = InMemoryPostStore::new();
//! let id = store.create(NewPost::new("Hello", "First post")).unwrap();
//!
//! let posts = store.list().unwrap();
//! assert_eq!(posts[0].id, id);
//! ```

pub mod error;
pub mod in_memory;
pub mod post;
pub mod sqlite;

pub use error::Error;
pub use in_memory::InMemoryPostStore;
pub use post::{NewPost, Post, PostStore};
pub use sqlite::SqlitePostStore;
