//! # termfolio-http
//!
//! The HTTP surface of the termfolio blog.
//!
//! ## Routes
//!
//! - `POST /api/posts` - create a post (HTTP Basic auth, user `admin`)
//! - `GET /api/posts` - list every post, newest first
//! - anything else - a file from the static root, falling back to the
//!   root `index.html` so the front-end can do its own routing
//!
//! ## Server
//!
//! ```ignore
//! use termfolio_http::{Server, ServerConfig};
//! use termfolio_posts::SqlitePostStore;
//!
//! let config = ServerConfig::default();
//! let store = SqlitePostStore::open(&config.database)?;
//! Server::bind(&config, store)?.serve();
//! ```
//!
//! ## Client
//!
//! ```ignore
//! use termfolio_http::PostClient;
//!
//! let client = PostClient::new("http://localhost:5001")?;
//! for post in client.list_posts()? {
//!     println!("{}", post.title);
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod statics;
pub mod types;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use auth::{BasicAuth, Credentials, ADMIN_USERNAME};
pub use config::ServerConfig;
pub use error::Error;
pub use routes::Router;
pub use server::{Server, ServerHandle};
pub use statics::StaticFiles;
pub use types::{ApiRequest, ApiResponse, CreatedPost, ErrorBody, PostList};

#[cfg(feature = "blocking")]
pub use blocking::PostClient;
