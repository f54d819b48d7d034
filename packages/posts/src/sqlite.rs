//! SQLite-backed post store.
//!
//! All posts live in one `posts` table. Timestamps are stored as fixed-width
//! RFC 3339 text (microsecond precision, `Z` suffix) so that ordering by the
//! column text is ordering by time.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use crate::error::Error;
use crate::post::{NewPost, Post, PostStore};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL
);
"#;

/// A post store persisted to a SQLite database file.
pub struct SqlitePostStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqlitePostStore {
    /// Open (or create) the database at `path` and ensure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        log::debug!("Opening post database {}...", path.display());
        let conn = Connection::open(&path)?;
        let store = Self {
            path: Some(path),
            conn,
        };
        store.migrate()?;
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, Error> {
        let store = Self {
            path: None,
            conn: Connection::open_in_memory()?,
        };
        store.migrate()?;
        Ok(store)
    }

    /// The database file, if this store is file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn migrate(&self) -> Result<(), Error> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Failures after the database is open are reported as storage failures.
fn storage(e: rusqlite::Error) -> Error {
    Error::Storage {
        message: e.to_string(),
    }
}

fn parse_timestamp(id: i64, raw: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::Corrupt {
            message: format!("post {} has invalid created_at '{}': {}", id, raw, e),
        })
}

impl PostStore for SqlitePostStore {
    fn create(&mut self, post: NewPost) -> Result<i64, Error> {
        let created_at = format_timestamp(&Utc::now());
        self.conn
            .execute(
                "INSERT INTO posts (title, content, created_at) VALUES (?1, ?2, ?3)",
                params![post.title, post.content, created_at],
            )
            .map_err(storage)?;
        let id = self.conn.last_insert_rowid();
        log::debug!("Created post {}", id);
        Ok(id)
    }

    fn list(&mut self) -> Result<Vec<Post>, Error> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, content, created_at FROM posts ORDER BY created_at DESC, id DESC",
            )
            .map_err(storage)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(storage)?;

        let mut posts = Vec::new();
        for row in rows {
            let (id, title, content, created_at) = row.map_err(storage)?;
            posts.push(Post {
                id,
                title,
                content,
                created_at: parse_timestamp(id, &created_at)?,
            });
        }
        Ok(posts)
    }
}
