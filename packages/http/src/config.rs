//! Server configuration.

use std::fmt;
use std::path::PathBuf;

use crate::auth::BasicAuth;
use crate::statics::StaticFiles;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATABASE: &str = "blog.db";
pub const DEFAULT_STATIC_DIR: &str = "build";

/// Everything the server needs to start.
#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Password for the `admin` account. With none set, writes are refused.
    pub admin_password: Option<String>,

    /// SQLite database file.
    pub database: PathBuf,

    /// Directory holding the built front-end.
    pub static_dir: PathBuf,

    /// Keep posts in memory instead of `database`.
    pub memory: bool,
}

impl ServerConfig {
    /// Address to bind, as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn auth(&self) -> BasicAuth {
        BasicAuth::admin(self.admin_password.clone())
    }

    pub fn statics(&self) -> StaticFiles {
        StaticFiles::new(&self.static_dir)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            admin_password: None,
            database: PathBuf::from(DEFAULT_DATABASE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            memory: false,
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "<redacted>"),
            )
            .field("database", &self.database)
            .field("static_dir", &self.static_dir)
            .field("memory", &self.memory)
            .finish()
    }
}
