use std::path::PathBuf;

use clap::Parser;

use termfolio_http::config::{DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use termfolio_http::{Error, Server, ServerConfig};
use termfolio_posts::{InMemoryPostStore, SqlitePostStore};

/// termfolio-server - blog API and static site
#[derive(Parser, Debug)]
#[command(name = "termfolio-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Password for the admin account (writes are refused without one)
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,

    /// SQLite database file
    #[arg(long, env = "TERMFOLIO_DB", default_value = DEFAULT_DATABASE)]
    database: PathBuf,

    /// Directory with the built front-end
    #[arg(long, env = "TERMFOLIO_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    /// Keep posts in memory instead of the database
    #[arg(long)]
    memory: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            admin_password: args.admin_password,
            database: args.database,
            static_dir: args.static_dir,
            memory: args.memory,
        }
    }
}

fn run(config: ServerConfig) -> Result<(), Error> {
    if !config.auth().is_configured() {
        log::warn!("ADMIN_PASSWORD is not set; all writes will be refused");
    }

    if config.memory {
        let server = Server::bind(&config, InMemoryPostStore::new())?;
        log::info!("Server is running on {} (in-memory posts)", config.addr());
        server.serve();
    } else {
        let store = SqlitePostStore::open(&config.database)?;
        let server = Server::bind(&config, store)?;
        log::info!(
            "Server is running on {} (database {})",
            config.addr(),
            config.database.display()
        );
        server.serve();
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from(Args::parse());

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
