use std::time::Duration;

use clap::Parser;

use termfolio_http::PostClient;
use termfolio_shell::{BlogFeed, DEFAULT_LOG_FILTER};

/// termfolio - browse the portfolio from a terminal
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the blog API
    #[arg(long, env = "TERMFOLIO_API_URL", default_value = "http://localhost:5001")]
    api_url: String,

    /// Do not fetch blog posts
    #[arg(long)]
    offline: bool,

    /// Give up on the post fetch after this many seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let args = Args::parse();

    let feed = if args.offline {
        None
    } else {
        match PostClient::with_timeout(&args.api_url, Duration::from_secs(args.timeout_secs)) {
            Ok(client) => Some(BlogFeed::spawn(client)),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = termfolio_shell::run(feed) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
