//! # termfolio-shell
//!
//! A small shell over a read-only tree of portfolio content.
//!
//! The user moves around with `cd`, lists entries with `ls` and prints
//! files with `cat`. Blog posts are fetched once from the API at startup
//! and appear under `/blog` when they arrive.
//!
//! ## Usage
//!
//! ```bash
//! termfolio --api-url http://localhost:5001
//!
//! # Inside the shell:
//! /$ ls
//! /$ cd about_me
//! /about_me$ cat interests.txt
//! ```

pub mod blog;
pub mod commands;
pub mod content;
pub mod core;
pub mod host;
pub mod io;
pub mod keys;
pub mod session;
pub mod tree;

pub use blog::BlogFeed;
pub use core::ShellCore;
pub use io::{ExitReason, IoError, IoHost};
pub use session::Session;
pub use tree::{Node, Tree};

use host::TerminalHost;

/// Log filter used when `RUST_LOG` is unset.
///
/// Log lines go to stderr, which is the terminal the shell draws on, so only
/// errors are let through by default.
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Run the shell on the current terminal.
pub fn run(feed: Option<BlogFeed>) -> Result<ExitReason, IoError> {
    let mut host = TerminalHost::new()?;
    let mut core = ShellCore::new();
    if let Some(feed) = feed {
        core = core.with_feed(feed);
    }
    core.run(&mut host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_hides_fetch_failures() {
        let filter: log::LevelFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert!(blog::FETCH_FAILURE_LEVEL > filter);
    }

    #[test]
    fn default_filter_keeps_errors() {
        let filter: log::LevelFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert!(log::Level::Error <= filter);
    }
}
