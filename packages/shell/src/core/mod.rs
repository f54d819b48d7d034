//! Platform-independent shell core.
//!
//! This module contains the main event loop, which interacts only through
//! the `IoHost` trait. Keystrokes are folded into the session's input
//! buffer; submitted lines are dispatched to the command handlers.

use nu_ansi_term::Color;

use crate::blog::{self, BlogFeed, FeedStatus, FETCH_FAILURE_LEVEL};
use crate::commands::{self, CommandResult};
use crate::content;
use crate::io::{ExitReason, IoError, IoHost, Keystroke, Output, PromptConfig, Signal};
use crate::keys::{self, KeyOutcome};
use crate::session::Session;
use crate::tree::Tree;

/// The platform-independent shell core.
pub struct ShellCore {
    tree: Tree,
    session: Session,
    feed: Option<BlogFeed>,
}

impl ShellCore {
    /// A shell over the site content, with no posts.
    pub fn new() -> Self {
        Self::with_tree(content::site_tree())
    }

    pub fn with_tree(tree: Tree) -> Self {
        Self {
            tree,
            session: Session::new(),
            feed: None,
        }
    }

    /// Graft the feed's posts into the tree once they arrive.
    pub fn with_feed(mut self, feed: BlogFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the shell loop until the host closes.
    pub fn run(&mut self, io: &mut impl IoHost) -> Result<ExitReason, IoError> {
        self.start(io)?;

        loop {
            self.poll_feed();

            io.wait_for_event()?;

            if let Some(signal) = io.read_signal()? {
                match signal {
                    Signal::Resize(size) => io.fit_viewport(size)?,
                    Signal::Close => {
                        io.close()?;
                        return Ok(ExitReason::Closed);
                    }
                }
            }

            if let Some(key) = io.read_key()? {
                // Posts that landed while waiting are visible to this key.
                self.poll_feed();
                self.handle_key(&key, io)?;
            }

            io.flush()?;
        }
    }

    /// Write the banner and the first prompt.
    pub fn start(&self, io: &mut impl IoHost) -> Result<(), IoError> {
        io.write_output(Output::banner(banner()))?;
        self.update_prompt(io)?;
        io.flush()
    }

    /// Apply one keystroke, running the line if it was submitted.
    pub fn handle_key(&mut self, key: &Keystroke, io: &mut impl IoHost) -> Result<(), IoError> {
        match keys::feed(&mut self.session, key) {
            KeyOutcome::Submit(line) => {
                self.run_line(&line, io)?;
                self.update_prompt(io)
            }
            KeyOutcome::Echo(text) => io.write_output(Output::echo(text)),
            KeyOutcome::Ignored => Ok(()),
        }
    }

    /// Apply the fetch result if it has arrived.
    ///
    /// Returns `true` once the feed is settled, either way.
    pub fn poll_feed(&mut self) -> bool {
        let Some(feed) = &self.feed else {
            return true;
        };

        match feed.poll() {
            FeedStatus::Pending => return false,
            FeedStatus::Loaded(posts) => {
                log::debug!("Loaded {} blog posts", posts.len());
                self.tree.replace_blog(blog::blog_directory(&posts));
            }
            FeedStatus::Failed(message) => {
                log::log!(FETCH_FAILURE_LEVEL, "Failed to fetch blog posts: {}", message);
            }
        }
        self.feed = None;
        true
    }

    fn run_line(&mut self, line: &str, io: &mut impl IoHost) -> Result<(), IoError> {
        match commands::execute(line, &mut self.session, &self.tree) {
            CommandResult::Output(text) => io.write_output(Output::normal(framed(&text))),
            CommandResult::Diagnostic(text) => io.write_output(Output::error(framed(&text))),
            CommandResult::Clear => io.clear(),
            CommandResult::Silent => Ok(()),
        }
    }

    fn update_prompt(&self, io: &mut impl IoHost) -> Result<(), IoError> {
        io.write_prompt(PromptConfig {
            current_path: self.session.display_path(),
        })
    }
}

impl Default for ShellCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Put command output on its own lines below the input.
fn framed(text: &str) -> String {
    format!("\r\n{}\r\n", text)
}

fn banner() -> String {
    format!(
        "{}\r\n{}\r\n{}\r\n",
        Color::Magenta.bold().paint(content::SITE_TITLE),
        "Type 'help' to see available commands.",
        "NOTE: I did not distinguish if something is a file or a directory. So experiment and see what works!",
    )
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use chrono::{TimeZone, Utc};
    use termfolio_http::Error;
    use termfolio_posts::Post;

    use super::*;
    use crate::io::{OutputStyle, TestHost, ViewportSize};
    use crate::keys::{Modifiers, ERASE};

    fn post(id: i64, content: &str) -> Post {
        Post {
            id,
            title: format!("Post {}", id),
            content: content.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, id as u32, 12, 0, 0).unwrap(),
        }
    }

    fn run_lines(core: &mut ShellCore, lines: &[&str]) -> TestHost {
        let mut host = TestHost::new();
        host.queue_lines(lines.iter().copied());
        core.run(&mut host).unwrap();
        host
    }

    #[test]
    fn banner_and_root_prompt_on_start() {
        let mut core = ShellCore::new();
        let host = run_lines(&mut core, &[]);

        let banner = host.output_with_style(OutputStyle::Banner);
        assert_eq!(banner.len(), 1);
        assert!(banner[0].starts_with("\x1b[1;35mShreyaas' Website\x1b[0m\r\n"));
        assert!(banner[0].contains("Type 'help' to see available commands."));
        assert!(banner[0].contains("NOTE: I did not distinguish"));

        assert_eq!(host.prompts().len(), 1);
        assert_eq!(host.prompts()[0].render(), "\r\n/$ ");
    }

    #[test]
    fn close_returns_closed_and_releases_host() {
        let mut core = ShellCore::new();
        let mut host = TestHost::new();
        host.queue_signal(Signal::Close);
        host.queue_line("ls");

        assert_eq!(core.run(&mut host).unwrap(), ExitReason::Closed);
        assert!(host.is_closed());
        assert!(host.has_pending_events());
    }

    #[test]
    fn resize_fits_viewport() {
        let mut core = ShellCore::new();
        let mut host = TestHost::new();
        host.queue_signal(Signal::Resize(ViewportSize { cols: 100, rows: 30 }));
        core.run(&mut host).unwrap();
        assert_eq!(host.viewport(), Some(ViewportSize { cols: 100, rows: 30 }));
    }

    #[test]
    fn typed_keys_are_echoed() {
        let mut core = ShellCore::new();
        let mut host = TestHost::new();
        host.queue_key(Keystroke::text("l"));
        host.queue_key(Keystroke::text("x"));
        host.queue_key(Keystroke::backspace());
        core.run(&mut host).unwrap();

        assert_eq!(host.output_with_style(OutputStyle::Echo), vec!["l", "x", ERASE]);
        assert_eq!(core.session().input_buffer(), "l");
    }

    #[test]
    fn modified_keys_write_nothing() {
        let mut core = ShellCore::new();
        let mut host = TestHost::new();
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        host.queue_key(Keystroke::text("l").with_modifiers(ctrl));
        host.queue_key(Keystroke::backspace());
        core.run(&mut host).unwrap();

        assert!(host.output_with_style(OutputStyle::Echo).is_empty());
        assert_eq!(core.session().input_buffer(), "");
    }

    #[test]
    fn command_output_is_framed() {
        let mut core = ShellCore::new();
        let host = run_lines(&mut core, &["ls"]);
        assert_eq!(
            host.output_with_style(OutputStyle::Normal),
            vec!["\r\nabout_me\r\nprojects.txt\r\n"]
        );
    }

    #[test]
    fn diagnostics_are_framed_errors() {
        let mut core = ShellCore::new();
        let host = run_lines(&mut core, &["cd .."]);
        assert_eq!(host.errors(), vec!["\r\nAlready at root directory!\r\n"]);
    }

    #[test]
    fn prompt_follows_the_path() {
        let mut core = ShellCore::new();
        let host = run_lines(&mut core, &["cd about_me", "cd ..", "cd nope"]);
        let paths: Vec<&str> = host
            .prompts()
            .iter()
            .map(|p| p.current_path.as_str())
            .collect();
        assert_eq!(paths, vec!["/", "/about_me", "/", "/"]);
    }

    #[test]
    fn cat_in_about_me_prints_configured_text() {
        let mut core = ShellCore::new();
        let host = run_lines(&mut core, &["cd about_me", "cat links.txt"]);
        let expected = content::ENTRIES
            .iter()
            .find(|(path, _)| *path == "about_me/links.txt")
            .map(|(_, text)| *text)
            .unwrap();
        assert_eq!(
            host.output_with_style(OutputStyle::Normal),
            vec![format!("\r\n{}\r\n", expected)]
        );
    }

    #[test]
    fn clear_keeps_path_and_prompts_again() {
        let mut core = ShellCore::new();
        let host = run_lines(&mut core, &["cd about_me", "ls", "clear"]);

        assert_eq!(host.clear_count(), 1);
        assert!(host
            .visible_output()
            .iter()
            .all(|o| o.style == OutputStyle::Echo));
        assert_eq!(host.last_prompt().unwrap().current_path, "/about_me");
        assert_eq!(core.session().display_path(), "/about_me");
    }

    #[test]
    fn unknown_command_reports_line() {
        let mut core = ShellCore::new();
        let host = run_lines(&mut core, &["foo bar"]);
        assert_eq!(host.errors(), vec!["\r\nCommand not found: foo bar\r\n"]);
    }

    #[test]
    fn loaded_posts_appear_under_blog() {
        let feed = BlogFeed::ready(Ok(vec![post(2, "second"), post(1, "first")]));
        let mut core = ShellCore::new().with_feed(feed);
        let host = run_lines(&mut core, &["ls", "cd blog", "ls", "cat post1"]);

        let normal = host.output_with_style(OutputStyle::Normal);
        assert_eq!(
            normal,
            vec![
                "\r\nabout_me\r\nblog\r\nprojects.txt\r\n",
                "\r\npost1\r\npost2\r\n",
                "\r\nsecond\r\n",
            ]
        );
    }

    #[test]
    fn blog_is_absent_until_posts_arrive() {
        let (tx, rx) = mpsc::channel();
        let mut core = ShellCore::new().with_feed(BlogFeed::from_receiver(rx));
        let mut host = TestHost::new();

        assert!(!core.poll_feed());
        core.handle_key(&Keystroke::enter(), &mut host).unwrap();
        for key in Keystroke::typed("cd blog") {
            core.handle_key(&key, &mut host).unwrap();
        }
        assert_eq!(
            host.errors().last().copied(),
            Some("\r\nDirectory not found or not a directory: blog\r\n")
        );

        tx.send(Ok(vec![post(1, "hello")])).unwrap();
        assert!(core.poll_feed());
        for key in Keystroke::typed("cd blog") {
            core.handle_key(&key, &mut host).unwrap();
        }
        assert_eq!(core.session().display_path(), "/blog");
    }

    #[test]
    fn failed_fetch_leaves_tree_and_terminal_alone() {
        let feed = BlogFeed::ready(Err(Error::Status {
            status: 500,
            message: "no such table: posts".to_string(),
        }));
        let mut core = ShellCore::new().with_feed(feed);
        let host = run_lines(&mut core, &[]);

        assert!(core.tree().blog().is_none());
        assert_eq!(core.tree(), &content::site_tree());
        assert!(host.errors().is_empty());
        assert_eq!(host.output().len(), 1);
    }

    #[test]
    fn empty_post_list_gives_empty_blog() {
        let mut core = ShellCore::new().with_feed(BlogFeed::ready(Ok(Vec::new())));
        let host = run_lines(&mut core, &["cd blog", "ls"]);
        assert!(host.errors().is_empty());
        assert_eq!(host.output_with_style(OutputStyle::Normal), vec!["\r\n\r\n"]);
    }
}
