//! One-shot fetch of the blog posts.
//!
//! The fetch runs on its own thread and hands its result back over a
//! channel. The shell polls the feed between events and grafts the posts
//! into the tree once they arrive.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use termfolio_http::{Error, PostClient};
use termfolio_posts::Post;

use crate::tree::Node;

/// Level a failed fetch is logged at. Kept below the shell's default log
/// filter so the failure never reaches the terminal.
pub const FETCH_FAILURE_LEVEL: log::Level = log::Level::Warn;

/// The outcome of the fetch, as delivered over the channel.
pub type FetchResult = Result<Vec<Post>, Error>;

/// Where the fetch stands.
#[derive(Debug)]
pub enum FeedStatus {
    Pending,
    Loaded(Vec<Post>),
    Failed(String),
}

/// The receiving end of a blog fetch.
#[derive(Debug)]
pub struct BlogFeed {
    rx: Receiver<FetchResult>,
}

impl BlogFeed {
    /// Start fetching on a background thread.
    pub fn spawn(client: PostClient) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            log::debug!("Fetching posts from {}", client.base_url());
            // The shell may already be gone; nothing to do then.
            let _ = tx.send(client.list_posts());
        });
        Self { rx }
    }

    pub fn from_receiver(rx: Receiver<FetchResult>) -> Self {
        Self { rx }
    }

    /// A feed whose result is already available.
    pub fn ready(result: FetchResult) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx }
    }

    /// Check for a result without blocking.
    pub fn poll(&self) -> FeedStatus {
        match self.rx.try_recv() {
            Ok(Ok(posts)) => FeedStatus::Loaded(posts),
            Ok(Err(e)) => FeedStatus::Failed(e.to_string()),
            Err(TryRecvError::Empty) => FeedStatus::Pending,
            Err(TryRecvError::Disconnected) => {
                FeedStatus::Failed("fetch ended without a result".to_string())
            }
        }
    }
}

/// The `blog` directory for `posts`: `post1` is the first post in the list.
pub fn blog_directory(posts: &[Post]) -> BTreeMap<String, Node> {
    posts
        .iter()
        .enumerate()
        .map(|(i, post)| (format!("post{}", i + 1), Node::file(post.content.clone())))
        .collect()
}
