use std::time::Duration;

use reqwest::blocking::{Client, Response};
use url::Url;

use termfolio_posts::{NewPost, Post};

use crate::auth::Credentials;
use crate::error::Error;
use crate::routes::POSTS_PATH;
use crate::types::{CreatedPost, ErrorBody, PostList};

/// A blocking client for the blog API.
///
/// # Example
///
/// ```ignore
/// use termfolio_http::{Credentials, PostClient};
/// use termfolio_posts::NewPost;
///
/// let client = PostClient::new("http://localhost:5001")?;
///
/// let id = client.create_post(&NewPost::new("Hello", "..."), &Credentials::admin("pw"))?;
/// let posts = client.list_posts()?;
/// ```
pub struct PostClient {
    client: Client,
    base_url: Url,
}

impl PostClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn posts_url(&self) -> Result<Url, Error> {
        self.base_url.join(POSTS_PATH).map_err(Error::from)
    }

    /// Fetch every post, newest first.
    pub fn list_posts(&self) -> Result<Vec<Post>, Error> {
        let response = self.client.get(self.posts_url()?).send()?;
        let list: PostList = check_status(response)?.json()?;
        Ok(list.posts)
    }

    /// Create a post with the admin credentials and return its id.
    pub fn create_post(&self, post: &NewPost, credentials: &Credentials) -> Result<i64, Error> {
        let response = self
            .client
            .post(self.posts_url()?)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .json(post)
            .send()?;
        let created: CreatedPost = check_status(response)?.json()?;
        Ok(created.id)
    }
}

/// Turn a non-2xx response into `Error::Status`, preferring the server's
/// `{"error": ...}` message over the raw body.
fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if !text.is_empty() => text,
        Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
    };

    Err(Error::Status {
        status: status.as_u16(),
        message,
    })
}
