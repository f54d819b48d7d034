use http::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use termfolio_posts::Post;

use crate::error::Error;

/// Response body of `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedPost {
    pub id: i64,
}

/// Response body of `GET /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostList {
    pub posts: Vec<Post>,
}

/// Body of every JSON error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// A request as seen by the router, detached from the listener.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,

    /// Request target as received: path plus optional query string.
    pub url: String,

    /// Raw `Authorization` header value, if any.
    pub authorization: Option<String>,

    pub body: Vec<u8>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            authorization: None,
            body: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Path component of the request target, without the query string.
    pub fn path(&self) -> &str {
        match self.url.find(|c: char| c == '?' || c == '#') {
            Some(end) => &self.url[..end],
            None => &self.url,
        }
    }
}

/// A response produced by the router.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// A JSON response.
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self, Error> {
        Ok(Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "application/json; charset=utf-8".to_string(),
            )],
            body: serde_json::to_vec(value)?,
        })
    }

    /// A JSON `{"error": message}` response.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        let body = serde_json::json!({ "error": message.into() });
        Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "application/json; charset=utf-8".to_string(),
            )],
            body: body.to_string().into_bytes(),
        }
    }

    /// A plain-text response.
    pub fn text(status: StatusCode, text: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
            body: text.into().into_bytes(),
        }
    }

    /// A file body with the given content type.
    pub fn file(bytes: Vec<u8>, content_type: &str) -> Self {
        Self {
            status: StatusCode::OK,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body: bytes,
        }
    }

    /// A 401 challenge asking for Basic credentials.
    pub fn unauthorized(realm: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            headers: vec![(
                "WWW-Authenticate".to_string(),
                format!("Basic realm=\"{}\"", realm),
            )],
            body: Vec::new(),
        }
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body as JSON.
    pub fn body_json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_strips_query() {
        let req = ApiRequest::get("/api/posts?limit=1");
        assert_eq!(req.path(), "/api/posts");

        let req = ApiRequest::get("/about#top");
        assert_eq!(req.path(), "/about");
    }

    #[test]
    fn error_body_shape() {
        let resp = ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        let body: ErrorBody = resp.body_json().unwrap();
        assert_eq!(body.error, "boom");
        assert_eq!(
            resp.header("content-type"),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn unauthorized_has_challenge() {
        let resp = ApiResponse::unauthorized("termfolio");
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.header("WWW-Authenticate"),
            Some("Basic realm=\"termfolio\"")
        );
    }

    #[test]
    fn json_response_roundtrips_created_post() {
        let resp = ApiResponse::json(StatusCode::OK, &CreatedPost { id: 3 }).unwrap();
        assert_eq!(resp.body_json::<CreatedPost>().unwrap(), CreatedPost { id: 3 });
    }
}
