//! Request routing.
//!
//! The router is independent of the listener: it takes an [`ApiRequest`] and
//! produces an [`ApiResponse`], so every route can be exercised without a
//! socket.

use http::{Method, StatusCode};

use termfolio_posts::{NewPost, PostStore};

use crate::auth::{BasicAuth, REALM};
use crate::error::Error;
use crate::statics::StaticFiles;
use crate::types::{ApiRequest, ApiResponse, CreatedPost, PostList};

/// Path of the posts collection.
pub const POSTS_PATH: &str = "/api/posts";

/// Routes requests to the post store and the static site.
pub struct Router<S> {
    store: S,
    auth: BasicAuth,
    statics: StaticFiles,
}

impl<S: PostStore> Router<S> {
    pub fn new(store: S, auth: BasicAuth, statics: StaticFiles) -> Self {
        Self {
            store,
            auth,
            statics,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one request.
    ///
    /// Never fails: anything a route does not turn into a response itself is
    /// logged and answered with a generic 500.
    pub fn handle(&mut self, request: &ApiRequest) -> ApiResponse {
        match self.dispatch(request) {
            Ok(response) => response,
            Err(e) => {
                log::error!("{} {} failed: {}", request.method, request.path(), e);
                ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }

    fn dispatch(&mut self, request: &ApiRequest) -> Result<ApiResponse, Error> {
        let path = request.path();

        match (&request.method, path) {
            (&Method::POST, POSTS_PATH) => self.create_post(request),
            (&Method::GET, POSTS_PATH) => self.list_posts(),
            (&Method::GET, _) | (&Method::HEAD, _) => self.statics.serve(path),
            (method, _) => Ok(ApiResponse::text(
                StatusCode::NOT_FOUND,
                format!("Cannot {} {}", method, path),
            )),
        }
    }

    fn create_post(&mut self, request: &ApiRequest) -> Result<ApiResponse, Error> {
        if !self.auth.verify(request.authorization.as_deref()) {
            log::info!("Rejected unauthenticated write to {}", POSTS_PATH);
            return Ok(ApiResponse::unauthorized(REALM));
        }

        let post: NewPost = match serde_json::from_slice(&request.body) {
            Ok(post) => post,
            Err(e) => {
                return Ok(ApiResponse::error(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid post body: {}", e),
                ))
            }
        };

        match self.store.create(post) {
            Ok(id) => ApiResponse::json(StatusCode::OK, &CreatedPost { id }),
            Err(e) => {
                log::error!("Failed to create post: {}", e);
                Ok(ApiResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.to_string(),
                ))
            }
        }
    }

    fn list_posts(&mut self) -> Result<ApiResponse, Error> {
        match self.store.list() {
            Ok(posts) => ApiResponse::json(StatusCode::OK, &PostList { posts }),
            Err(e) => {
                log::error!("Failed to list posts: {}", e);
                Ok(ApiResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.to_string(),
                ))
            }
        }
    }
}
