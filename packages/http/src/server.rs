//! The listening server.
//!
//! Requests are accepted by `tiny_http` and handled one at a time on the
//! serving thread, which owns the post store.

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;

use http::StatusCode;

use termfolio_posts::PostStore;

use crate::config::ServerConfig;
use crate::error::Error;
use crate::routes::Router;
use crate::types::{ApiRequest, ApiResponse};

/// A bound server, ready to serve.
pub struct Server<S> {
    http: Arc<tiny_http::Server>,
    router: Router<S>,
}

impl<S: PostStore> Server<S> {
    /// Bind the configured address.
    pub fn bind(config: &ServerConfig, store: S) -> Result<Self, Error> {
        let addr = config.addr();
        let http = tiny_http::Server::http(&addr).map_err(|e| Error::Bind {
            addr: addr.clone(),
            message: e.to_string(),
        })?;

        let router = Router::new(store, config.auth(), config.statics());
        Ok(Self {
            http: Arc::new(http),
            router,
        })
    }

    /// The address actually bound (useful with port 0).
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    /// Serve requests until the listener is shut down.
    pub fn serve(mut self) {
        let http = Arc::clone(&self.http);
        for request in http.incoming_requests() {
            self.respond(request);
        }
        log::info!("Server stopped");
    }

    fn respond(&mut self, mut request: tiny_http::Request) {
        let response = match read_request(&mut request) {
            Ok(api_request) => {
                let response = self.router.handle(&api_request);
                log::info!(
                    "{} {} -> {}",
                    api_request.method,
                    api_request.path(),
                    response.status.as_u16()
                );
                response
            }
            Err(e) => {
                log::warn!("Unreadable request {} {}: {}", request.method(), request.url(), e);
                ApiResponse::error(StatusCode::BAD_REQUEST, e.to_string())
            }
        };

        if let Err(e) = request.respond(into_tiny(response)) {
            log::warn!("Failed to send response: {}", e);
        }
    }
}

impl<S: PostStore + Send + 'static> Server<S> {
    /// Serve on a background thread.
    pub fn spawn(self) -> ServerHandle {
        let http = Arc::clone(&self.http);
        let addr = self.local_addr();
        let thread = std::thread::spawn(move || self.serve());
        ServerHandle {
            http,
            addr,
            thread: Some(thread),
        }
    }
}

/// A server running on a background thread. Dropping it stops the server.
pub struct ServerHandle {
    http: Arc<tiny_http::Server>,
    addr: Option<SocketAddr>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    /// `http://host:port` of the running server.
    pub fn base_url(&self) -> Option<String> {
        self.addr.map(|addr| format!("http://{}", addr))
    }

    /// Stop accepting requests and wait for the serving thread.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.http.unblock();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn read_request(request: &mut tiny_http::Request) -> Result<ApiRequest, Error> {
    let method_name = request.method().as_str().to_string();
    let method = http::Method::from_bytes(method_name.as_bytes())
        .map_err(|_| Error::InvalidMethod { method: method_name })?;

    let authorization = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Authorization"))
        .map(|h| h.value.as_str().to_string());

    let mut body = Vec::new();
    request.as_reader().read_to_end(&mut body)?;

    Ok(ApiRequest {
        method,
        url: request.url().to_string(),
        authorization,
        body,
    })
}

fn into_tiny(response: ApiResponse) -> tiny_http::Response<Cursor<Vec<u8>>> {
    let mut out =
        tiny_http::Response::from_data(response.body).with_status_code(response.status.as_u16());
    for (name, value) in &response.headers {
        match tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => out.add_header(header),
            Err(()) => log::warn!("Dropping invalid header {}", name),
        }
    }
    out
}
