//! Static front-end assets with single-page-application fallback.
//!
//! A request path that names a file under the static root gets that file.
//! A path naming a directory gets the directory's `index.html`. Everything
//! else gets the root `index.html`, leaving routing to the front-end.

use std::path::{Component, Path, PathBuf};

use http::StatusCode;
use percent_encoding::percent_decode_str;

use crate::error::Error;
use crate::types::ApiResponse;

const INDEX: &str = "index.html";

/// Serves files from a directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path to an existing file under the root.
    ///
    /// Returns `None` for paths that do not exist, are not valid UTF-8 once
    /// decoded, or try to leave the root.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let decoded = percent_decode_str(request_path).decode_utf8().ok()?;

        let mut file = self.root.clone();
        for segment in decoded.split('/').filter(|s| !s.is_empty()) {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => file.push(part),
                _ => return None,
            }
        }

        if file.is_dir() {
            file.push(INDEX);
        }
        file.is_file().then_some(file)
    }

    /// The entry document served for unmatched paths.
    pub fn fallback(&self) -> Option<PathBuf> {
        let index = self.root.join(INDEX);
        index.is_file().then_some(index)
    }

    /// Build the response for a `GET`/`HEAD` of `request_path`.
    pub fn serve(&self, request_path: &str) -> Result<ApiResponse, Error> {
        let file = match self.resolve(request_path).or_else(|| self.fallback()) {
            Some(file) => file,
            None => return Ok(ApiResponse::text(StatusCode::NOT_FOUND, "Not Found")),
        };

        log::debug!("Serving {}...", file.display());
        let bytes = std::fs::read(&file)?;
        Ok(ApiResponse::file(bytes, content_type(&file)))
    }
}

/// Content type for a file, by extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
