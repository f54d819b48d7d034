//! HTTP Basic authentication for the write path.
//!
//! Only one account exists: [`ADMIN_USERNAME`] with a password taken from
//! configuration. With no password configured every write is rejected.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;

/// The only username accepted on the write path.
pub const ADMIN_USERNAME: &str = "admin";

/// Realm sent in the `WWW-Authenticate` challenge.
pub const REALM: &str = "termfolio";

/// A username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials for the admin account.
    pub fn admin(password: impl Into<String>) -> Self {
        Self::new(ADMIN_USERNAME, password)
    }

    /// Encode as an `Authorization` header value.
    pub fn header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Decode an `Authorization: Basic ...` header value.
    ///
    /// The scheme is matched case-insensitively. The password is everything
    /// after the first `:`, so it may itself contain colons.
    pub fn parse_header(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(token.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self::new(username, password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Verifies `Authorization` headers against the configured admin account.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    expected: Option<Credentials>,
}

impl BasicAuth {
    /// Gate for the admin account. `None` rejects everything.
    pub fn admin(password: Option<String>) -> Self {
        Self {
            expected: password.map(Credentials::admin),
        }
    }

    /// Whether any credentials can pass this gate.
    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Check a raw `Authorization` header value.
    pub fn verify(&self, header: Option<&str>) -> bool {
        let Some(expected) = &self.expected else {
            return false;
        };
        let Some(given) = header.and_then(Credentials::parse_header) else {
            return false;
        };

        let user_ok = given
            .username
            .as_bytes()
            .ct_eq(expected.username.as_bytes());
        let pass_ok = given
            .password
            .as_bytes()
            .ct_eq(expected.password.as_bytes());
        (user_ok & pass_ok).into()
    }
}
