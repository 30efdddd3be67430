//! # Flash Messages
//!
//! One-shot feedback that survives exactly one redirect.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /warehouse/new                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  303 See Other, Location: /                                             │
//! │  Set-Cookie: varasto_flash=success:Warehouse%20%27Main%27%20created...  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET / (browser sends the cookie back)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Page shows the message, response clears the cookie (Max-Age=0)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};

/// Name of the cookie carrying the pending message.
pub const FLASH_COOKIE: &str = "varasto_flash";

/// Cookie attributes shared by setting and clearing.
const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

/// Severity of a flash message; also used as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashLevel::Success => write!(f, "success"),
            FlashLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for FlashLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(FlashLevel::Success),
            "error" => Ok(FlashLevel::Error),
            _ => Err(()),
        }
    }
}

/// A message to show on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    /// Creates a success message.
    pub fn success(message: impl Into<String>) -> Self {
        Flash {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Flash {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Encodes the message as a `Set-Cookie` header value.
    pub fn to_cookie(&self) -> String {
        format!(
            "{FLASH_COOKIE}={}:{}; {COOKIE_ATTRIBUTES}",
            self.level,
            urlencoding::encode(&self.message)
        )
    }

    /// Reads a pending message from the request's `Cookie` headers.
    ///
    /// Malformed cookies are ignored.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().strip_prefix(FLASH_COOKIE)?.strip_prefix('='))
            .find_map(Self::decode)
    }

    fn decode(raw: &str) -> Option<Self> {
        let (level, message) = raw.split_once(':')?;
        let level = level.parse().ok()?;
        let message = urlencoding::decode(message).ok()?.into_owned();
        Some(Flash { level, message })
    }
}

/// `Set-Cookie` value that removes the flash cookie.
pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Max-Age=0; {COOKIE_ATTRIBUTES}")
}

/// Redirects (303 See Other) and leaves a message for the next page.
pub fn redirect(location: &str, flash: Flash) -> Response {
    ([(SET_COOKIE, flash.to_cookie())], Redirect::to(location)).into_response()
}
