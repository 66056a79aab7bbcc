//! Favorite toggle types — wire payloads and errors.
//!
//! The server answers `POST /api/toggle_favorite` with
//! `{"success": true, "is_active": <bool>}`. Only `is_active` drives the
//! button, so it is the one required field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by favorite toggle operations.
#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    /// The server answered outside 2xx; the user must log in.
    #[error("authentication required: status {status}")]
    AuthRequired { status: u16 },

    /// Sending the request or reading the response body failed.
    #[error("toggle request failed: {0}")]
    Transport(String),

    /// The success body could not be deserialized.
    #[error("toggle response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The configured base URL is unusable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl FavoriteError {
    #[must_use]
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired { .. })
    }

    /// Failures that are logged and swallowed rather than shown to the user.
    #[must_use]
    pub fn is_transport_or_parse(&self) -> bool {
        !self.is_auth_required()
    }
}

// =============================================================================
// PAPER ID
// =============================================================================

/// Opaque paper identifier, forwarded verbatim to the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaperId {
    Int(i64),
    Text(String),
}

impl From<i64> for PaperId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for PaperId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PaperId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl FromStr for PaperId {
    type Err = std::convert::Infallible;

    /// Text that is the canonical spelling of an `i64` becomes an integer id.
    /// Anything else (`"007"`, `"+3"`, `"p1"`) is forwarded as the same string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Ok(Self::Int(n)),
            _ => Ok(Self::Text(s.to_owned())),
        }
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ToggleRequest<'a> {
    pub paper_id: &'a PaperId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleResponse {
    pub is_active: bool,
    pub success: Option<bool>,
}

/// Parse a 2xx toggle body. A missing or non-boolean `is_active` is an error.
///
/// # Errors
///
/// Returns [`FavoriteError::Parse`] if the body is not a valid toggle response.
pub fn parse_toggle_response(body: &str) -> Result<ToggleResponse, FavoriteError> {
    serde_json::from_str(body).map_err(|e| FavoriteError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
