//! Client configuration parsed from environment variables.

use std::time::Duration;

use reqwest::Url;

use crate::favorites::FavoriteError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const SESSION_COOKIE_NAME: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Timeouts {
    pub request: Option<Duration>,
    pub connect: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub session: Option<String>,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), session: None, timeouts: Timeouts::default() }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url), ..Self::default() }
    }

    /// Replace the base URL after checking it is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteError::InvalidBaseUrl`] if the URL does not parse.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, FavoriteError> {
        validate_base_url(base_url)?;
        self.base_url = normalize_base_url(base_url);
        Ok(self)
    }

    /// Set the session cookie value. Blank values clear it.
    #[must_use]
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        let session = session.into();
        self.session = if session.trim().is_empty() { None } else { Some(session) };
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `BIOBUDDY_BASE_URL`: default `http://127.0.0.1:5000`
    /// - `BIOBUDDY_SESSION`: session cookie value sent with each toggle
    /// - `BIOBUDDY_REQUEST_TIMEOUT_SECS`: unset leaves the transport default
    /// - `BIOBUDDY_CONNECT_TIMEOUT_SECS`: unset leaves the transport default
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or a timeout is not an integer.
    pub fn from_env() -> Result<Self, FavoriteError> {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("BIOBUDDY_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }
        if let Ok(session) = std::env::var("BIOBUDDY_SESSION") {
            config = config.with_session(session);
        }
        config.timeouts = Timeouts {
            request: env_parse_secs("BIOBUDDY_REQUEST_TIMEOUT_SECS")?,
            connect: env_parse_secs("BIOBUDDY_CONNECT_TIMEOUT_SECS")?,
        };

        Ok(config)
    }
}

/// Reject anything that is not an absolute http(s) URL.
///
/// # Errors
///
/// Returns [`FavoriteError::InvalidBaseUrl`] if the URL does not parse, is not
/// http(s), or has no host.
pub fn validate_base_url(raw: &str) -> Result<(), FavoriteError> {
    let url = Url::parse(raw.trim()).map_err(|e| FavoriteError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FavoriteError::InvalidBaseUrl(format!("{raw}: scheme must be http or https")));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(FavoriteError::InvalidBaseUrl(format!("{raw}: missing host")));
    }
    Ok(())
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn env_parse_secs(key: &str) -> Result<Option<Duration>, FavoriteError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|secs| Some(Duration::from_secs(secs)))
        .map_err(|_| FavoriteError::ConfigParse(format!("{key} must be an integer, got {raw:?}")))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
