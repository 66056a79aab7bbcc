//! Favorites API client.
//!
//! Thin HTTP wrapper for `POST /api/toggle_favorite`. One request per call,
//! no retry. Pure parsing lives in `types::parse_toggle_response`.

use async_trait::async_trait;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use tracing::debug;

use super::types::{FavoriteError, PaperId, ToggleRequest, ToggleResponse, parse_toggle_response};
use crate::config::{ClientConfig, SESSION_COOKIE_NAME, validate_base_url};

pub const TOGGLE_FAVORITE_PATH: &str = "/api/toggle_favorite";

/// Seam between the toggle handler and the network.
#[async_trait]
pub trait ToggleTransport: Send + Sync {
    /// Flip the favorite flag for `paper_id` and report the server's new state.
    async fn toggle(&self, paper_id: &PaperId) -> Result<ToggleResponse, FavoriteError>;
}

#[must_use]
pub fn toggle_endpoint(base_url: &str) -> String {
    format!("{}{TOGGLE_FAVORITE_PATH}", base_url.trim_end_matches('/'))
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct FavoritesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FavoritesClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unusable, the session value is not
    /// a valid header, or the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, FavoriteError> {
        validate_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(session) = &config.session {
            let cookie = HeaderValue::from_str(&format!("{SESSION_COOKIE_NAME}={session}"))
                .map_err(|e| FavoriteError::ConfigParse(format!("invalid session cookie: {e}")))?;
            headers.insert(COOKIE, cookie);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeouts.request {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.timeouts.connect {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FavoriteError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, endpoint: toggle_endpoint(&config.base_url) })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ToggleTransport for FavoritesClient {
    async fn toggle(&self, paper_id: &PaperId) -> Result<ToggleResponse, FavoriteError> {
        let body = ToggleRequest { paper_id };

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| FavoriteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%paper_id, status = status.as_u16(), "toggle rejected");
            return Err(FavoriteError::AuthRequired { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FavoriteError::Transport(e.to_string()))?;
        let parsed = parse_toggle_response(&text)?;
        debug!(%paper_id, is_active = parsed.is_active, "favorite toggled");
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
