//! Configuration types for the Axum HTTP server.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// The configured origin is not a value CORS can echo in a header.
#[derive(Debug, thiserror::Error)]
#[error("allowed_origin {0:?} is not a valid origin")]
pub struct InvalidOrigin(pub String);

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use catalog_axum::config::AxumConfig;
///
/// // Use default configuration
/// let config = AxumConfig::default();
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     allowed_origin: Some("http://localhost:5173".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// The single front-end origin granted cross-origin access.
    /// `None` grants no cross-origin access at all.
    #[serde(default)]
    pub allowed_origin: Option<String>,
}

impl AxumConfig {
    /// Parse the configured front-end origin, if any.
    ///
    /// A malformed value is a configuration error reported to the caller,
    /// not a panic at router construction.
    pub fn allowed_origin_value(&self) -> Result<Option<HeaderValue>, InvalidOrigin> {
        self.allowed_origin
            .as_ref()
            .map(|origin| {
                origin
                    .parse()
                    .map_err(|_| InvalidOrigin(origin.clone()))
            })
            .transpose()
    }
}

fn default_bind_address() -> SocketAddr {
    "0.0.0.0:4000".parse().unwrap()
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            allowed_origin: None,
        }
    }
}
