//! Device connection configuration.

use serde::Deserialize;
use url::Url;

use crate::error::GatewayError;

/// Where the device lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// URL every request target is resolved against, the way a browser
    /// resolves relative links against the page URL. Keep the trailing `/`
    /// when the device is served under a sub-path.
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://myesp8266.local:8080/".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Parse [`base_url`](Self::base_url) and check it is an HTTP(S) URL.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] when the URL does not parse and
    /// [`GatewayError::UnsupportedScheme`] for anything but `http`/`https`.
    pub fn parse_base_url(&self) -> Result<Url, GatewayError> {
        let url = Url::parse(&self.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(GatewayError::UnsupportedScheme(other.to_string())),
        }
    }
}
