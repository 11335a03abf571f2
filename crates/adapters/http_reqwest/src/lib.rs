//! # irpanel-adapter-http-reqwest
//!
//! Native [`DeviceGateway`] over `reqwest`.
//!
//! Request targets (`temp`, `ir/aircon?...`) are resolved against a base URL
//! with standard relative-URL rules, then sent as plain GETs with default
//! headers. Every response, whatever its status, is handed back with its body;
//! only failures to get one become a [`TransportError`].

pub mod config;
pub mod error;

use std::future::Future;

use irpanel_app::ports::DeviceGateway;
use irpanel_domain::error::TransportError;
use irpanel_domain::response::DeviceResponse;
use url::Url;

pub use config::GatewayConfig;
pub use error::GatewayError;

/// [`DeviceGateway`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestGateway {
    /// Build a gateway with a default client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be
    /// built.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url = config.parse_base_url()?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(GatewayError::Client)?;
        Ok(Self::with_client(client, base_url))
    }

    /// Build a gateway around an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a target relative to the device root.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] if the target cannot be joined.
    pub fn resolve(&self, target: &str) -> Result<Url, GatewayError> {
        Ok(self.base_url.join(target)?)
    }

    #[tracing::instrument(skip(self))]
    async fn send(&self, target: &str) -> Result<DeviceResponse, GatewayError> {
        let url = self.resolve(target)?;
        tracing::debug!(%url, "sending request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(GatewayError::Request)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(GatewayError::Body)?;
        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(DeviceResponse { status, body })
    }
}

impl DeviceGateway for ReqwestGateway {
    fn get(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<DeviceResponse, TransportError>> {
        async move { self.send(target).await.map_err(TransportError::from) }
    }
}
