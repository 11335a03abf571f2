//! Device gateway wrapping `gloo-net`.
//!
//! Targets are passed to `fetch` as-is, so they resolve against the page URL:
//! the page must be served by the device it controls.

use std::future::Future;

use gloo_net::http::Request;
use irpanel_app::ports::DeviceGateway;
use irpanel_domain::error::TransportError;
use irpanel_domain::response::DeviceResponse;

/// [`DeviceGateway`] using the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooGateway;

fn transport(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

impl DeviceGateway for GlooGateway {
    fn get(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<DeviceResponse, TransportError>> {
        let request = Request::get(target);
        async move {
            let response = request.send().await.map_err(transport)?;
            let status = response.status();
            let body = response.text().await.map_err(transport)?;
            Ok(DeviceResponse { status, body })
        }
    }
}
