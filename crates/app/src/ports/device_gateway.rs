//! Device gateway port — the HTTP client talking to the device.

use std::future::Future;

use irpanel_domain::error::TransportError;
use irpanel_domain::response::DeviceResponse;

/// Sends GET requests to the device.
pub trait DeviceGateway {
    /// Issue a GET on `target`, a path (with optional query) relative to the
    /// device root, e.g. `temp` or `ir/aircon?power=on`.
    ///
    /// Any status code is a successful exchange; only a request that never
    /// produced a response is an error.
    fn get(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<DeviceResponse, TransportError>>;
}

impl<T: DeviceGateway> DeviceGateway for &T {
    fn get(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<DeviceResponse, TransportError>> {
        (**self).get(target)
    }
}
