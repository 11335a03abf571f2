//! Outcome of a GET that reached the device.

/// The only status the panel treats as success.
pub const HTTP_OK: u16 = 200;

/// A completed HTTP exchange: whatever the status, the body was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResponse {
    pub status: u16,
    pub body: String,
}

impl DeviceResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is exactly `200`.
    ///
    /// Other 2xx codes count as errors, like every non-200 status.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == HTTP_OK
    }
}
