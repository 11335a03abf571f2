//! Error types shared across the workspace.

/// A GET that never produced an HTTP response.
///
/// Covers refused connections, DNS failures, CORS rejections in the browser
/// and bodies that could not be read. The message is kept for logs only; the
/// result area always shows [`TRANSPORT_ERROR_TEXT`](crate::result_view::TRANSPORT_ERROR_TEXT).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    /// Build a transport error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
