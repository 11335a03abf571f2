//! reqwest adapter error types.

use irpanel_domain::error::TransportError;

/// Errors specific to the reqwest gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The base URL or a request target could not be parsed.
    #[error("invalid device URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL is not HTTP(S).
    #[error("unsupported URL scheme `{0}`")]
    UnsupportedScheme(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("request failed")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read as text.
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),
}

impl From<GatewayError> for TransportError {
    fn from(err: GatewayError) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        TransportError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unsupported_scheme() {
        let err = GatewayError::UnsupportedScheme("ftp".to_string());
        assert_eq!(err.to_string(), "unsupported URL scheme `ftp`");
    }

    #[test]
    fn should_carry_source_chain_into_transport_error() {
        let parse = url::Url::parse("http://[::1").unwrap_err();
        let expected = format!("invalid device URL: {parse}");
        let err: TransportError = GatewayError::InvalidUrl(parse).into();
        assert_eq!(err.message, expected);
    }
}
