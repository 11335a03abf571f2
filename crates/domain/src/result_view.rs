//! What a result area shows after an action completes.

use crate::error::TransportError;
use crate::response::DeviceResponse;

/// Literal text rendered when the request never got a response.
pub const TRANSPORT_ERROR_TEXT: &str = "error";

/// Colour of a result area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Default text colour.
    #[default]
    Normal,
    /// Red.
    Error,
}

impl Tone {
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Text and tone of a result area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultView {
    pub text: String,
    pub tone: Tone,
}

impl ResultView {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Normal,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    /// Map a request outcome to its rendering.
    ///
    /// - `200` renders the body in the default colour
    /// - any other status still renders the body, in red
    /// - a transport failure renders [`TRANSPORT_ERROR_TEXT`] in red
    #[must_use]
    pub fn from_outcome(outcome: Result<DeviceResponse, TransportError>) -> Self {
        match outcome {
            Ok(response) if response.is_ok() => Self::normal(response.body),
            Ok(response) => Self::error(response.body),
            Err(_) => Self::error(TRANSPORT_ERROR_TEXT),
        }
    }
}
