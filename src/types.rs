/// Shared serializable output types.
///
/// The shade result itself lives in `color::shades`; this module holds the
/// envelopes written around it.
use serde::{Deserialize, Serialize};

use crate::color::ShadeError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Offending input or path, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `ShadeError`.
    #[must_use]
    pub fn from_shade_error(err: &ShadeError) -> Self {
        let subject = match err {
            ShadeError::InvalidColor { input } => Some(input.clone()),
            ShadeError::Write { path, .. } => Some(path.display().to_string()),
            ShadeError::Io(_) | ShadeError::Serialize(_) => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                subject,
            },
        }
    }
}
