/// Errors from the color domain layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing a shade palette.
#[derive(Debug, Error)]
pub enum ShadeError {
    /// The color argument is not a 3 or 6-digit hex color.
    #[error("Argument must be a valid 3 or 6-digit hex color, got '{input}'")]
    InvalidColor {
        /// The rejected argument, verbatim.
        input: String,
    },

    /// The export file could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Destination of the export.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing to the console failed.
    #[error("Console write failed: {0}")]
    Io(#[from] io::Error),

    /// The shade result could not be rendered as JSON.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Exit code mapping for `ShadeError` variants.
impl ShadeError {
    /// Return the CLI exit code for this error.
    ///
    /// Matches clap's convention of `2` for usage errors.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidColor { .. } => 2,
            Self::Write { .. } | Self::Io(_) | Self::Serialize(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidColor { .. } => "invalid_color",
            Self::Write { .. } => "write_failed",
            Self::Io(_) => "io_error",
            Self::Serialize(_) => "serialize_error",
        }
    }
}
