/// Console rendering of the shade report, and error output.
use std::io::{self, Write};

use colored::Colorize;

use crate::color::{HexColor, ShadeError, ShadeResult};
use crate::types::ErrorOutput;

/// Base URL of the companion component preview site.
pub const PREVIEW_URL: &str = "https://themecolorshades.com/components/";

/// Writes the human-facing report to any sink (stdout in `main`, a buffer in tests).
pub struct Console<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Console<W> {
    /// Wrap `out`. When `styled` is false the swatch is printed as plain text.
    #[must_use]
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    /// `Theme Color Shades <version>`.
    ///
    /// # Errors
    ///
    /// Propagates write failures of the underlying sink.
    pub fn write_banner(&mut self, version: &str) -> io::Result<()> {
        writeln!(self.out, "Theme Color Shades {version}")
    }

    /// Greeting line with the input echoed as a swatch of itself.
    ///
    /// # Errors
    ///
    /// Propagates write failures of the underlying sink.
    pub fn write_greeting(&mut self, color: &HexColor) -> io::Result<()> {
        let swatch = swatch(color, self.styled);
        writeln!(
            self.out,
            "Hello! Here is your requested shades using {swatch} as reference:\n"
        )
    }

    /// The shade result as 2-space pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `ShadeError::Serialize` or `ShadeError::Io`.
    pub fn write_result(&mut self, result: &ShadeResult) -> Result<(), ShadeError> {
        let json = serde_json::to_string_pretty(result)?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    /// Pointer to the preview site for this color.
    ///
    /// # Errors
    ///
    /// Propagates write failures of the underlying sink.
    pub fn write_preview_link(&mut self, color: &HexColor) -> io::Result<()> {
        writeln!(
            self.out,
            "\nWanna see how these shades play out in some components before using?\n\
             Check it out here: {}",
            preview_link(color)
        )
    }

    /// Give back the sink.
    #[cfg(test)]
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The input rendered in its own color (reverse video), or plain when unstyled.
#[must_use]
pub fn swatch(color: &HexColor, styled: bool) -> String {
    if !styled {
        return color.raw().to_owned();
    }
    let rgb = color.rgb();
    color
        .raw()
        .truecolor(rgb.r, rgb.g, rgb.b)
        .reversed()
        .to_string()
}

/// Preview URL carrying the lowercase hex digits, `#` stripped.
#[must_use]
pub fn preview_link(color: &HexColor) -> String {
    format!("{PREVIEW_URL}?color={}", color.slug())
}

// --- Error output ---

/// Write an error to stderr, as a JSON envelope or as `Error: <message>`.
pub fn write_error(err: &ShadeError, json: bool) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = render_error(&mut out, err, json);
}

fn render_error<W: Write>(out: &mut W, err: &ShadeError, json: bool) -> io::Result<()> {
    if json {
        let envelope = ErrorOutput::from_shade_error(err);
        let s = serde_json::to_string_pretty(&envelope).unwrap_or_default();
        writeln!(out, "{s}")
    } else {
        writeln!(out, "Error: {err}")
    }
}
