/// The shade command: validate, generate, print, optionally export.
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use super::export::{ExportWriter, export};
use crate::cli::{Cli, Console, OutputFormat};
use crate::color::{HexColor, ShadeError, ShadeGenerator, ShadeOptions, ShadeResult};

/// Version printed in the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed inputs of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeRequest {
    /// Raw color argument, not yet validated.
    pub color: String,
    /// Where to write the export snippet, if anywhere.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

impl From<&Cli> for ShadeRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            color: cli.color.clone(),
            output: cli.output.clone(),
            format: cli.format,
        }
    }
}

/// Run the shade command.
///
/// Nothing is printed and the generator is not called unless the color is
/// valid. When `request.output` is set, the export is written after the
/// console report and has completed by the time this returns.
///
/// # Errors
///
/// Returns `ShadeError::InvalidColor` for a malformed color, `ShadeError::Write`
/// when the export fails, and `ShadeError::Io` when the console sink fails.
pub fn run<G, X, W>(
    request: &ShadeRequest,
    generator: &G,
    writer: &X,
    console: &mut Console<W>,
) -> Result<ShadeResult, ShadeError>
where
    G: ShadeGenerator + ?Sized,
    X: ExportWriter + ?Sized,
    W: Write,
{
    let color = HexColor::parse(&request.color)?;
    debug!(color = color.raw(), rgb = ?color.rgb(), format = ?request.format, "validated color");

    let result = generator.generate(&ShadeOptions {
        color: &color,
        saturation: true,
        hue: true,
        format: request.format,
    });
    debug!(shades = result.colors().len(), "generated shades");

    console.write_banner(VERSION)?;
    console.write_greeting(&color)?;
    console.write_result(&result)?;
    console.write_preview_link(&color)?;

    if let Some(path) = &request.output {
        export(&result, path, writer)?;
    }

    Ok(result)
}
