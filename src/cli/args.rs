/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// shadecli — generate a group of color shades ready to be used in your UI library.
#[derive(Debug, Parser)]
#[command(
    name = "shadecli",
    about = "Create a group of color shades ready to be used in your UI library",
    version,
    disable_version_flag = true
)]
pub struct Cli {
    /// Color in HEX format. Since # needs to be escaped in most shells, wrap it
    /// in quotes or drop it, e.g. "#312333" or 312333.
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output file for UI library theming. Exports a `colors` constant that
    /// extends your theme.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format of the shade result.
    #[arg(short, long, value_name = "FORMAT", default_value = "object")]
    pub format: OutputFormat,

    /// Print the swatch without terminal colors (also honors `NO_COLOR`).
    #[arg(long)]
    pub no_color: bool,

    /// Report failures on stderr as a JSON envelope instead of plain text.
    #[arg(long)]
    pub json_errors: bool,

    /// Log debug events to stderr (`RUST_LOG` overrides).
    #[arg(long)]
    pub debug: bool,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

/// Shape of the shade result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Ordered list of colors, lightest first.
    Array,
    /// Mapping from scale step (50..900) to color.
    #[default]
    Object,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["shadecli", "312333"]).unwrap();
        assert_eq!(cli.color, "312333");
        assert_eq!(cli.output, None);
        assert_eq!(cli.format, OutputFormat::Object);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_format_and_output() {
        let cli =
            Cli::try_parse_from(["shadecli", "-f", "array", "#fff", "theme.js"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Array);
        assert_eq!(cli.output, Some(PathBuf::from("theme.js")));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = Cli::try_parse_from(["shadecli", "--format", "list", "fff"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_color_is_required() {
        let err = Cli::try_parse_from(["shadecli"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_short_version_flag() {
        let err = Cli::try_parse_from(["shadecli", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
