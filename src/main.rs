#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! shadecli — generate a group of color shades ready to be used in your UI library.

mod cli;
mod color;
mod commands;
mod types;

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Console, write_error};
use color::HslShadeGenerator;
use commands::{FsWriter, ShadeRequest};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let request = ShadeRequest::from(&cli);
    let stdout = io::stdout();
    let styled = !cli.no_color && stdout.is_terminal();
    let mut console = Console::new(stdout.lock(), styled);

    if let Err(err) = commands::run(&request, &HslShadeGenerator, &FsWriter, &mut console) {
        tracing::debug!(error = ?err, "command failed");
        drop(console);
        write_error(&err, cli.json_errors);
        std::process::exit(err.exit_code());
    }
}

/// Log to stderr so stdout carries only the report.
fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
