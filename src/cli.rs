// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `stencil`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stencil",
    version,
    about = "Rewrite files in place by substituting path-scoped template variables.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the configuration file.
    ///
    /// Default: `stencil.cf` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "stencil.cf")]
    pub config: String,

    /// Parse the configuration and print the section store, but don't
    /// touch any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STENCIL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
