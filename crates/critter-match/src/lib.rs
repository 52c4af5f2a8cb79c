//! Library interface for the `critter-match` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`render`] - Text rendering of quiz results
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;
pub mod render;

use clap::{CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }

    /// Whether log lines on stderr should carry ANSI escapes.
    pub fn ansi_on_stderr(self) -> bool {
        match self {
            Self::Auto => std::io::stderr().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                      Log filter for the log file (e.g., debug, critter_match=trace)
    CRITTER_MATCH_LOG_PATH        Explicit log file path
    CRITTER_MATCH_LOG_DIR         Log directory
    CRITTER_MATCH_TOP_MATCHES     Default number of closest animals
    CRITTER_MATCH_WORST_MATCHES   Default number of farthest animals
    CRITTER_MATCH_STRICT          Reject incomplete answer sets (true/false)
    CRITTER_MATCH_MAX_INPUT_BYTES Maximum answer payload size in bytes
";

/// Command-line interface definition for critter-match.
#[derive(Parser)]
#[command(name = "critter-match")]
#[command(about = "Find the animal that matches your personality", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Score an encoded answer set and show the matching animals
    Result(commands::result::ResultArgs),

    /// Take the quiz interactively
    Quiz(commands::quiz::QuizArgs),

    /// List the quiz questions
    Questions(commands::questions::QuestionsArgs),

    /// List the animal personality types
    Animals(commands::animals::AnimalsArgs),

    /// Print the JSON Schema of machine-readable output
    Schema(commands::schema::SchemaArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_color_choice_decides_stderr_ansi() {
        assert!(ColorChoice::Always.ansi_on_stderr());
        assert!(!ColorChoice::Never.ansi_on_stderr());
    }
}
