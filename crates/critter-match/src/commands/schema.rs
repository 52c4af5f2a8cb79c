//! Schema command: JSON Schema for machine-readable output.

use clap::{Args, ValueEnum};
use tracing::{debug, instrument};

use critter_match_core::{AnswerSet, QuizResult, ValidationReport};

/// Which document to describe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    /// `result --json` and `quiz --json` output.
    #[default]
    Result,
    /// JSON answer payloads accepted by `result`.
    Answers,
    /// Answer set validation report.
    Validation,
}

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Document to describe.
    #[arg(value_enum, default_value_t)]
    pub target: SchemaTarget,
}

/// Print a JSON Schema to stdout.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(target = ?args.target, "executing schema command");
    let schema = match args.target {
        SchemaTarget::Result => schemars::schema_for!(QuizResult),
        SchemaTarget::Answers => schemars::schema_for!(AnswerSet),
        SchemaTarget::Validation => schemars::schema_for!(ValidationReport),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
