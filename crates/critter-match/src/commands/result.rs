//! Result command: score a saved answer set.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument, warn};

use critter_match_core::{AnswerSet, scoring, validate};

use super::{MatchCounts, read_input_file, read_limited};
use crate::render;

/// Arguments for the `result` subcommand.
#[derive(Args, Debug, Default)]
pub struct ResultArgs {
    /// Answers as a 30-digit code or a JSON object of id to response.
    /// Use `-` (or omit) to read from stdin.
    #[arg(conflicts_with = "file")]
    pub answers: Option<String>,

    /// Read answers from a file.
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,

    /// Number of closest animals to list.
    #[arg(long)]
    pub top: Option<usize>,

    /// Number of farthest animals to list.
    #[arg(long)]
    pub worst: Option<usize>,

    /// Reject incomplete or out-of-range answers instead of scoring them.
    #[arg(long)]
    pub strict: bool,
}

/// Score answers and print the matching animals.
#[instrument(name = "cmd_result", skip_all, fields(strict))]
pub fn cmd_result(
    args: ResultArgs,
    global_json: bool,
    counts: MatchCounts,
    config_strict: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let strict = args.strict || config_strict;
    tracing::Span::current().record("strict", strict);
    debug!(file = ?args.file, top = ?args.top, worst = ?args.worst, "executing result command");

    let payload = match (&args.file, args.answers.as_deref()) {
        (Some(path), _) => read_input_file(path, max_input_bytes)?,
        (None, None | Some("-")) => read_limited(std::io::stdin().lock(), max_input_bytes)?,
        (None, Some(inline)) => {
            if let Some(max) = max_input_bytes
                && inline.len() > max
            {
                anyhow::bail!("input too large: {} bytes (limit: {max} bytes)", inline.len());
            }
            inline.to_string()
        }
    };

    let answers = AnswerSet::parse(&payload).context("invalid answers")?;
    let counts = counts.with_overrides(args.top, args.worst);

    let result = if strict {
        scoring::evaluate_strict(&answers, counts.top, counts.worst)?
    } else {
        let report = validate(&answers);
        if !report.is_valid() {
            warn!(
                missing = report.missing_ids.len(),
                out_of_range = report.out_of_range_ids.len(),
                "scoring a partial answer set"
            );
        }
        if !report.unknown_ids.is_empty() {
            warn!(ids = ?report.unknown_ids, "ignoring answers to unknown questions");
        }
        scoring::evaluate(&answers, counts.top, counts.worst)
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render_result(&result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(answers: &str) -> ResultArgs {
        ResultArgs {
            answers: Some(answers.to_string()),
            ..ResultArgs::default()
        }
    }

    #[test]
    fn scores_complete_compact_answers() {
        let args = inline("543215432154321543215432154321");
        assert!(cmd_result(args, true, MatchCounts::default(), false, None).is_ok());
    }

    #[test]
    fn partial_answers_pass_unless_strict() {
        let partial = format!("5432154321{}", "_".repeat(20));
        assert!(cmd_result(inline(&partial), false, MatchCounts::default(), false, None).is_ok());
        assert!(cmd_result(inline(&partial), false, MatchCounts::default(), true, None).is_err());
    }

    #[test]
    fn strict_flag_rejects_out_of_range() {
        let args = ResultArgs {
            strict: true,
            ..inline("933333333333333333333333333333")
        };
        assert!(cmd_result(args, true, MatchCounts::default(), false, None).is_err());
    }

    #[test]
    fn malformed_answers_fail() {
        assert!(cmd_result(inline("55x"), true, MatchCounts::default(), false, None).is_err());
    }

    #[test]
    fn inline_answers_respect_limit() {
        let args = inline("333333333333333333333333333333");
        assert!(cmd_result(args, true, MatchCounts::default(), false, Some(10)).is_err());
    }

    #[test]
    fn reads_answers_from_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), r#"{"1": 5, "2": 4, "3": 1}"#).unwrap();
        let args = ResultArgs {
            file: Some(Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap()),
            ..ResultArgs::default()
        };
        assert!(cmd_result(args, true, MatchCounts::default(), false, None).is_ok());
    }
}
