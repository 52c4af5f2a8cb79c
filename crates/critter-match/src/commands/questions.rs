//! Questions command: list the quiz catalog.

use clap::Args;
use tracing::{debug, instrument};

use critter_match_core::questions::{ANSWER_LABELS, questions_for};
use critter_match_core::{Dimension, QUESTIONS, Question};

use crate::render;

/// Arguments for the `questions` subcommand.
#[derive(Args, Debug, Default)]
pub struct QuestionsArgs {
    /// Only list questions measuring this dimension.
    #[arg(long, value_enum)]
    pub dimension: Option<Dimension>,
}

/// Print the question catalog.
#[instrument(name = "cmd_questions", skip_all)]
pub fn cmd_questions(args: QuestionsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(dimension = ?args.dimension, "executing questions command");

    let selected: Vec<&Question> = match args.dimension {
        Some(dimension) => questions_for(dimension).collect(),
        None => QUESTIONS.iter().collect(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for q in &selected {
        println!("{}", render::question_row(q));
    }
    println!();
    let scale: Vec<String> = ANSWER_LABELS
        .iter()
        .map(|(value, label)| format!("{value}={label}"))
        .collect();
    println!("{}", scale.join("  "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_questions() {
        assert!(cmd_questions(QuestionsArgs::default(), false).is_ok());
    }

    #[test]
    fn lists_one_dimension_as_json() {
        let args = QuestionsArgs {
            dimension: Some(Dimension::Adventure),
        };
        assert!(cmd_questions(args, true).is_ok());
    }
}
