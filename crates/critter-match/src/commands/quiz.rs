//! Quiz command: ask every question on the terminal, then show the result.
//!
//! Prompts and the progress bar go to stderr so stdout carries only the
//! result, the same as `result`.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, instrument};

use critter_match_core::questions::ANSWER_LABELS;
use critter_match_core::{AnswerSet, QUESTIONS, scoring};

use super::MatchCounts;
use crate::render;

/// Arguments for the `quiz` subcommand.
#[derive(Args, Debug, Default)]
pub struct QuizArgs {
    /// Number of closest animals to list.
    #[arg(long)]
    pub top: Option<usize>,

    /// Number of farthest animals to list.
    #[arg(long)]
    pub worst: Option<usize>,
}

/// Run the interactive quiz over stdin.
#[instrument(name = "cmd_quiz", skip_all)]
pub fn cmd_quiz(args: QuizArgs, global_json: bool, counts: MatchCounts) -> anyhow::Result<()> {
    debug!(top = ?args.top, worst = ?args.worst, "executing quiz command");

    let stdin = std::io::stdin();
    let progress = if stdin.is_terminal() {
        let bar = ProgressBar::new(QUESTIONS.len() as u64);
        bar.set_style(ProgressStyle::with_template(
            "{bar:30.cyan/blue} {pos}/{len}",
        )?);
        bar
    } else {
        ProgressBar::hidden()
    };

    let answers = run_quiz(stdin.lock(), std::io::stderr(), &progress)?;
    progress.finish_and_clear();

    let Some(answers) = answers else {
        eprintln!("퀴즈를 중단했습니다.");
        return Ok(());
    };

    let counts = counts.with_overrides(args.top, args.worst);
    let result = scoring::evaluate(&answers, counts.top, counts.worst);
    debug!(answered = result.answered, "quiz finished");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render_result(&result));
        if let Some(code) = answers.to_compact() {
            println!();
            println!("공유 코드: {code}");
            println!("다시 보기: critter-match result {code}");
        }
    }
    Ok(())
}

/// Ask each question in catalog order and collect the answers.
///
/// `b` steps back one question and `q` quits, returning `None`. Anything
/// other than a response from 1 to 5 is asked again. Running out of input
/// before the last question is an error.
pub fn run_quiz<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    progress: &ProgressBar,
) -> anyhow::Result<Option<AnswerSet>> {
    let mut answers = AnswerSet::new();
    let mut index = 0;
    let mut line = String::new();

    while index < QUESTIONS.len() {
        let question = &QUESTIONS[index];
        progress.suspend(|| prompt(&mut out, index, question.text))?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            anyhow::bail!(
                "input ended after {} of {} questions",
                answers.len(),
                QUESTIONS.len()
            );
        }

        match line.trim() {
            "q" | "Q" => return Ok(None),
            "b" | "B" => {
                if index > 0 {
                    index -= 1;
                    answers.remove(QUESTIONS[index].id);
                    progress.set_position(index as u64);
                }
            }
            other => match other.parse::<i32>() {
                Ok(response) if ANSWER_LABELS.iter().any(|(value, _)| *value == response) => {
                    answers.insert(question.id, response);
                    index += 1;
                    progress.set_position(index as u64);
                }
                _ => {
                    progress.suspend(|| writeln!(out, "1부터 5 사이의 숫자를 입력하세요."))?;
                }
            },
        }
    }

    Ok(Some(answers))
}

fn prompt<W: Write>(out: &mut W, index: usize, text: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{}/{}] {text}", index + 1, QUESTIONS.len())?;
    for (value, label) in ANSWER_LABELS {
        writeln!(out, "  {value}) {label}")?;
    }
    write!(out, "(b: 이전, q: 종료) > ")?;
    out.flush()
}
