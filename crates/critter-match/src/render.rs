//! Text rendering of quiz results, questions and animals.
//!
//! Styling goes through `if_supports_color`, so `--color never` and piped
//! output produce plain text.

use std::fmt::Write;

use critter_match_core::scoring::{DimensionBreakdown, MatchResult, QuizResult};
use critter_match_core::{AnimalProfile, Question};
use owo_colors::{OwoColorize, Stream};

/// Width of a dimension bar in cells.
pub const BAR_WIDTH: usize = 20;

/// A fixed-width bar with `percent` (0–100) of its cells filled.
pub fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a full result view.
pub fn render_result(result: &QuizResult) -> String {
    let mut out = String::new();
    let best = &result.best_match;

    let _ = writeln!(
        out,
        "{} {}",
        best.animal.emoji,
        format!("당신은 {} 타입!", best.animal.name)
            .if_supports_color(Stream::Stdout, |t| t.bold())
    );
    let _ = writeln!(out, "{}", best.animal.description);
    let _ = writeln!(
        out,
        "{}",
        tags(best.animal).if_supports_color(Stream::Stdout, |t| t.cyan())
    );
    let _ = writeln!(
        out,
        "유사도 {}",
        format!("{:.1}%", best.similarity).if_supports_color(Stream::Stdout, |t| t.green())
    );
    if result.answered < result.total_questions {
        let _ = writeln!(
            out,
            "{}",
            format!(
                "응답 {}/{} (미응답 문항은 점수에서 제외됨)",
                result.answered, result.total_questions
            )
            .if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    }

    section(&mut out, "성향 분석");
    for row in &result.breakdown {
        let _ = writeln!(out, "  {}", breakdown_row(row));
    }

    if !result.top_matches.is_empty() {
        section(&mut out, "잘 맞는 동물");
        for (rank, m) in result.top_matches.iter().enumerate() {
            let _ = writeln!(out, "  {}", match_row(rank + 1, m));
        }
    }

    if !result.worst_matches.is_empty() {
        section(&mut out, "안 맞는 동물");
        for (rank, m) in result.worst_matches.iter().enumerate() {
            let _ = writeln!(out, "  {}", match_row(rank + 1, m));
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        title.if_supports_color(Stream::Stdout, |t| t.bold().underline().to_string())
    );
}

fn tags(animal: &AnimalProfile) -> String {
    animal
        .traits
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One dimension as `low [bar] high  score`.
pub fn breakdown_row(row: &DimensionBreakdown) -> String {
    format!(
        "{} [{}] {}  {:.1}",
        row.low_label,
        bar(row.percent, BAR_WIDTH),
        row.high_label,
        row.score
    )
}

/// One ranked match as `N. emoji name  유사도 NN.N%`.
pub fn match_row(rank: usize, m: &MatchResult) -> String {
    format!(
        "{rank}. {} {}  유사도 {:.1}%",
        m.animal.emoji, m.animal.name, m.similarity
    )
}

/// One question line for listings.
pub fn question_row(q: &Question) -> String {
    let reversed = if q.reversed { " (역문항)" } else { "" };
    format!(
        "{:>2}. [{}]{} {}",
        q.id,
        q.dimension.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        reversed,
        q.text
    )
}

/// One animal line for listings.
pub fn animal_row(animal: &AnimalProfile) -> String {
    format!(
        "{} {} ({})  {}",
        animal.emoji,
        animal.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        animal.id,
        tags(animal)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use critter_match_core::{AnswerSet, scoring};

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(50.0, 4), "██░░");
        assert_eq!(bar(100.0, 4), "████");
    }

    #[test]
    fn bar_clamps_out_of_range_percent() {
        assert_eq!(bar(-20.0, 3), "░░░");
        assert_eq!(bar(250.0, 3), "███");
    }

    #[test]
    fn result_lists_best_top_and_worst() {
        let answers = AnswerSet::filled(4);
        let result = scoring::evaluate(&answers, 3, 2);
        let text = render_result(&result);

        assert!(text.contains(&format!("당신은 {} 타입!", result.best_match.animal.name)));
        assert!(text.contains("성향 분석"));
        assert!(text.contains("잘 맞는 동물"));
        assert!(text.contains("안 맞는 동물"));
        assert!(text.contains(&format!("유사도 {:.1}%", result.best_match.similarity)));
        for m in &result.worst_matches {
            assert!(text.contains(m.animal.name));
        }
        assert!(!text.contains("미응답"));
    }

    #[test]
    fn partial_result_is_flagged() {
        let answers: AnswerSet = [(1, 5), (2, 4)].into_iter().collect();
        let result = scoring::evaluate(&answers, 1, 0);
        let text = render_result(&result);
        assert!(text.contains("응답 2/30"));
        assert!(!text.contains("안 맞는 동물"));
    }

    #[test]
    fn match_row_formats_one_decimal() {
        let m = scoring::evaluate(&AnswerSet::filled(3), 1, 0).top_matches[0];
        let row = match_row(1, &m);
        assert!(row.starts_with("1. "));
        assert!(row.ends_with(&format!("{:.1}%", m.similarity)));
    }
}
