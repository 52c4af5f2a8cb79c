//! Scoring engine: answers → dimension scores → ranked animal matches.
//!
//! Everything here is a pure function over the static catalogs and a
//! caller-supplied [`AnswerSet`]. Partial answer sets are scored rather than
//! rejected; see [`evaluate_strict`] for the checked variant.
//!
//! # Pipeline
//!
//! 1. [`compute_dimension_scores`] averages the effective score of each
//!    answered question per dimension (reversed questions contribute
//!    `6 - response`).
//! 2. [`distance`] is the Euclidean distance between two score vectors;
//!    [`similarity`] maps it onto 0–100 against [`MAX_DISTANCE`].
//! 3. [`rank_matches`] orders the whole animal catalog by distance.
//!    [`find_best_match`], [`find_top_matches`] and [`find_worst_matches`]
//!    select from the same per-animal distances, so the best match is
//!    always the first top match.

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::Serialize;

use crate::animals::{ANIMALS, AnimalProfile};
use crate::answers::{AnswerSet, validate};
use crate::dimension::{Dimension, DimensionScores, SCALE_MIDPOINT};
use crate::error::{ScoringError, ScoringResult};
use crate::questions::QUESTIONS;

/// Number of matches returned when the caller does not say otherwise.
pub const DEFAULT_MATCH_COUNT: usize = 3;

/// Largest possible distance between two points on the 1–5 scale:
/// `sqrt(6 * 4^2)`.
pub const MAX_DISTANCE: f64 = 9.797_958_971_132_712;

/// An animal paired with how close it is to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct MatchResult {
    /// The matched profile.
    pub animal: &'static AnimalProfile,
    /// Similarity in percent, 0–100.
    pub similarity: f64,
    /// Euclidean distance in trait space.
    pub distance: f64,
}

impl MatchResult {
    fn new(animal: &'static AnimalProfile, user: &DimensionScores) -> Self {
        let distance = distance(user, &animal.scores);
        Self {
            animal,
            similarity: similarity(distance),
            distance,
        }
    }
}

/// Which pole of an axis a score leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lean {
    /// Below the midpoint.
    Low,
    /// Exactly at the midpoint.
    Balanced,
    /// Above the midpoint.
    High,
}

/// One dimension's score with the labels a result view renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct DimensionBreakdown {
    /// The axis.
    pub dimension: Dimension,
    /// Averaged score (0 when no question on this axis was answered).
    pub score: f64,
    /// Position on the low→high bar, 0–100.
    pub percent: f64,
    /// Label for the low end.
    pub low_label: &'static str,
    /// Label for the high end.
    pub high_label: &'static str,
    /// Which end the score leans toward.
    pub lean: Lean,
}

impl DimensionBreakdown {
    /// The label of the pole this score leans toward, if any.
    pub const fn leaning_label(&self) -> Option<&'static str> {
        match self.lean {
            Lean::Low => Some(self.low_label),
            Lean::High => Some(self.high_label),
            Lean::Balanced => None,
        }
    }
}

/// Everything a result view needs for one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct QuizResult {
    /// Number of catalog questions answered.
    pub answered: usize,
    /// Number of questions in the catalog.
    pub total_questions: usize,
    /// The user's position in trait space.
    pub scores: DimensionScores,
    /// Per-dimension scores with display labels.
    pub breakdown: Vec<DimensionBreakdown>,
    /// Closest animal.
    pub best_match: MatchResult,
    /// Closest animals, most similar first.
    pub top_matches: Vec<MatchResult>,
    /// Farthest animals, least similar first.
    pub worst_matches: Vec<MatchResult>,
}

/// Average each dimension's effective question scores.
///
/// Questions without an answer are skipped, so a dimension with no answered
/// questions stays at `0.0`. Ids outside the catalog are ignored.
#[tracing::instrument(skip_all, fields(answered = answers.len()))]
pub fn compute_dimension_scores(answers: &AnswerSet) -> DimensionScores {
    let mut sums = DimensionScores::ZERO;
    let mut counts = [0u32; Dimension::ALL.len()];

    for question in &QUESTIONS {
        let Some(response) = answers.get(question.id) else {
            continue;
        };
        sums[question.dimension] += question.effective_score(response);
        counts[question.dimension as usize] += 1;
    }

    let mut scores = DimensionScores::ZERO;
    for d in Dimension::ALL {
        let count = counts[d as usize];
        if count > 0 {
            scores[d] = sums[d] / f64::from(count);
        }
    }
    scores
}

/// Euclidean distance between two score vectors.
pub fn distance(a: &DimensionScores, b: &DimensionScores) -> f64 {
    Dimension::ALL
        .iter()
        .map(|&d| {
            let diff = a[d] - b[d];
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Convert a distance into a 0–100 similarity percentage.
///
/// 100 at distance 0, falling linearly to 0 at [`MAX_DISTANCE`], and 0 for
/// anything farther.
pub fn similarity(distance: f64) -> f64 {
    ((1.0 - distance / MAX_DISTANCE) * 100.0).max(0.0)
}

/// Every animal with its similarity, closest first.
///
/// Sorting is stable, so animals at exactly the same distance keep catalog
/// order.
#[tracing::instrument(skip_all)]
pub fn rank_matches(scores: &DimensionScores) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = ANIMALS
        .iter()
        .map(|animal| MatchResult::new(animal, scores))
        .collect();
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    matches
}

/// The animal closest to the user's scores.
///
/// Exact ties go to the animal listed first in the catalog.
pub fn find_best_match(answers: &AnswerSet) -> &'static AnimalProfile {
    best_match_for(&compute_dimension_scores(answers)).animal
}

/// The `n` most similar animals, most similar first.
///
/// `n` larger than the catalog returns every animal.
pub fn find_top_matches(answers: &AnswerSet, n: usize) -> Vec<MatchResult> {
    top_matches_for(&compute_dimension_scores(answers), n)
}

/// The `n` least similar animals, least similar first.
///
/// `n` larger than the catalog returns every animal.
pub fn find_worst_matches(answers: &AnswerSet, n: usize) -> Vec<MatchResult> {
    worst_matches_for(&compute_dimension_scores(answers), n)
}

fn best_match_for(scores: &DimensionScores) -> MatchResult {
    let mut best = MatchResult::new(&ANIMALS[0], scores);
    for animal in &ANIMALS[1..] {
        let candidate = MatchResult::new(animal, scores);
        if candidate.distance.total_cmp(&best.distance) == Ordering::Less {
            best = candidate;
        }
    }
    best
}

fn top_matches_for(scores: &DimensionScores, n: usize) -> Vec<MatchResult> {
    let mut ranked = rank_matches(scores);
    ranked.truncate(n);
    ranked
}

fn worst_matches_for(scores: &DimensionScores, n: usize) -> Vec<MatchResult> {
    let mut ranked: Vec<MatchResult> = ANIMALS
        .iter()
        .map(|animal| MatchResult::new(animal, scores))
        .collect();
    ranked.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    ranked.truncate(n);
    ranked
}

/// Per-dimension view of a score vector.
pub fn breakdown(scores: &DimensionScores) -> Vec<DimensionBreakdown> {
    scores
        .iter()
        .map(|(dimension, score)| {
            let lean = match score.total_cmp(&SCALE_MIDPOINT) {
                Ordering::Less => Lean::Low,
                Ordering::Equal => Lean::Balanced,
                Ordering::Greater => Lean::High,
            };
            DimensionBreakdown {
                dimension,
                score,
                percent: scores.position_percent(dimension),
                low_label: dimension.low_label(),
                high_label: dimension.high_label(),
                lean,
            }
        })
        .collect()
}

/// Score an answer set and assemble everything a result view renders.
///
/// Permissive: missing answers are skipped and responses are not
/// range-checked.
#[tracing::instrument(skip(answers), fields(answered = answers.len()))]
pub fn evaluate(answers: &AnswerSet, top: usize, worst: usize) -> QuizResult {
    let scores = compute_dimension_scores(answers);
    let answered = QUESTIONS
        .iter()
        .filter(|q| answers.get(q.id).is_some())
        .count();

    let result = QuizResult {
        answered,
        total_questions: QUESTIONS.len(),
        scores,
        breakdown: breakdown(&scores),
        best_match: best_match_for(&scores),
        top_matches: top_matches_for(&scores, top),
        worst_matches: worst_matches_for(&scores, worst),
    };
    tracing::debug!(
        best = result.best_match.animal.id,
        similarity = result.best_match.similarity,
        "evaluated answers"
    );
    result
}

/// Like [`evaluate`], but rejects incomplete or out-of-range answer sets.
///
/// Unknown ids are still ignored.
pub fn evaluate_strict(
    answers: &AnswerSet,
    top: usize,
    worst: usize,
) -> ScoringResult<QuizResult> {
    let report = validate(answers);
    if !report.is_complete() {
        return Err(ScoringError::Incomplete {
            missing: report.missing_ids,
            total: QUESTIONS.len(),
        });
    }
    if !report.out_of_range_ids.is_empty() {
        return Err(ScoringError::OutOfRange {
            ids: report.out_of_range_ids,
        });
    }
    Ok(evaluate(answers, top, worst))
}
