//! The six personality axes and per-axis score storage.
//!
//! Every question measures exactly one [`Dimension`], and every score vector
//! (user or animal) holds one value per dimension. [`DimensionScores`] is
//! indexed through an exhaustive `match`, so adding a variant fails to compile
//! until every accessor handles it.

use std::ops::{Index, IndexMut};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lowest valid Likert response.
pub const SCALE_MIN: i32 = 1;

/// Highest valid Likert response.
pub const SCALE_MAX: i32 = 5;

/// Scale midpoint. Reversal flips a response about this value.
pub const SCALE_MIDPOINT: f64 = 3.0;

/// A personality axis scored on the 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Dimension {
    /// Introverted (low) to extroverted (high).
    Extroversion,
    /// Logical (low) to emotional (high).
    Emotional,
    /// Spontaneous (low) to planner (high).
    Planning,
    /// Cooperative (low) to leader (high).
    Leadership,
    /// Stability-seeking (low) to adventure-seeking (high).
    Adventure,
    /// Dependent (low) to independent (high).
    Independence,
}

impl Dimension {
    /// All dimensions in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Extroversion,
        Self::Emotional,
        Self::Planning,
        Self::Leadership,
        Self::Adventure,
        Self::Independence,
    ];

    /// Returns the dimension key as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Extroversion => "extroversion",
            Self::Emotional => "emotional",
            Self::Planning => "planning",
            Self::Leadership => "leadership",
            Self::Adventure => "adventure",
            Self::Independence => "independence",
        }
    }

    /// Label for the low end of the axis.
    pub const fn low_label(&self) -> &'static str {
        match self {
            Self::Extroversion => "내향적",
            Self::Emotional => "논리적",
            Self::Planning => "즉흥형",
            Self::Leadership => "협력형",
            Self::Adventure => "안정추구",
            Self::Independence => "의존형",
        }
    }

    /// Label for the high end of the axis.
    pub const fn high_label(&self) -> &'static str {
        match self {
            Self::Extroversion => "외향적",
            Self::Emotional => "감정적",
            Self::Planning => "계획형",
            Self::Leadership => "리더형",
            Self::Adventure => "모험추구",
            Self::Independence => "독립형",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per [`Dimension`]: a point in the six-dimensional trait space.
///
/// For a complete answer set every value lies in `[1, 5]`. A dimension with
/// no answered questions stays at `0.0`, which callers should treat as
/// missing data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DimensionScores {
    /// Extroversion score.
    pub extroversion: f64,
    /// Emotional score.
    pub emotional: f64,
    /// Planning score.
    pub planning: f64,
    /// Leadership score.
    pub leadership: f64,
    /// Adventure score.
    pub adventure: f64,
    /// Independence score.
    pub independence: f64,
}

impl DimensionScores {
    /// Vector with every dimension at zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Vector with every dimension set to `value`.
    pub const fn uniform(value: f64) -> Self {
        Self {
            extroversion: value,
            emotional: value,
            planning: value,
            leadership: value,
            adventure: value,
            independence: value,
        }
    }

    /// Iterate `(dimension, value)` pairs in [`Dimension::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self[d]))
    }

    /// Position of a dimension's score on its low→high bar, in percent.
    ///
    /// Maps the 1–5 scale onto 0–100, clamped so missing (0) or
    /// out-of-range values still render.
    pub fn position_percent(&self, dimension: Dimension) -> f64 {
        let score = self[dimension];
        ((score - 1.0) / 4.0 * 100.0).clamp(0.0, 100.0)
    }
}

impl Index<Dimension> for DimensionScores {
    type Output = f64;

    fn index(&self, dimension: Dimension) -> &f64 {
        match dimension {
            Dimension::Extroversion => &self.extroversion,
            Dimension::Emotional => &self.emotional,
            Dimension::Planning => &self.planning,
            Dimension::Leadership => &self.leadership,
            Dimension::Adventure => &self.adventure,
            Dimension::Independence => &self.independence,
        }
    }
}

impl IndexMut<Dimension> for DimensionScores {
    fn index_mut(&mut self, dimension: Dimension) -> &mut f64 {
        match dimension {
            Dimension::Extroversion => &mut self.extroversion,
            Dimension::Emotional => &mut self.emotional,
            Dimension::Planning => &mut self.planning,
            Dimension::Leadership => &mut self.leadership,
            Dimension::Adventure => &mut self.adventure,
            Dimension::Independence => &mut self.independence,
        }
    }
}
