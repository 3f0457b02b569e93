//! Rating engine: derives a restaurant's aggregate thumb from its visits.
//!
//! Each visit's overall thumb is scored (up = +1, neutral = 0, down = -1) and
//! the arithmetic mean is compared against two thresholds. The function is
//! pure and deterministic; every displayed rating and every rating-based
//! filter or sort goes through it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Visit;
use crate::enums::Thumb;

/// Default lower bound (exclusive) of the mean for an `up` rating.
pub const DEFAULT_UP_MIN: f64 = 0.33;

/// Default upper bound (exclusive) of the mean for a `down` rating.
pub const DEFAULT_DOWN_MAX: f64 = -0.33;

/// Mean-score cut-offs for the computed thumb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RatingThresholds {
    /// Mean strictly above this is `up`.
    pub up_min: f64,
    /// Mean strictly below this is `down`.
    pub down_max: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            up_min: DEFAULT_UP_MIN,
            down_max: DEFAULT_DOWN_MAX,
        }
    }
}

/// Compute the aggregate thumb of a restaurant from its visit history.
///
/// Zero visits yield `Neutral`.
#[must_use]
pub fn compute_restaurant_thumb(visits: &[Visit], thresholds: RatingThresholds) -> Thumb {
    if visits.is_empty() {
        return Thumb::Neutral;
    }

    let total: i64 = visits
        .iter()
        .map(|visit| i64::from(visit.overall_thumb.score()))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total as f64 / visits.len() as f64;

    if mean > thresholds.up_min {
        Thumb::Up
    } else if mean < thresholds.down_max {
        Thumb::Down
    } else {
        Thumb::Neutral
    }
}

/// Count of visits per overall thumb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThumbsBreakdown {
    pub up: u32,
    pub neutral: u32,
    pub down: u32,
}

impl ThumbsBreakdown {
    #[must_use]
    pub fn from_visits(visits: &[Visit]) -> Self {
        visits.iter().fold(Self::default(), |mut acc, visit| {
            match visit.overall_thumb {
                Thumb::Up => acc.up += 1,
                Thumb::Neutral => acc.neutral += 1,
                Thumb::Down => acc.down += 1,
            }
            acc
        })
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.up + self.neutral + self.down
    }
}

/// Latest visit date, by lexicographic order of the `YYYY-MM-DD` strings.
#[must_use]
pub fn last_visited(visits: &[Visit]) -> Option<String> {
    visits
        .iter()
        .map(|visit| visit.visit_date.as_str())
        .max()
        .map(String::from)
}
