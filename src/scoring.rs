// Scariness scoring
// Computes the derived 0-10 scariness score for a movie record.
// The score is recomputed on demand and never stored.

use serde::{Deserialize, Serialize};

use crate::constants::{
    RATING_MAX, SCARE_RUNTIME_SATURATION, SCARE_VOTES_SATURATION, SCARE_WEIGHT_RATING,
    SCARE_WEIGHT_RUNTIME, SCARE_WEIGHT_VOTES, SCARE_WEIGHT_WATCHED, SCARINESS_MAX,
    SCARINESS_VERSION,
};
use crate::movie::Movie;

/// A scariness score with its per-input component breakdown.
///
/// Components are on a 0-1 scale; `overall` is on the 0-10 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScarinessBreakdown {
    pub overall: f64,
    pub rating_component: f64,
    pub votes_component: f64,
    pub runtime_component: f64,
    pub watched_component: f64,
    pub scoring_version: u32,
}

/// Score a movie. Pure: identical inputs always produce identical output,
/// and the result is defined for every valid field combination (votes of
/// zero and one-minute runtimes included).
///
/// Each input normalizes to a 0-1 component:
///   rating  - rating / 10
///   votes   - ln(1 + votes) / ln(1 + saturation), capped at 1
///   runtime - minutes / saturation, capped at 1
///   watched - 1 when watched, 0 otherwise
/// Components combine with the configured weights, scale onto 0-10, and
/// clamp. Monotonic non-decreasing in every input.
pub fn score(movie: &Movie) -> ScarinessBreakdown {
    let rating_component = (movie.rating / RATING_MAX).clamp(0.0, 1.0);

    let votes_component = ((movie.votes.max(0) as f64 + 1.0).ln()
        / (SCARE_VOTES_SATURATION + 1.0).ln())
    .min(1.0);

    let runtime_component =
        (movie.runtime_minutes.max(0) as f64 / SCARE_RUNTIME_SATURATION).min(1.0);

    let watched_component = if movie.watched { 1.0 } else { 0.0 };

    let weighted = rating_component * SCARE_WEIGHT_RATING
        + votes_component * SCARE_WEIGHT_VOTES
        + runtime_component * SCARE_WEIGHT_RUNTIME
        + watched_component * SCARE_WEIGHT_WATCHED;

    ScarinessBreakdown {
        overall: (weighted * SCARINESS_MAX).clamp(0.0, SCARINESS_MAX),
        rating_component,
        votes_component,
        runtime_component,
        watched_component,
        scoring_version: SCARINESS_VERSION,
    }
}
