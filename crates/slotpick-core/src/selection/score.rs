//! Gap-proximity scoring.
//!
//! Suggested times should cluster next to a recipient's existing
//! commitments so their remaining free time stays unfragmented. Each slot
//! is scored by its distance to the nearest inferred gap boundary. The
//! formula is a heuristic: its required properties are monotonic decay
//! with distance and a score of exactly 1.0 at zero distance.

use serde::{Deserialize, Serialize};

use super::bucket::TimeBucket;
use super::gap::Gap;
use super::slot::TimeSlot;

/// Score assigned to every slot when no gaps were detected.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Distance (minutes) at which a slot's score decays to half.
pub const SCORE_DECAY_MINUTES: f64 = 30.0;

/// A slot paired with its desirability score and bucket. Ephemeral:
/// produced and consumed within a single selection call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoredSlot {
    pub slot: TimeSlot,
    pub score: f64,
    pub bucket: TimeBucket,
}

/// Score a slot by its distance to the nearest gap boundary.
///
/// Returns a value in (0, 1]: exactly 1.0 at a gap boundary, 0.5 at 30
/// minutes away, roughly 0.33 at 60 minutes, decaying toward 0 with
/// distance. Direction does not matter -- before and after a gap score the
/// same. With no gaps there is nothing to batch against and every slot
/// gets [`NEUTRAL_SCORE`].
pub fn proximity_score(slot: &TimeSlot, gaps: &[Gap]) -> f64 {
    let Some(minutes_away) = minutes_to_nearest_boundary(slot, gaps) else {
        return NEUTRAL_SCORE;
    };

    1.0 / (1.0 + minutes_away as f64 / SCORE_DECAY_MINUTES)
}

/// Minimal absolute distance (minutes) from the slot's start to any gap
/// boundary. The nearest gap wins: a slot near two gaps is measured only
/// against the closer one. `None` when there are no gaps.
fn minutes_to_nearest_boundary(slot: &TimeSlot, gaps: &[Gap]) -> Option<i64> {
    gaps.iter()
        .map(|gap| {
            let to_start = (slot.start - gap.start).num_minutes().abs();
            let to_end = (slot.start - gap.end).num_minutes().abs();
            to_start.min(to_end)
        })
        .min()
}
