//! Smart slot selection.
//!
//! Given a day's raw availability, choose a small subset worth offering.
//! Two goals compete here: batching (cluster suggestions next to existing
//! commitments, found via gap detection) and diversity (guarantee at least
//! one option outside the dominant part of the day). Batching fills most
//! of the selection by descending proximity score; diversity reserves one
//! slot from a non-majority bucket first.

use chrono_tz::Tz;

use super::bucket::{TimeBucket, BUCKET_ORDER};
use super::gap::{GapDetector, DEFAULT_INCREMENT_MINUTES};
use super::score::{proximity_score, ScoredSlot};
use super::slot::TimeSlot;

/// Default number of slots offered to a recipient.
pub const DEFAULT_MAX_SLOTS: usize = 4;

/// Selector configuration
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Maximum number of slots to offer
    pub max_slots: usize,
    /// Expected spacing between provider slots (minutes)
    pub increment_minutes: i64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_slots: DEFAULT_MAX_SLOTS,
            increment_minutes: DEFAULT_INCREMENT_MINUTES,
        }
    }
}

/// Smart slot selector
pub struct SlotSelector {
    config: SelectorConfig,
}

impl SlotSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Choose which slots to offer
    ///
    /// Deduplicates by start instant, passes small inputs through, and
    /// otherwise runs the scoring pipeline: gap detection, proximity
    /// scoring, bucket classification, majority-bucket tally over the top
    /// half, one diversity slot, then a score-ordered fill.
    ///
    /// # Arguments
    /// * `slots` - Raw availability for one day, in any order
    /// * `tz` - Zone used to classify slots by local hour
    ///
    /// # Returns
    /// At most `max_slots` slots, chronologically ascending, no two
    /// sharing a start instant. Length is always
    /// `min(max_slots, deduplicated input length)`.
    pub fn select(&self, slots: &[TimeSlot], tz: Tz) -> Vec<TimeSlot> {
        let mut deduped: Vec<TimeSlot> = slots.to_vec();
        deduped.sort_by_key(|s| s.start);
        deduped.dedup_by_key(|s| s.start);

        if deduped.len() <= self.config.max_slots {
            return deduped;
        }

        let gaps = GapDetector::new()
            .with_increment(self.config.increment_minutes)
            .detect(&deduped);

        let mut scored: Vec<ScoredSlot> = deduped
            .iter()
            .map(|slot| ScoredSlot {
                slot: *slot,
                score: proximity_score(slot, &gaps),
                bucket: TimeBucket::from_instant(slot.start, tz),
            })
            .collect();
        // Stable sort over chronologically sorted input: equal scores keep
        // earliest-first order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let majority = majority_bucket(&scored);

        // Highest-scoring slot outside the majority bucket. Scanning the
        // full score-sorted list, not just the top half. Absent when the
        // whole day sits in one bucket.
        let diversity = scored.iter().find(|s| s.bucket != majority).copied();

        let mut selected: Vec<TimeSlot> = Vec::with_capacity(self.config.max_slots);
        if let Some(diverse) = &diversity {
            selected.push(diverse.slot);
        }

        for candidate in &scored {
            if selected.len() >= self.config.max_slots {
                break;
            }
            // The diversity slot is matched by its unique start instant.
            if diversity.is_some_and(|d| d.slot.start == candidate.slot.start) {
                continue;
            }
            selected.push(candidate.slot);
        }

        // Selection order is by score; presentation order is by time.
        selected.sort_by_key(|s| s.start);
        selected
    }
}

impl Default for SlotSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Tally buckets among the top half (ceiling division) of the score-sorted
/// list. The bucket with the highest tally wins; ties resolve to the first
/// max in [`BUCKET_ORDER`].
fn majority_bucket(scored: &[ScoredSlot]) -> TimeBucket {
    let top_half = scored.len().div_ceil(2);

    let mut tallies = [0usize; BUCKET_ORDER.len()];
    for entry in &scored[..top_half] {
        let idx = BUCKET_ORDER
            .iter()
            .position(|b| *b == entry.bucket)
            .expect("bucket missing from BUCKET_ORDER");
        tallies[idx] += 1;
    }

    let mut majority = BUCKET_ORDER[0];
    let mut best = tallies[0];
    for (idx, bucket) in BUCKET_ORDER.iter().enumerate().skip(1) {
        if tallies[idx] > best {
            majority = *bucket;
            best = tallies[idx];
        }
    }
    majority
}

/// Convenience function running selection with the default increment
pub fn select_smart_slots(slots: &[TimeSlot], tz: Tz, max_slots: usize) -> Vec<TimeSlot> {
    SlotSelector::with_config(SelectorConfig {
        max_slots,
        increment_minutes: DEFAULT_INCREMENT_MINUTES,
    })
    .select(slots, tz)
}
