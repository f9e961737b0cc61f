//! Slot selection engine.
//!
//! This module provides:
//! - Inferred-commitment (gap) detection from open-slot spacing
//! - Gap-proximity scoring
//! - Timezone-aware period-of-day classification
//! - The selection entry point balancing batching and diversity
//!
//! Everything here is a pure, synchronous computation: no I/O, no shared
//! state, identical inputs always produce identical output.

mod bucket;
mod gap;
mod score;
mod select;
mod slot;

pub use bucket::{
    TimeBucket, AFTERNOON_START_HOUR, BUCKET_ORDER, EVENING_START_HOUR, MORNING_START_HOUR,
};
pub use gap::{detect_gaps, Gap, GapDetector, DEFAULT_INCREMENT_MINUTES, GAP_THRESHOLD_FACTOR};
pub use score::{proximity_score, ScoredSlot, NEUTRAL_SCORE, SCORE_DECAY_MINUTES};
pub use select::{select_smart_slots, SelectorConfig, SlotSelector, DEFAULT_MAX_SLOTS};
pub use slot::TimeSlot;
