//! Inferred-commitment detection between available slots.
//!
//! A recipient's existing meetings are not visible directly -- they show up
//! as holes in the provider's open-slot list. This module walks a day's
//! slots in chronological order and reports each discontinuity as a gap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slot::TimeSlot;

/// Default spacing between consecutive availability slots (minutes).
pub const DEFAULT_INCREMENT_MINUTES: i64 = 30;

/// Spacing beyond this multiple of the expected increment is treated as an
/// existing commitment. Hand-tuned, not derived from a model.
pub const GAP_THRESHOLD_FACTOR: f64 = 1.5;

/// An inferred busy interval between two available slots.
///
/// `start` is the start of the last free slot before the discontinuity,
/// `end` the start of the first free slot after it. Gaps are derived
/// values: recomputed on every selection call, never persisted or merged
/// across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Gap {
    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Detector for inferring commitments from slot spacing
pub struct GapDetector {
    /// Expected spacing between consecutive slots (minutes)
    increment_minutes: i64,
}

impl GapDetector {
    /// Create a new detector with the default 30-minute increment
    pub fn new() -> Self {
        Self {
            increment_minutes: DEFAULT_INCREMENT_MINUTES,
        }
    }

    /// Set the expected slot increment
    pub fn with_increment(mut self, minutes: i64) -> Self {
        self.increment_minutes = minutes;
        self
    }

    /// Find discontinuities in a day's availability
    ///
    /// Input order is not trusted; slots are sorted by start instant before
    /// walking consecutive pairs. Duplicate starts produce a zero-length
    /// diff and never cross the threshold, so they are harmless here --
    /// deduplication is the selector's job.
    ///
    /// # Arguments
    /// * `slots` - Available slots, in any order
    ///
    /// # Returns
    /// Vector of gaps in chronological order. Adjacent gaps are not merged.
    pub fn detect(&self, slots: &[TimeSlot]) -> Vec<Gap> {
        if slots.len() < 2 {
            return Vec::new(); // nothing to compare
        }

        let mut sorted: Vec<_> = slots.to_vec();
        sorted.sort_by_key(|s| s.start);

        let threshold = GAP_THRESHOLD_FACTOR * self.increment_minutes as f64;
        let mut gaps = Vec::new();

        for pair in sorted.windows(2) {
            let diff = (pair[1].start - pair[0].start).num_minutes() as f64;
            if diff > threshold {
                gaps.push(Gap {
                    start: pair[0].start,
                    end: pair[1].start,
                });
            }
        }

        gaps
    }
}

impl Default for GapDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to detect gaps with the default increment
pub fn detect_gaps(slots: &[TimeSlot]) -> Vec<Gap> {
    GapDetector::new().detect(slots)
}
