//! Bookable time slot type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single bookable opening returned by a scheduling provider.
///
/// Instants are absolute; localization happens at classification and
/// display time. Two slots are considered duplicates when they share the
/// same `start` instant -- providers may return the same opening with
/// several candidate durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Create a new time slot
    ///
    /// # Panics
    /// Panics if `end <= start`. Use [`try_new`](Self::try_new) for a non-panicking version.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::try_new(start, end).expect("TimeSlot::new: end must be greater than start")
    }

    /// Create a new time slot, returning a Result
    ///
    /// # Errors
    /// Returns an error if `end <= start`
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Check if this slot overlaps with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_slot_creation() {
        let start = Utc::now();
        let end = start + Duration::minutes(30);

        let slot = TimeSlot::new(start, end);
        assert_eq!(slot.duration_minutes(), 30);
    }

    #[test]
    fn test_try_new_rejects_inverted_range() {
        let start = Utc::now();
        assert!(TimeSlot::try_new(start, start).is_err());
        assert!(TimeSlot::try_new(start, start - Duration::minutes(5)).is_err());
    }

    #[test]
    fn test_overlaps() {
        let start = Utc::now();
        let a = TimeSlot::new(start, start + Duration::minutes(30));
        let b = TimeSlot::new(start + Duration::minutes(15), start + Duration::minutes(45));
        let c = TimeSlot::new(start + Duration::minutes(30), start + Duration::minutes(60));

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
