//! Coarse period-of-day classification.
//!
//! Buckets are used to keep suggestions varied: after batching picks most
//! of the offered times next to existing commitments, one slot is drawn
//! from outside the dominant bucket so the recipient always has an
//! alternative part of the day to choose from.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Local hour at which the morning bucket begins.
pub const MORNING_START_HOUR: u32 = 6;
/// Local hour at which the afternoon bucket begins.
pub const AFTERNOON_START_HOUR: u32 = 12;
/// Local hour at which the evening bucket begins.
pub const EVENING_START_HOUR: u32 = 17;

/// Coarse period of day for a slot's local start hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
}

/// Enumeration order consulted when majority tallies tie. Kept as an
/// explicit list so the tie-break does not depend on iteration order of
/// some unordered structure.
pub const BUCKET_ORDER: [TimeBucket; 3] = [
    TimeBucket::Morning,
    TimeBucket::Afternoon,
    TimeBucket::Evening,
];

impl TimeBucket {
    /// Classify an instant by its wall-clock hour in the given zone.
    ///
    /// Conversion goes through the zone's DST-aware offset, so the same
    /// instant can land in different buckets for different zones.
    ///
    /// The domain is daytime business availability, so hours outside the
    /// 06:00-21:00 window fold into the nearest defined bucket rather than
    /// being rejected: anything from 17:00 through 05:59 classifies as
    /// evening. If a provider ever returns true overnight slots, very
    /// late night and very early morning land in the same bucket as early
    /// evening.
    pub fn from_instant(instant: DateTime<Utc>, tz: Tz) -> Self {
        let hour = instant.with_timezone(&tz).hour();

        if (MORNING_START_HOUR..AFTERNOON_START_HOUR).contains(&hour) {
            Self::Morning
        } else if (AFTERNOON_START_HOUR..EVENING_START_HOUR).contains(&hour) {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}
