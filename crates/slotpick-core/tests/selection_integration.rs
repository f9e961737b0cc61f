//! Integration tests for the slot-selection pipeline.
//!
//! These exercise the full public surface over realistic day shapes: gap
//! detection feeding the scorer, bucket classification, and the selector's
//! batching/diversity behavior, plus the output guarantees as properties.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use slotpick_core::{detect_gaps, select_smart_slots, TimeBucket, TimeSlot};

fn slot(hour: u32, min: u32) -> TimeSlot {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, hour, min, 0).unwrap();
    TimeSlot::new(start, start + Duration::minutes(30))
}

#[test]
fn test_end_to_end_gap_batching() {
    // Availability 09:00-10:00 and 14:00-16:00; the hole in between is one
    // inferred meeting.
    let slots = vec![
        slot(9, 0),
        slot(9, 30),
        slot(10, 0),
        slot(14, 0),
        slot(14, 30),
        slot(15, 0),
        slot(15, 30),
        slot(16, 0),
    ];

    let gaps = detect_gaps(&slots);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].start, slot(10, 0).start);
    assert_eq!(gaps[0].end, slot(14, 0).start);

    // The two gap-edge slots win, the next-highest scores fill the rest.
    let selected = select_smart_slots(&slots, chrono_tz::UTC, 4);
    assert_eq!(
        selected,
        vec![slot(9, 30), slot(10, 0), slot(14, 0), slot(14, 30)]
    );
}

#[test]
fn test_diversity_slot_outside_dominant_bucket() {
    // 09:00-16:00 at 30-minute increments with one 10:30->13:30 hole. The
    // afternoon dominates the day, but the result must still offer a
    // morning option.
    let mut slots = Vec::new();
    for (hour, min) in [
        (9, 0),
        (9, 30),
        (10, 0),
        (10, 30),
        (13, 30),
        (14, 0),
        (14, 30),
        (15, 0),
        (15, 30),
        (16, 0),
    ] {
        slots.push(slot(hour, min));
    }

    let selected = select_smart_slots(&slots, chrono_tz::UTC, 4);

    assert_eq!(selected.len(), 4);
    assert!(selected
        .iter()
        .any(|s| TimeBucket::from_instant(s.start, chrono_tz::UTC) == TimeBucket::Morning));
    assert!(selected
        .iter()
        .any(|s| TimeBucket::from_instant(s.start, chrono_tz::UTC) == TimeBucket::Afternoon));
}

#[test]
fn test_same_start_different_durations_are_one_slot() {
    // A provider may return one opening with several candidate durations.
    let start = slot(9, 0).start;
    let slots = vec![
        TimeSlot::new(start, start + Duration::minutes(15)),
        TimeSlot::new(start, start + Duration::minutes(30)),
        TimeSlot::new(start, start + Duration::minutes(60)),
        slot(10, 0),
    ];

    let selected = select_smart_slots(&slots, chrono_tz::UTC, 4);
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].start, start);
    assert_eq!(selected[1].start, slot(10, 0).start);
}

#[test]
fn test_timezone_changes_the_selection_context() {
    // The same instants classify differently in Tokyo; the pipeline still
    // upholds its guarantees regardless of zone.
    let slots: Vec<_> = (9..17).map(|h| slot(h, 0)).collect();
    let tokyo: chrono_tz::Tz = "Asia/Tokyo".parse().unwrap();

    let utc_pick = select_smart_slots(&slots, chrono_tz::UTC, 4);
    let tokyo_pick = select_smart_slots(&slots, tokyo, 4);

    assert_eq!(utc_pick.len(), 4);
    assert_eq!(tokyo_pick.len(), 4);
    for pick in [&utc_pick, &tokyo_pick] {
        for pair in pick.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
    }
}

proptest! {
    #[test]
    fn prop_selection_guarantees(
        quarters in proptest::collection::vec(0u32..96, 0..40),
        max_slots in 1usize..8,
    ) {
        let base = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        let slots: Vec<TimeSlot> = quarters
            .iter()
            .map(|&q| {
                let start = base + Duration::minutes(q as i64 * 15);
                TimeSlot::new(start, start + Duration::minutes(30))
            })
            .collect();

        let selected = select_smart_slots(&slots, chrono_tz::UTC, max_slots);

        // Bound: |output| == min(max_slots, |dedup(input)|).
        let mut unique = quarters.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(selected.len(), unique.len().min(max_slots));

        // Chronological order and no duplicate starts.
        for pair in selected.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
        }

        // Determinism.
        let again = select_smart_slots(&slots, chrono_tz::UTC, max_slots);
        prop_assert_eq!(selected, again);
    }

    #[test]
    fn prop_pass_through_below_threshold(
        quarters in proptest::collection::vec(0u32..96, 0..5),
    ) {
        let base = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        let slots: Vec<TimeSlot> = quarters
            .iter()
            .map(|&q| {
                let start = base + Duration::minutes(q as i64 * 15);
                TimeSlot::new(start, start + Duration::minutes(30))
            })
            .collect();

        let mut expected = slots.clone();
        expected.sort_by_key(|s| s.start);
        expected.dedup_by_key(|s| s.start);

        // At most 4 unique inputs against a max of 4: always a pass-through.
        let selected = select_smart_slots(&slots, chrono_tz::UTC, 4);
        prop_assert_eq!(selected, expected);
    }
}
