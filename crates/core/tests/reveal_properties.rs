//! Property-based tests for the reveal latch and stagger schedule.
//!
//! Uses proptest to validate:
//! - The latch never returns to hidden, whatever reports follow
//! - The reveal time is fixed by the first qualifying report
//! - Stagger delays are ordered and evenly spaced

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use folio_core::reveal::{Intersection, RevealLatch, RevealState};
use folio_core::stagger::{StaggerSchedule, stagger_delay};
use proptest::prelude::*;

fn report() -> impl Strategy<Value = (f64, bool)> {
    (0.0f64..=1.0, any::<bool>())
}

proptest! {
    /// Property: once revealed, the latch stays revealed
    #[test]
    fn prop_latch_is_monotonic(
        threshold in 0.0f64..=1.0,
        reports in prop::collection::vec(report(), 0..64),
    ) {
        let mut latch = RevealLatch::new(threshold);
        let mut seen_revealed = false;

        for (i, (ratio, intersecting)) in reports.into_iter().enumerate() {
            let _ = latch.observe(Intersection::new(ratio, intersecting), i as f64);
            if seen_revealed {
                prop_assert!(latch.is_revealed(), "latch reverted to hidden");
            }
            seen_revealed = latch.is_revealed();
        }
    }

    /// Property: the reveal time is that of the first qualifying report
    #[test]
    fn prop_reveal_time_is_first_crossing(
        threshold in 0.0f64..=1.0,
        reports in prop::collection::vec(report(), 1..64),
    ) {
        let first = reports
            .iter()
            .position(|&(ratio, intersecting)| intersecting && ratio >= threshold);

        let mut latch = RevealLatch::new(threshold);
        for (i, (ratio, intersecting)) in reports.into_iter().enumerate() {
            let _ = latch.observe(Intersection::new(ratio, intersecting), i as f64);
        }

        match first {
            Some(index) => prop_assert_eq!(latch.revealed_at(), Some(index as f64)),
            None => prop_assert_eq!(latch.state(), RevealState::Hidden),
        }
    }

    /// Property: delays are non-decreasing and one step apart
    #[test]
    fn prop_stagger_is_ordered(
        base in 0.0f64..1_000.0,
        step in 0.0f64..2.0,
        count in 0usize..50,
    ) {
        let schedule = StaggerSchedule::new(base, step);
        let starts: Vec<f64> = (0..count).map(|i| schedule.start_time(i)).collect();

        for pair in starts.windows(2) {
            if let [a, b] = pair {
                prop_assert!(b >= a);
                prop_assert!(((b - a) - step).abs() < 1e-9);
            }
        }
        for i in 0..count {
            prop_assert!((schedule.start_time(i) - (base + stagger_delay(i, step))).abs() < 1e-9);
        }
    }
}
