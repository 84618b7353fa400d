//! One-shot reveal latch
//!
//! A section starts [`RevealState::Hidden`] and moves to
//! [`RevealState::Revealed`] the first time an intersection report reaches
//! its threshold. There is no way back: later reports, including ones with a
//! zero ratio, leave the state untouched.
//!
//! # Examples
//!
//! ```
//! use folio_core::reveal::{Intersection, RevealLatch, Transition};
//!
//! let mut latch = RevealLatch::new(0.1);
//! assert_eq!(latch.observe(Intersection::new(0.05, true), 1.0), Transition::Unchanged);
//! assert_eq!(latch.observe(Intersection::new(0.15, true), 2.0), Transition::Revealed);
//! assert_eq!(latch.observe(Intersection::new(0.0, false), 3.0), Transition::Unchanged);
//! assert_eq!(latch.revealed_at(), Some(2.0));
//! ```

/// A single visibility report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Visible fraction of the element, in `[0, 1]`.
    pub ratio: f64,
    /// Whether the element overlaps the viewport at all.
    pub is_intersecting: bool,
}

impl Intersection {
    /// Build a report, clamping the ratio into `[0, 1]`.
    ///
    /// Non-finite ratios are read as nothing visible.
    #[must_use]
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            ratio,
            is_intersecting,
        }
    }

    /// Whether this report satisfies `threshold`.
    #[must_use]
    pub fn reaches(self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// What caused a section to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    /// An intersection report crossed the threshold.
    Intersection,
    /// Observation was unavailable, so the content is shown without animation.
    FailOpen,
}

/// Visibility state of one section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RevealState {
    /// Not yet seen.
    #[default]
    Hidden,
    /// Seen at time `at` (seconds on the caller's clock).
    Revealed { at: f64, trigger: RevealTrigger },
}

impl RevealState {
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed { .. })
    }

    /// The resting visual state for this section's children.
    #[must_use]
    pub const fn visual(self, offset: f64) -> VisualState {
        match self {
            Self::Hidden => VisualState::hidden(offset),
            Self::Revealed { .. } => VisualState::visible(),
        }
    }
}

/// Result of feeding an event into a [`RevealLatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The latch flipped on this event.
    Revealed,
    /// Nothing changed.
    Unchanged,
}

/// One-directional `Hidden -> Revealed` latch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl RevealLatch {
    /// Create a hidden latch that trips at `threshold`.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: RevealState::Hidden,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Time of the reveal, if it has happened.
    #[must_use]
    pub const fn revealed_at(&self) -> Option<f64> {
        match self.state {
            RevealState::Hidden => None,
            RevealState::Revealed { at, .. } => Some(at),
        }
    }

    /// Feed one intersection report observed at `now`.
    pub fn observe(&mut self, intersection: Intersection, now: f64) -> Transition {
        if self.is_revealed() || !intersection.reaches(self.threshold) {
            return Transition::Unchanged;
        }
        self.state = RevealState::Revealed {
            at: now,
            trigger: RevealTrigger::Intersection,
        };
        Transition::Revealed
    }

    /// Reveal because observation cannot be performed.
    pub fn fail_open(&mut self, now: f64) -> Transition {
        if self.is_revealed() {
            return Transition::Unchanged;
        }
        self.state = RevealState::Revealed {
            at: now,
            trigger: RevealTrigger::FailOpen,
        };
        Transition::Revealed
    }
}

/// Rendered opacity and vertical offset of one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub offset_y: f64,
}

impl VisualState {
    /// Transparent and pushed down by `offset`.
    #[must_use]
    pub const fn hidden(offset: f64) -> Self {
        Self {
            opacity: 0.0,
            offset_y: offset,
        }
    }

    /// Opaque and in place.
    #[must_use]
    pub const fn visible() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
        }
    }

    /// Linear blend, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: (to.opacity - from.opacity).mul_add(t, from.opacity),
            offset_y: (to.offset_y - from.offset_y).mul_add(t, from.offset_y),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_new_latch_is_hidden() {
        let latch = RevealLatch::new(0.1);
        assert_eq!(latch.state(), RevealState::Hidden);
        assert_eq!(latch.revealed_at(), None);
        assert_eq!(latch.state().visual(20.0), VisualState::hidden(20.0));
    }

    #[test]
    fn test_below_threshold_keeps_hidden() {
        let mut latch = RevealLatch::new(0.1);
        assert_eq!(
            latch.observe(Intersection::new(0.09, true), 0.0),
            Transition::Unchanged
        );
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_exact_threshold_reveals() {
        let mut latch = RevealLatch::new(0.1);
        assert_eq!(
            latch.observe(Intersection::new(0.1, true), 4.0),
            Transition::Revealed
        );
        assert_eq!(
            latch.state(),
            RevealState::Revealed {
                at: 4.0,
                trigger: RevealTrigger::Intersection
            }
        );
    }

    #[test]
    fn test_not_intersecting_never_reveals() {
        let mut latch = RevealLatch::new(0.0);
        assert_eq!(
            latch.observe(Intersection::new(0.0, false), 0.0),
            Transition::Unchanged
        );
        assert_eq!(
            latch.observe(Intersection::new(0.0, true), 1.0),
            Transition::Revealed
        );
    }

    #[test]
    fn test_second_reveal_keeps_first_time() {
        let mut latch = RevealLatch::new(0.1);
        let _ = latch.observe(Intersection::new(0.5, true), 1.0);
        assert_eq!(
            latch.observe(Intersection::new(0.9, true), 2.0),
            Transition::Unchanged
        );
        assert_eq!(latch.revealed_at(), Some(1.0));
    }

    #[test]
    fn test_fail_open_reveals_once() {
        let mut latch = RevealLatch::new(0.1);
        assert_eq!(latch.fail_open(0.0), Transition::Revealed);
        assert_eq!(latch.fail_open(1.0), Transition::Unchanged);
        assert!(matches!(
            latch.state(),
            RevealState::Revealed {
                trigger: RevealTrigger::FailOpen,
                ..
            }
        ));
    }

    #[test]
    fn test_intersection_clamps_ratio() {
        assert_eq!(Intersection::new(1.7, true).ratio, 1.0);
        assert_eq!(Intersection::new(-0.2, true).ratio, 0.0);
        assert_eq!(Intersection::new(f64::NAN, true).ratio, 0.0);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = VisualState::lerp(VisualState::hidden(20.0), VisualState::visible(), 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.offset_y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_lerp_clamps_progress() {
        let past = VisualState::lerp(VisualState::hidden(20.0), VisualState::visible(), 3.0);
        assert_eq!(past, VisualState::visible());
    }
}
