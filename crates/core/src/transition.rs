//! Time-based child transitions
//!
//! A revealed section does not snap its children into place; each child
//! blends from hidden to visible over `duration`, starting at its staggered
//! time. [`ChildTransition::sample`] gives the visual state at any instant,
//! and [`ChildTransition::delay`] with `duration` and `easing` is what a host
//! hands to its own animation engine.

use crate::config::RevealConfig;
use crate::reveal::{RevealState, RevealTrigger, VisualState};
use crate::stagger::StaggerSchedule;

/// Progress curve for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle landing.
    #[default]
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// CSS timing function tracing the same curve as [`Easing::apply`].
    ///
    /// The `ease-out` keyword is a different, gentler curve, so the cubic
    /// is spelled out as its bezier.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)",
        }
    }
}

/// Entrance transition of one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildTransition {
    pub index: usize,
    /// Time the section was triggered.
    pub triggered_at: f64,
    pub starts_at: f64,
    pub duration: f64,
    pub from: VisualState,
    pub to: VisualState,
    pub easing: Easing,
}

impl ChildTransition {
    /// Transition of child `index` in a section triggered at `triggered_at`.
    #[must_use]
    pub fn staggered(index: usize, triggered_at: f64, config: &RevealConfig) -> Self {
        let schedule = StaggerSchedule::new(triggered_at, config.stagger);
        Self {
            index,
            triggered_at,
            starts_at: schedule.start_time(index),
            duration: config.duration,
            from: VisualState::hidden(config.offset),
            to: VisualState::visible(),
            easing: Easing::default(),
        }
    }

    /// Transition of child `index` under `state`.
    ///
    /// Hidden sections have nothing scheduled. A fail-open reveal puts the
    /// child straight into its visible state.
    #[must_use]
    pub fn for_child(state: RevealState, index: usize, config: &RevealConfig) -> Option<Self> {
        let RevealState::Revealed { at, trigger } = state else {
            return None;
        };
        let child = Self::staggered(index, at, config);
        Some(match trigger {
            RevealTrigger::Intersection => child,
            RevealTrigger::FailOpen => Self {
                starts_at: at,
                duration: 0.0,
                ..child
            },
        })
    }

    /// Visual state at `now`.
    #[must_use]
    pub fn sample(&self, now: f64) -> VisualState {
        if now < self.starts_at {
            return self.from;
        }
        if self.duration <= 0.0 {
            return self.to;
        }
        let progress = (now - self.starts_at) / self.duration;
        VisualState::lerp(self.from, self.to, self.easing.apply(progress))
    }

    /// Whether the child has reached its resting visible state.
    #[must_use]
    pub fn is_complete(&self, now: f64) -> bool {
        now >= self.starts_at + self.duration
    }

    /// Delay between the section trigger and this child's start.
    #[must_use]
    pub fn delay(&self) -> f64 {
        self.starts_at - self.triggered_at
    }

    /// Whether the child appears without animating.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }
}
