//! Staggered start times for a section's children
//!
//! Scheduling is kept apart from rendering: given a trigger time and a step,
//! child `i` starts at `base + i * step`.

use std::cell::Cell;

/// Delay of child `index` relative to the trigger.
///
/// # Examples
///
/// ```
/// use folio_core::stagger::stagger_delay;
///
/// assert!((stagger_delay(2, 0.1) - 0.2).abs() < 1e-9);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// Start times for one revealed section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerSchedule {
    /// Trigger time of the section.
    pub base: f64,
    /// Gap between consecutive children.
    pub step: f64,
}

impl StaggerSchedule {
    #[must_use]
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    /// Absolute start time of child `index`.
    #[must_use]
    pub fn start_time(&self, index: usize) -> f64 {
        self.base + stagger_delay(index, self.step)
    }
}

/// Hands out child indices in the order children enrol.
///
/// Children claim an index when they are built, so the claim order is the
/// declaration order of the markup.
#[derive(Debug, Default)]
pub struct StaggerCursor {
    next: Cell<usize>,
}

impl StaggerCursor {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Cell::new(0) }
    }

    /// Take the next index.
    pub fn claim(&self) -> usize {
        let index = self.next.get();
        self.next.set(index.saturating_add(1));
        index
    }

    /// Number of indices handed out so far.
    #[must_use]
    pub fn claimed(&self) -> usize {
        self.next.get()
    }
}
