//! Deterministic observers for exercising reveal logic without a browser
//!
//! [`ManualObserver`] records subscriptions keyed by a string label and
//! delivers whatever intersection reports the test synthesises.
//! [`UnavailableObserver`] refuses every subscription, which drives the
//! fail-open path.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::observer::{IntersectionCallback, Subscription, VisibilityObserver};
use crate::result::Result;
use crate::reveal::Intersection;

struct Watch {
    id: u64,
    target: String,
    threshold: f64,
    callback: Option<IntersectionCallback>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    watches: Vec<Watch>,
    released: usize,
}

/// Observer driven by hand from tests.
#[derive(Clone, Default)]
pub struct ManualObserver {
    registry: Rc<RefCell<Registry>>,
}

impl ManualObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `ratio` for `target`; any positive ratio counts as intersecting.
    pub fn emit(&self, target: &str, ratio: f64) {
        self.emit_intersection(target, Intersection::new(ratio, ratio > 0.0));
    }

    /// Deliver `intersection` to every live subscription on `target`.
    pub fn emit_intersection(&self, target: &str, intersection: Intersection) {
        let ids: Vec<u64> = self
            .registry
            .borrow()
            .watches
            .iter()
            .filter(|w| w.target == target)
            .map(|w| w.id)
            .collect();

        for id in ids {
            // Callbacks run without the registry borrowed so they may
            // release their own subscription.
            let callback = self
                .registry
                .borrow_mut()
                .watches
                .iter_mut()
                .find(|w| w.id == id)
                .and_then(|w| w.callback.take());

            if let Some(mut callback) = callback {
                callback(intersection);
                if let Some(watch) = self
                    .registry
                    .borrow_mut()
                    .watches
                    .iter_mut()
                    .find(|w| w.id == id)
                {
                    watch.callback = Some(callback);
                }
            }
        }
    }

    /// Number of subscriptions not yet released.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.registry.borrow().watches.len()
    }

    /// Number of subscriptions released so far.
    #[must_use]
    pub fn released_subscriptions(&self) -> usize {
        self.registry.borrow().released
    }

    /// Thresholds requested by live subscriptions on `target`.
    #[must_use]
    pub fn thresholds_for(&self, target: &str) -> Vec<f64> {
        self.registry
            .borrow()
            .watches
            .iter()
            .filter(|w| w.target == target)
            .map(|w| w.threshold)
            .collect()
    }
}

impl VisibilityObserver for ManualObserver {
    type Target = str;

    fn subscribe(
        &self,
        target: &str,
        threshold: f64,
        on_change: IntersectionCallback,
    ) -> Result<Subscription> {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id = id.wrapping_add(1);
            registry.watches.push(Watch {
                id,
                target: target.to_owned(),
                threshold,
                callback: Some(on_change),
            });
            id
        };

        let registry = Rc::clone(&self.registry);
        Ok(Subscription::new(move || {
            let mut registry = registry.borrow_mut();
            let before = registry.watches.len();
            registry.watches.retain(|w| w.id != id);
            if registry.watches.len() < before {
                registry.released = registry.released.saturating_add(1);
            }
        }))
    }
}

/// Observer for a host with no observation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableObserver;

impl VisibilityObserver for UnavailableObserver {
    type Target = str;

    fn subscribe(
        &self,
        _target: &str,
        _threshold: f64,
        _on_change: IntersectionCallback,
    ) -> Result<Subscription> {
        Err(Error::observer_unavailable(
            "host provides no viewport observation",
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_emit_reaches_only_matching_target() {
        let observer = ManualObserver::new();
        let hits = Rc::new(Cell::new(0));

        let seen = Rc::clone(&hits);
        let _a = observer
            .subscribe("a", 0.1, Box::new(move |_| seen.set(seen.get() + 1)))
            .unwrap();
        let _b = observer.subscribe("b", 0.1, Box::new(|_| {})).unwrap();

        observer.emit("a", 0.5);
        observer.emit("b", 0.5);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_dropping_subscription_stops_reports() {
        let observer = ManualObserver::new();
        let hits = Rc::new(Cell::new(0));

        let seen = Rc::clone(&hits);
        let sub = observer
            .subscribe("a", 0.1, Box::new(move |_| seen.set(seen.get() + 1)))
            .unwrap();
        drop(sub);

        observer.emit("a", 0.5);
        assert_eq!(hits.get(), 0);
        assert_eq!(observer.active_subscriptions(), 0);
        assert_eq!(observer.released_subscriptions(), 1);
    }

    #[test]
    fn test_unavailable_observer_refuses() {
        let result = UnavailableObserver.subscribe("a", 0.1, Box::new(|_| {}));
        assert!(matches!(result, Err(ref e) if e.is_fail_open()));
    }
}
