//! Viewport observation capability and the reveal gate built on it
//!
//! The host supplies a [`VisibilityObserver`]: subscribe to visibility-ratio
//! reports for one target, get back a [`Subscription`] whose drop stops the
//! reports. [`RevealGate`] wires such an observer to a [`RevealLatch`] and
//! is the host-independent form of a scroll-revealed section.
//!
//! # Examples
//!
//! ```
//! use folio_core::observer::RevealGate;
//! use folio_core::testing::ManualObserver;
//! use folio_core::RevealConfig;
//!
//! let observer = ManualObserver::new();
//! let gate = RevealGate::mount(&observer, "about", RevealConfig::default(), || 0.0);
//! assert!(!gate.is_revealed());
//!
//! observer.emit("about", 0.5);
//! assert!(gate.is_revealed());
//!
//! drop(gate);
//! assert_eq!(observer.active_subscriptions(), 0);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::RevealConfig;
use crate::result::{Result, ResultExt};
use crate::reveal::{Intersection, RevealLatch, RevealState, Transition};

/// Callback receiving each intersection report for a target.
pub type IntersectionCallback = Box<dyn FnMut(Intersection)>;

/// Host capability: report when an element's visible ratio crosses a threshold.
pub trait VisibilityObserver {
    /// What the host observes (a DOM element, a test label, ...).
    type Target: ?Sized;

    /// Start reporting intersections of `target` around `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ObserverUnavailable`] when the host cannot
    /// observe `target`.
    fn subscribe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_change: IntersectionCallback,
    ) -> Result<Subscription>;
}

/// Handle on an active observation; dropping it stops the reports.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the host's release action.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    #[must_use]
    pub const fn detached() -> Self {
        Self { release: None }
    }

    /// Release now. Later calls and the eventual drop do nothing.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A section's latch bound to a live observation.
///
/// The subscription lives exactly as long as the gate.
#[derive(Debug)]
pub struct RevealGate {
    latch: Rc<RefCell<RevealLatch>>,
    config: RevealConfig,
    subscription: Subscription,
}

impl RevealGate {
    /// Start observing `target`.
    ///
    /// If the observer refuses, the gate fails open: the latch is revealed
    /// at once and no subscription is held.
    pub fn mount<O, C>(observer: &O, target: &O::Target, config: RevealConfig, clock: C) -> Self
    where
        O: VisibilityObserver + ?Sized,
        C: Fn() -> f64 + 'static,
    {
        Self::mount_with(observer, target, config, clock, |_| {})
    }

    /// Like [`RevealGate::mount`], calling `on_reveal` once when the latch
    /// flips, whether by intersection or by failing open.
    ///
    /// `on_reveal` runs inside the observer's callback, so it must not drop
    /// the gate itself.
    pub fn mount_with<O, C, R>(
        observer: &O,
        target: &O::Target,
        config: RevealConfig,
        clock: C,
        on_reveal: R,
    ) -> Self
    where
        O: VisibilityObserver + ?Sized,
        C: Fn() -> f64 + 'static,
        R: FnMut(RevealState) + 'static,
    {
        let mounted_at = clock();
        let latch = Rc::new(RefCell::new(RevealLatch::new(config.threshold)));
        let on_reveal = Rc::new(RefCell::new(on_reveal));
        let on_change = Self::on_change(Rc::clone(&latch), clock, Rc::clone(&on_reveal));

        let subscription = observer
            .subscribe(target, config.threshold, on_change)
            .or_else_logged(|_| {
                let state = {
                    let mut latch = latch.borrow_mut();
                    let _ = latch.fail_open(mounted_at);
                    latch.state()
                };
                let mut on_reveal = on_reveal.borrow_mut();
                (*on_reveal)(state);
                Subscription::detached()
            });

        Self {
            latch,
            config,
            subscription,
        }
    }

    fn on_change<C, R>(
        latch: Rc<RefCell<RevealLatch>>,
        clock: C,
        on_reveal: Rc<RefCell<R>>,
    ) -> IntersectionCallback
    where
        C: Fn() -> f64 + 'static,
        R: FnMut(RevealState) + 'static,
    {
        Box::new(move |intersection| {
            let revealed = {
                let Ok(mut latch) = latch.try_borrow_mut() else {
                    return;
                };
                if latch.is_revealed() {
                    return;
                }
                match latch.observe(intersection, clock()) {
                    Transition::Revealed => {
                        tracing::debug!(
                            ratio = intersection.ratio,
                            threshold = latch.threshold(),
                            "section revealed"
                        );
                        Some(latch.state())
                    }
                    Transition::Unchanged => None,
                }
            };

            if let (Some(state), Ok(mut on_reveal)) = (revealed, on_reveal.try_borrow_mut()) {
                (*on_reveal)(state);
            }
        })
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.latch.borrow().state()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.latch.borrow().is_revealed()
    }

    /// Whether the gate still holds a live observation.
    #[must_use]
    pub const fn is_observing(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop observing once revealed; nothing further can change the state.
    pub fn settle(&mut self) {
        if self.is_revealed() {
            self.subscription.cancel();
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::Cell;

    use super::*;
    use crate::testing::{ManualObserver, UnavailableObserver};

    #[test]
    fn test_subscription_releases_once() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut sub = Subscription::new(move || seen.set(seen.get() + 1));

        sub.cancel();
        sub.cancel();
        drop(sub);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_detached_subscription_is_inactive() {
        assert!(!Subscription::detached().is_active());
    }

    #[test]
    fn test_gate_subscribes_with_threshold() {
        let observer = ManualObserver::new();
        let config = RevealConfig::default().threshold(0.3);
        let gate = RevealGate::mount(&observer, "skills", config, || 0.0);

        assert!(gate.is_observing());
        assert_eq!(observer.thresholds_for("skills"), vec![0.3]);
    }

    #[test]
    fn test_gate_fails_open_without_observer() {
        let gate = RevealGate::mount(&UnavailableObserver, "skills", RevealConfig::default(), || {
            9.0
        });

        assert!(gate.is_revealed());
        assert!(!gate.is_observing());
    }

    #[test]
    fn test_on_reveal_fires_once() {
        let observer = ManualObserver::new();
        let fired = Rc::new(Cell::new(0));
        let seen = Rc::clone(&fired);
        let _gate = RevealGate::mount_with(
            &observer,
            "a",
            RevealConfig::default(),
            || 0.0,
            move |state| {
                assert!(state.is_revealed());
                seen.set(seen.get() + 1);
            },
        );

        observer.emit("a", 0.05);
        observer.emit("a", 0.5);
        observer.emit("a", 0.9);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_on_reveal_fires_on_fail_open() {
        let fired = Rc::new(Cell::new(false));
        let seen = Rc::clone(&fired);
        let _gate = RevealGate::mount_with(
            &UnavailableObserver,
            "a",
            RevealConfig::default(),
            || 0.0,
            move |_| seen.set(true),
        );
        assert!(fired.get());
    }

    #[test]
    fn test_settle_releases_after_reveal() {
        let observer = ManualObserver::new();
        let mut gate = RevealGate::mount(&observer, "a", RevealConfig::default(), || 0.0);

        gate.settle();
        assert!(gate.is_observing(), "hidden gate keeps observing");

        observer.emit("a", 1.0);
        gate.settle();
        assert!(!gate.is_observing());
        assert_eq!(observer.active_subscriptions(), 0);
    }
}
