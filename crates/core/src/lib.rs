//! Host-independent reveal engine for the folio portfolio page.
//!
//! A scroll-revealed section is three small pieces:
//! - a one-shot latch ([`reveal::RevealLatch`]) that flips `Hidden -> Revealed`
//!   the first time the section is visible enough,
//! - a stagger schedule ([`stagger`]) and per-child entrance
//!   ([`transition::ChildTransition`]) giving each child its start delay,
//! - a visibility capability ([`observer::VisibilityObserver`]) supplied by
//!   the host, wired to the latch by [`observer::RevealGate`].
//!
//! None of it touches a DOM, so all of it is tested natively with the fake
//! observers in [`testing`].

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod observer;
pub mod result;
pub mod reveal;
pub mod stagger;
pub mod testing;
pub mod transition;

pub use config::{FolioConfig, HeroConfig, RevealConfig};
pub use error::Error;
pub use observer::{RevealGate, Subscription, VisibilityObserver};
pub use result::{Result, ResultExt};
pub use reveal::{Intersection, RevealLatch, RevealState, RevealTrigger, Transition, VisualState};
pub use stagger::{StaggerCursor, StaggerSchedule, stagger_delay};
pub use transition::{ChildTransition, Easing};
