//! Inline CSS for reveal animations
//!
//! The browser performs the time-based transition: we render the resting
//! style for the current state plus a `transition` declaration built from
//! the child's [`ChildTransition`], so the delay, duration and curve the
//! browser plays are the ones the core schedules.

use folio_core::transition::{ChildTransition, Easing};
use folio_core::{HeroConfig, RevealConfig, RevealState, VisualState};

/// Style for child `index` of a section in `state`.
///
/// While hidden, the declared transition is the one the child will run once
/// the section triggers. A fail-open reveal renders with no transition.
#[must_use]
pub fn reveal_style(state: RevealState, index: usize, config: &RevealConfig) -> String {
    let child = ChildTransition::for_child(state, index, config)
        .unwrap_or_else(|| ChildTransition::staggered(index, 0.0, config));
    let visual = state.visual(config.offset);
    let transition = if child.is_instant() {
        "none".to_string()
    } else {
        transition_css(child.duration, child.delay(), child.easing)
    };
    format!("{} transition: {transition};", visual_css(visual))
}

/// Style for the hero banner, which animates once on mount.
#[must_use]
pub fn hero_style(shown: bool, config: &HeroConfig) -> String {
    let visual = if shown {
        VisualState::visible()
    } else {
        VisualState::hidden(config.offset)
    };
    format!(
        "{} transition: {};",
        visual_css(visual),
        transition_css(config.duration, 0.0, Easing::default())
    )
}

fn visual_css(visual: VisualState) -> String {
    format!(
        "opacity: {}; transform: translateY({}px);",
        visual.opacity, visual.offset_y
    )
}

fn transition_css(duration: f64, delay: f64, easing: Easing) -> String {
    let duration = millis(duration);
    let delay = millis(delay);
    let easing = easing.css();
    format!("opacity {duration}ms {easing} {delay}ms, transform {duration}ms {easing} {delay}ms")
}

/// Whole milliseconds, so float noise never reaches the stylesheet.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn millis(seconds: f64) -> u64 {
    if seconds.is_finite() {
        (seconds * 1000.0).round().max(0.0) as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use folio_core::RevealTrigger;

    use super::*;

    #[test]
    fn test_hidden_style() {
        let style = reveal_style(RevealState::Hidden, 0, &RevealConfig::default());
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
    }

    #[test]
    fn test_style_renders_scheduled_transition() {
        let config = RevealConfig::default();
        let state = RevealState::Revealed {
            at: 4.0,
            trigger: RevealTrigger::Intersection,
        };
        let Some(child) = ChildTransition::for_child(state, 2, &config) else {
            panic!("revealed section schedules its children");
        };

        let expected = transition_css(child.duration, child.delay(), child.easing);
        assert!(reveal_style(state, 2, &config).ends_with(&format!("transition: {expected};")));
        assert!(expected.contains("500ms cubic-bezier(0.33, 1, 0.68, 1) 200ms"));
    }

    #[test]
    fn test_millis_rounds_float_noise() {
        assert_eq!(millis(0.30000000000000004), 300);
        assert_eq!(millis(-1.0), 0);
        assert_eq!(millis(f64::NAN), 0);
    }

    #[test]
    fn test_hero_style_uses_hero_duration() {
        let style = hero_style(true, &HeroConfig::default());
        assert!(style.contains("opacity 800ms cubic-bezier(0.33, 1, 0.68, 1) 0ms"));
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
    }
}
