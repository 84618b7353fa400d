//! Configuration for reveal animations.
//!
//! All times are in seconds and all offsets in CSS pixels.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Default visible fraction that triggers a reveal.
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Default delay between consecutive children.
pub const DEFAULT_STAGGER: f64 = 0.1;
/// Default hidden vertical offset.
pub const DEFAULT_OFFSET: f64 = 20.0;
/// Default per-child transition length.
pub const DEFAULT_DURATION: f64 = 0.5;
/// Default hero entrance length.
pub const DEFAULT_HERO_DURATION: f64 = 0.8;

/// Tunables for the scroll-triggered section reveal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of the section's area that must be visible.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Delay between one child's start and the next.
    #[serde(default = "default_stagger")]
    pub stagger: f64,

    /// Downward offset of hidden children.
    #[serde(default = "default_offset")]
    pub offset: f64,

    /// Length of each child's transition.
    #[serde(default = "default_duration")]
    pub duration: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            stagger: default_stagger(),
            offset: default_offset(),
            duration: default_duration(),
        }
    }
}

impl RevealConfig {
    /// Set the trigger threshold.
    #[must_use]
    pub const fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the stagger step.
    #[must_use]
    pub const fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    /// Set the hidden offset.
    #[must_use]
    pub const fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the per-child transition length.
    #[must_use]
    pub const fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Check every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] when the threshold is not a finite
    /// ratio in `[0, 1]`, and [`Error::InvalidDuration`] when any time or
    /// offset is negative or non-finite.
    pub fn validate(self) -> Result<Self> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidThreshold {
                value: self.threshold,
            });
        }
        non_negative("stagger", self.stagger)?;
        non_negative("offset", self.offset)?;
        non_negative("duration", self.duration)?;
        Ok(self)
    }
}

/// Tunables for the hero banner's mount animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_hero_duration")]
    pub duration: f64,

    #[serde(default = "default_offset")]
    pub offset: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            duration: default_hero_duration(),
            offset: default_offset(),
        }
    }
}

impl HeroConfig {
    /// Check every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] when a field is negative or non-finite.
    pub fn validate(self) -> Result<Self> {
        non_negative("hero duration", self.duration)?;
        non_negative("hero offset", self.offset)?;
        Ok(self)
    }
}

/// Top-level page configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub hero: HeroConfig,
}

impl FolioConfig {
    /// Parse and validate configuration from TOML text.
    ///
    /// Missing tables and keys take their defaults, so an empty string is a
    /// valid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] for malformed TOML and the
    /// validation errors of [`RevealConfig::validate`] and
    /// [`HeroConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()
    }

    /// Validate both sections.
    ///
    /// # Errors
    ///
    /// See [`RevealConfig::validate`] and [`HeroConfig::validate`].
    pub fn validate(self) -> Result<Self> {
        self.reveal.validate()?;
        self.hero.validate()?;
        Ok(self)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDuration { field, value })
    }
}

const fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

const fn default_stagger() -> f64 {
    DEFAULT_STAGGER
}

const fn default_offset() -> f64 {
    DEFAULT_OFFSET
}

const fn default_duration() -> f64 {
    DEFAULT_DURATION
}

const fn default_hero_duration() -> f64 {
    DEFAULT_HERO_DURATION
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.stagger, 0.1);
        assert_eq!(config.offset, 20.0);
        assert_eq!(config.duration, 0.5);
        assert_eq!(HeroConfig::default().duration, 0.8);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = FolioConfig::from_toml_str("").unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = FolioConfig::from_toml_str("[reveal]\nthreshold = 0.3\n").unwrap();
        assert_eq!(config.reveal.threshold, 0.3);
        assert_eq!(config.reveal.stagger, DEFAULT_STAGGER);
        assert_eq!(config.hero, HeroConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = FolioConfig::from_toml_str("[reveal\nthreshold = ");
        assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = FolioConfig::from_toml_str("[reveal]\nthreshold = \"most\"\n");
        assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let result = RevealConfig::default().threshold(1.5).validate();
        assert_eq!(result, Err(Error::InvalidThreshold { value: 1.5 }));

        let result = RevealConfig::default().threshold(f64::NAN).validate();
        assert!(matches!(result, Err(Error::InvalidThreshold { .. })));
    }

    #[test]
    fn test_threshold_bounds_accepted() {
        assert!(RevealConfig::default().threshold(0.0).validate().is_ok());
        assert!(RevealConfig::default().threshold(1.0).validate().is_ok());
    }

    #[test]
    fn test_negative_stagger_rejected() {
        let result = RevealConfig::default().stagger(-0.1).validate();
        assert_eq!(
            result,
            Err(Error::InvalidDuration {
                field: "stagger",
                value: -0.1
            })
        );
    }

    #[test]
    fn test_infinite_hero_duration_rejected() {
        let text = "[hero]\nduration = inf\n";
        let result = FolioConfig::from_toml_str(text);
        assert!(matches!(
            result,
            Err(Error::InvalidDuration {
                field: "hero duration",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_chain() {
        let config = RevealConfig::default()
            .threshold(0.25)
            .stagger(0.05)
            .offset(40.0)
            .duration(1.0);
        assert_eq!(config.threshold, 0.25);
        assert_eq!(config.stagger, 0.05);
        assert_eq!(config.offset, 40.0);
        assert_eq!(config.duration, 1.0);
    }
}
