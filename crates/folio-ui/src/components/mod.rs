//! Leptos UI components for the portfolio page

pub mod cards;
pub mod icon;
pub mod reveal;

pub use cards::{AchievementCard, ContactCard, ExperienceCard, OutboundLink, ProjectCard, SkillCard};
pub use icon::IconGlyph;
pub use reveal::{RevealItem, Section};
