//! Data model for the portfolio page
//!
//! Everything here is literal, compile-time data. Slices keep their
//! declared order, which is the display order, and may contain duplicates.

pub mod content;
pub mod icon;

pub use icon::{Icon, IconShape};

/// Identity shown in the hero and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub socials: &'static [ContactLink],
}

/// One role in the experience list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organisation: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

/// A titled group in the skills grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

/// A card in the achievements section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

/// A card in the projects section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

/// How an outbound link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `mailto:` link, handled by the mail client in place.
    Mail,
    /// Web page opened in a new tab without an opener reference.
    External,
}

impl LinkKind {
    /// Value for the anchor's `target` attribute.
    #[must_use]
    pub const fn target(self) -> Option<&'static str> {
        match self {
            Self::Mail => None,
            Self::External => Some("_blank"),
        }
    }

    /// Value for the anchor's `rel` attribute.
    #[must_use]
    pub const fn rel(self) -> Option<&'static str> {
        match self {
            Self::Mail => None,
            Self::External => Some("noopener noreferrer"),
        }
    }
}

/// An outbound link with its glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
    pub icon: Icon,
}

/// Which body a section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Experience,
    Skills,
    Achievements,
    Projects,
    Contact,
}

/// A titled block of the page, wrapped in a scroll-revealed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSection {
    /// Fragment id, usable as `#id` in links.
    pub id: &'static str,
    pub title: &'static str,
    pub kind: SectionKind,
}
