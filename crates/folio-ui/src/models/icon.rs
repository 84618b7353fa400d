//! Stroke glyphs used on the page, drawn on a 24x24 grid.

/// One primitive of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconShape {
    Path(&'static str),
    Rect {
        x: &'static str,
        y: &'static str,
        width: &'static str,
        height: &'static str,
        rx: &'static str,
    },
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Mail,
    Award,
    Briefcase,
    ExternalLink,
}

impl Icon {
    /// Accessible name for the glyph.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Email",
            Self::Award => "Award",
            Self::Briefcase => "Work",
            Self::ExternalLink => "Open link",
        }
    }

    #[must_use]
    pub const fn shapes(self) -> &'static [IconShape] {
        match self {
            Self::GitHub => &[
                IconShape::Path(
                    "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                ),
                IconShape::Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Self::LinkedIn => &[
                IconShape::Path(
                    "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                ),
                IconShape::Rect {
                    x: "2",
                    y: "9",
                    width: "4",
                    height: "12",
                    rx: "0",
                },
                IconShape::Circle {
                    cx: "4",
                    cy: "4",
                    r: "2",
                },
            ],
            Self::Mail => &[
                IconShape::Rect {
                    x: "2",
                    y: "4",
                    width: "20",
                    height: "16",
                    rx: "2",
                },
                IconShape::Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Self::Award => &[
                IconShape::Circle {
                    cx: "12",
                    cy: "8",
                    r: "6",
                },
                IconShape::Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
            ],
            Self::Briefcase => &[
                IconShape::Path("M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
                IconShape::Rect {
                    x: "2",
                    y: "6",
                    width: "20",
                    height: "14",
                    rx: "2",
                },
            ],
            Self::ExternalLink => &[
                IconShape::Path("M15 3h6v6"),
                IconShape::Path("M10 14 21 3"),
                IconShape::Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            ],
        }
    }
}
