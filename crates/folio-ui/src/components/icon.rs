//! Inline SVG glyphs

use leptos::prelude::*;

use crate::models::{Icon, IconShape};

/// Render `icon` as a stroked 24x24 SVG scaled to `size` pixels.
#[component]
pub fn IconGlyph(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    let shapes = icon
        .shapes()
        .iter()
        .map(|shape| match *shape {
            IconShape::Path(d) => view! { <path d=d /> }.into_any(),
            IconShape::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => view! { <rect x=x y=y width=width height=height rx=rx /> }.into_any(),
            IconShape::Circle { cx, cy, r } => view! { <circle cx=cx cy=cy r=r /> }.into_any(),
        })
        .collect_view();

    view! {
        <svg
            class=class
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=icon.label()
        >
            {shapes}
        </svg>
    }
}
