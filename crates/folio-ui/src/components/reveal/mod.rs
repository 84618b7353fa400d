//! Scroll-revealed sections
//!
//! [`Section`] observes its own `<section>` element and flips a one-shot
//! latch the first time enough of it is visible. Every [`RevealItem`] built
//! inside it claims the next stagger slot, so items cascade in the order
//! they are declared.
//!
//! # Example
//!
//! ```no_run
//! use folio_ui::components::reveal::{RevealItem, Section};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Achievements() -> impl IntoView {
//!     view! {
//!         <Section title="Achievements">
//!             <RevealItem>"first"</RevealItem>
//!             <RevealItem>"second"</RevealItem>
//!             <RevealItem>"third"</RevealItem>
//!         </Section>
//!     }
//! }
//! ```

pub mod style;

use folio_core::observer::RevealGate;
use folio_core::stagger::StaggerCursor;
use folio_core::{FolioConfig, RevealConfig, RevealState, RevealTrigger};
use leptos::prelude::*;

use crate::dom::{DomObserver, now_seconds};

pub use style::{hero_style, reveal_style};

/// Reveal state shared by a section with the items inside it.
#[derive(Clone, Copy)]
pub struct RevealContext {
    state: ReadSignal<RevealState>,
    config: RevealConfig,
    cursor: StoredValue<StaggerCursor, LocalStorage>,
}

impl RevealContext {
    /// Stagger slot for the next item to enrol.
    fn claim_index(&self) -> usize {
        self.cursor.with_value(StaggerCursor::claim)
    }
}

/// A titled block that animates its children in once, when first scrolled into view.
#[component]
pub fn Section(
    /// Heading shown above the content.
    title: &'static str,
    /// Fragment id for the `<section>` element.
    #[prop(optional)]
    id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let config = use_context::<FolioConfig>().unwrap_or_default().reveal;
    let (state, set_state) = signal(RevealState::Hidden);
    let gate = StoredValue::new_local(None::<RevealGate>);
    let section_ref = NodeRef::<leptos::html::Section>::new();

    provide_context(RevealContext {
        state,
        config,
        cursor: StoredValue::new_local(StaggerCursor::new()),
    });

    // Attach the observer once the element is in the DOM.
    Effect::new(move |_| {
        let Some(element) = section_ref.get() else {
            return;
        };
        if gate.with_value(Option::is_some) {
            return;
        }
        let element: &web_sys::Element = &element;
        let mounted = RevealGate::mount_with(
            &DomObserver,
            element,
            config,
            now_seconds,
            move |revealed| set_state.set(revealed),
        );
        gate.set_value(Some(mounted));
    });

    // A revealed section has nothing left to observe.
    Effect::new(move |_| {
        if state.get().is_revealed() {
            gate.update_value(|g| {
                if let Some(g) = g.as_mut() {
                    g.settle();
                }
            });
        }
    });

    on_cleanup(move || {
        let _ = gate.try_update_value(Option::take);
    });

    view! {
        <section node_ref=section_ref id=id class="mb-20">
            <h2
                class="text-3xl font-bold mb-8 text-gray-900 border-b-2 border-blue-500 pb-2 inline-block"
                style=move || reveal_style(state.get(), 0, &config)
            >
                {title}
            </h2>
            {children()}
        </section>
    }
}

/// One staggered child of a [`Section`].
///
/// Outside a section there is nothing to wait for, so the item renders
/// visible straight away.
#[component]
pub fn RevealItem(
    /// Extra classes for the wrapper.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = match use_context::<RevealContext>() {
        Some(ctx) => {
            let index = ctx.claim_index();
            Signal::derive(move || reveal_style(ctx.state.get(), index, &ctx.config))
        }
        None => {
            let shown = RevealState::Revealed {
                at: 0.0,
                trigger: RevealTrigger::FailOpen,
            };
            Signal::stored(reveal_style(shown, 0, &RevealConfig::default()))
        }
    };

    view! {
        <div class=class style=move || style.get()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_components_compile() {
        let _ = Section;
        let _ = RevealItem;
    }

    #[test]
    fn test_items_claim_increasing_slots() {
        let owner = Owner::new();
        owner.with(|| {
            let (state, _) = signal(RevealState::Hidden);
            let ctx = RevealContext {
                state,
                config: RevealConfig::default(),
                cursor: StoredValue::new_local(StaggerCursor::new()),
            };

            let slots: Vec<usize> = (0..3).map(|_| ctx.claim_index()).collect();
            assert_eq!(slots, vec![0, 1, 2]);
        });
    }
}
