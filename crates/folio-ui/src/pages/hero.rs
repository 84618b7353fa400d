//! Hero banner

use folio_core::FolioConfig;
use leptos::prelude::*;

use crate::components::reveal::hero_style;
use crate::components::{IconGlyph, OutboundLink};
use crate::dom::next_frame;
use crate::models::Profile;

/// Name, tagline and social links; slides in once on mount.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let config = use_context::<FolioConfig>().unwrap_or_default().hero;
    let (shown, set_shown) = signal(false);

    // Flip on the next frame so the hidden style is painted first.
    Effect::new(move |_| next_frame(move || set_shown.set(true)));

    view! {
        <header class="relative bg-gradient-to-r from-blue-800 via-indigo-800 to-purple-800 text-white">
            <div class="absolute inset-0 bg-black opacity-10"></div>
            <div class="max-w-7xl mx-auto px-4 py-24 sm:px-6 lg:px-8 relative">
                <div class="text-center" style=move || hero_style(shown.get(), &config)>
                    <h1 class="text-5xl sm:text-6xl md:text-7xl font-bold mb-6">{profile.name}</h1>
                    <p class="text-2xl sm:text-3xl text-blue-100 mb-8 font-light">
                        {profile.tagline}
                    </p>
                    <div class="flex justify-center space-x-8">
                        {profile
                            .socials
                            .iter()
                            .map(|link| {
                                view! {
                                    <OutboundLink
                                        link=*link
                                        class="inline-block hover:text-blue-300 hover:scale-110 active:scale-95 transition"
                                    >
                                        <IconGlyph icon=link.icon size=28 />
                                    </OutboundLink>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </header>
    }
}
