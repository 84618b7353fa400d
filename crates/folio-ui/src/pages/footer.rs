//! Page footer

use leptos::prelude::*;

use crate::dom::current_year;

/// Copyright line for `name` in `year`.
#[must_use]
pub fn copyright(name: &str, year: u32) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[component]
pub fn Footer(name: &'static str) -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 py-8 sm:px-6 lg:px-8">
                <p class="text-center text-gray-400">{copyright(name, current_year())}</p>
            </div>
        </footer>
    }
}
