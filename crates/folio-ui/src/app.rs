//! Main application component
//!
//! Provides the page configuration to every component and renders the
//! single portfolio page.

use leptos::prelude::*;

use crate::config::site_config;
use crate::pages::Home;

/// Root component; loads configuration and mounts the page.
#[component]
pub fn App() -> impl IntoView {
    provide_context(site_config());

    view! { <Home /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }
}
