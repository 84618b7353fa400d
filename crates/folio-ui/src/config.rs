//! Page configuration, embedded at compile time from `folio.toml`.

use folio_core::FolioConfig;

/// Raw text of the bundled configuration.
pub const EMBEDDED_CONFIG: &str = include_str!("../folio.toml");

/// Parse the bundled configuration, falling back to defaults on error.
///
/// The page always renders: a bad file is reported to the console and the
/// built-in defaults are used instead.
#[must_use]
pub fn site_config() -> FolioConfig {
    match FolioConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("Invalid folio.toml, using defaults: {e}").into());
            FolioConfig::default()
        }
    }
}
