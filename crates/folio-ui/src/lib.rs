//! Leptos 0.7 CSR front end for the folio portfolio page
//!
//! Renders a single static page whose sections fade and slide into view the
//! first time they are scrolled to, with their children staggered.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Reveal logic lives in `folio-core`; this crate supplies the browser
//!   host (`IntersectionObserver`, clock, frames) and the markup
//!
//! ## Module Structure
//! - `app`: Root component
//! - `config`: Embedded page configuration
//! - `components`: Reveal section, cards, icons
//! - `dom`: Browser capability adapters
//! - `models`: Page data types and literal content
//! - `pages`: Hero, page body, footer

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod models;
pub mod pages;

#[cfg(test)]
mod tests;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
