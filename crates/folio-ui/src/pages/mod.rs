//! Page components
//!
//! The site is a single page; these are its outer pieces.

pub mod footer;
pub mod hero;
pub mod home;

pub use footer::Footer;
pub use hero::Hero;
pub use home::Home;
