//! Behavioral tests for the page
//!
//! BDD-style tests using given-when-then naming. They cover the literal
//! content and the styles the reveal states produce, neither of which needs
//! a DOM.
