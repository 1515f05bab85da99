//! Terminal output formatting
//!
//! Colored feedback letters and game messages.

pub mod display;
pub mod formatters;

pub use display::Renderer;
