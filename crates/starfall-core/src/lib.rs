//! Starfall demo logic.
//!
//! Platform-agnostic property-animation demo: a tween engine, a sprite stage,
//! the trigger dispatcher that wires animations to controls, and the control
//! panel UI. This crate has zero platform dependencies.

// Re-exports from starfall-types (foundation types and traits).
pub use starfall_types::backend;
pub use starfall_types::bitmap_font;
pub use starfall_types::color;
pub use starfall_types::config;
pub use starfall_types::error;
pub use starfall_types::input;

pub mod anim;
pub mod dispatcher;
pub mod panel;
pub mod screen;
pub mod stage;
pub mod star;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;
