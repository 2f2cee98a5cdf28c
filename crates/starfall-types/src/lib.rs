//! Foundation types and traits for Starfall.
//!
//! This crate contains the platform-agnostic types shared by all starfall
//! crates: colors, input events, backend trait definitions, configuration,
//! and error types.

pub mod backend;
pub mod bitmap_font;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
