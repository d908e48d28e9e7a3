//! Paint model shared by shapes and the markup context.
//!
//! Scope:
//! - named palette entries
//! - explicit 8-bit RGB colors
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, PaletteKey};
