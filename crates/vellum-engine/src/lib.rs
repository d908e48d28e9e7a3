//! Vellum engine crate.
//!
//! Colors, drawable shapes and the context that turns them into SVG markup.
//!
//! ```
//! use vellum_engine::document::SvgDocument;
//! use vellum_engine::scene::{Circle, Rectangle};
//!
//! let mut doc = SvgDocument::new();
//! doc.append(Rectangle::default());
//! doc.append(Circle::default());
//!
//! let html = doc.render();
//! assert!(html.starts_with("<!DOCTYPE html><html><body><svg width='250' height='250'><rect "));
//! ```

pub mod coords;
pub mod document;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
