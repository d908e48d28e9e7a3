//! Plain geometry values used by shapes.
//!
//! Canvas space:
//! - SVG user units
//! - Origin top-left
//! - +X right, +Y down

mod point;
mod size;

pub use point::Point;
pub use size::Size;
