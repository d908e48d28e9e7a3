//! Drawable shapes and the double-dispatch seam they render through.
//!
//! Extending the scene:
//! - add a new shape module under `scene::shapes::*`
//! - add a matching `draw_*` method to [`DrawingContext`]
//! - implement [`Drawable`] for the shape by calling that method
//! - emit the markup in every context implementation under `render`

mod drawable;

pub mod shapes;

pub use drawable::{Drawable, DrawingContext};
pub use shapes::{Circle, Rectangle};
