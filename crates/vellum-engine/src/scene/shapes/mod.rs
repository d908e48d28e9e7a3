pub(crate) mod circle;
pub(crate) mod rect;

pub use circle::Circle;
pub use rect::Rectangle;

/// Stroke width shared by the default shapes.
pub const DEFAULT_STROKE_WIDTH: i32 = 5;
