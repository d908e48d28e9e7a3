use crate::coords::{Point, Size};
use crate::paint::{Color, PaletteKey};
use crate::scene::{Drawable, DrawingContext};

use super::DEFAULT_STROKE_WIDTH;

/// Axis-aligned rectangle with stroke and fill (top-left origin).
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub stroke_width: i32,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub origin: Point,
    pub size: Size,
}

impl Default for Rectangle {
    /// Teal outline, aqua fill, 100×130 at (110, 10).
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: Color::Named(PaletteKey::Teal),
            fill_color: Color::Named(PaletteKey::Aqua),
            origin: Point::new(110.0, 10.0),
            size: Size::new(100.0, 130.0),
        }
    }
}

impl Rectangle {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_origin_size(Point::new(x, y), Size::new(width, height))
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size, ..Self::default() }
    }

    #[inline]
    pub fn with_stroke(mut self, width: i32, color: Color) -> Self {
        self.stroke_width = width;
        self.stroke_color = color;
        self
    }

    #[inline]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }
}

impl Drawable for Rectangle {
    #[inline]
    fn draw(&self, ctx: &mut dyn DrawingContext) {
        ctx.draw_rectangle(self);
    }
}
