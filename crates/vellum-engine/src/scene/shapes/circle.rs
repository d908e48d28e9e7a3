use core::f64::consts::PI;

use crate::coords::Point;
use crate::paint::{Color, PaletteKey};
use crate::scene::{Drawable, DrawingContext};

use super::DEFAULT_STROKE_WIDTH;

/// Circle with stroke and fill.
///
/// Plain data: nothing is validated, so a negative radius is carried into markup as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub stroke_width: i32,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub center: Point,
    pub radius: f64,
}

impl Default for Circle {
    /// Red outline, yellow fill, radius 60 centered at (80, 160).
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: Color::Named(PaletteKey::Red),
            fill_color: Color::Named(PaletteKey::Yellow),
            center: Point::new(80.0, 160.0),
            radius: 60.0,
        }
    }
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius, ..Self::default() }
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

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Rewrites the radius to `diameter / 2`.
    #[inline]
    pub fn set_diameter(&mut self, diameter: f64) {
        self.radius = diameter / 2.0;
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * self.radius * PI
    }

    /// Moves the center by `(dx, dy)`.
    #[inline]
    pub fn shift(&mut self, dx: f64, dy: f64) {
        self.center += Point::new(dx, dy);
    }
}

impl Drawable for Circle {
    #[inline]
    fn draw(&self, ctx: &mut dyn DrawingContext) {
        ctx.draw_circle(self);
    }
}
