use super::shapes::{Circle, Rectangle};

/// Receiver of shape draw calls.
///
/// One method per concrete shape kind, so every context decides the markup
/// for each shape without inspecting types at runtime.
pub trait DrawingContext {
    fn draw_circle(&mut self, circle: &Circle);
    fn draw_rectangle(&mut self, rectangle: &Rectangle);
}

/// A value that can render itself into a [`DrawingContext`].
///
/// Implementations only identify themselves: they call the context method
/// for their own kind and pass `self`.
pub trait Drawable: core::fmt::Debug {
    fn draw(&self, ctx: &mut dyn DrawingContext);
}
