use crate::scene::{Circle, DrawingContext, Rectangle};

use super::{Canvas, Decimal};

const HTML_OPEN: &str = "<!DOCTYPE html><html><body>";
const HTML_CLOSE: &str = "</body></html>";

/// Accumulates SVG fragments for one render pass.
///
/// Each draw call reads the shape's fields immediately and appends one
/// fragment; later changes to the shape do not reach fragments already recorded.
///
/// Assembling the document does not consume or lock the context: calling
/// [`svg_string`](Self::svg_string) again re-joins the same fragments.
#[derive(Debug, Default)]
pub struct SvgContext {
    commands: Vec<String>,
    canvas: Canvas,
}

impl SvgContext {
    /// Context with the default 250×250 canvas.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self { commands: Vec::new(), canvas }
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Recorded fragments in draw order.
    #[inline]
    pub fn fragments(&self) -> &[String] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops recorded fragments. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// `<svg>` element wrapping every fragment in append order.
    pub fn svg_string(&self) -> String {
        let Canvas { width, height } = self.canvas;
        log::trace!("assembling svg: {} fragment(s), {width}x{height}", self.commands.len());

        let mut output = format!("<svg width='{width}' height='{height}'>");
        for command in &self.commands {
            output.push_str(command);
        }
        output.push_str("</svg>");
        output
    }

    /// [`svg_string`](Self::svg_string) inside a minimal HTML page.
    pub fn html_string(&self) -> String {
        let svg = self.svg_string();
        let mut output = String::with_capacity(HTML_OPEN.len() + svg.len() + HTML_CLOSE.len());
        output.push_str(HTML_OPEN);
        output.push_str(&svg);
        output.push_str(HTML_CLOSE);
        output
    }
}

impl DrawingContext for SvgContext {
    fn draw_circle(&mut self, circle: &Circle) {
        self.commands.push(format!(
            "<circle cx='{}' cy='{}' r='{}' stroke='{}' fill='{}' stroke-width='{}' />",
            Decimal(circle.center.x),
            Decimal(circle.center.y),
            Decimal(circle.radius),
            circle.stroke_color,
            circle.fill_color,
            circle.stroke_width,
        ));
    }

    fn draw_rectangle(&mut self, rectangle: &Rectangle) {
        self.commands.push(format!(
            "<rect x='{}' y='{}' width='{}' height='{}' stroke='{}' fill='{}' stroke-width='{}' />",
            Decimal(rectangle.origin.x),
            Decimal(rectangle.origin.y),
            Decimal(rectangle.size.width),
            Decimal(rectangle.size.height),
            rectangle.stroke_color,
            rectangle.fill_color,
            rectangle.stroke_width,
        ));
    }
}
