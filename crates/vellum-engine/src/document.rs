use crate::render::{Canvas, SvgContext};
use crate::scene::Drawable;

/// Ordered collection of shapes rendered to one HTML page.
///
/// Insertion order is paint order: later shapes are drawn on top.
/// Rendering never mutates the document, so it can be rendered repeatedly.
#[derive(Debug, Default)]
pub struct SvgDocument {
    drawables: Vec<Box<dyn Drawable>>,
}

impl SvgDocument {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `drawable` after every shape already in the document.
    #[inline]
    pub fn append(&mut self, drawable: impl Drawable + 'static) {
        self.drawables.push(Box::new(drawable));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Shapes in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.drawables.iter().map(|d| &**d as &dyn Drawable)
    }

    /// Renders onto the default 250×250 canvas, wrapped in an HTML page.
    pub fn render(&self) -> String {
        self.render_with(Canvas::default())
    }

    /// Renders onto `canvas`, wrapped in an HTML page.
    pub fn render_with(&self, canvas: Canvas) -> String {
        self.draw_all(canvas).html_string()
    }

    /// Renders onto the default canvas without the HTML envelope.
    pub fn render_svg(&self) -> String {
        self.draw_all(Canvas::default()).svg_string()
    }

    fn draw_all(&self, canvas: Canvas) -> SvgContext {
        let mut ctx = SvgContext::with_canvas(canvas);
        for drawable in &self.drawables {
            drawable.draw(&mut ctx);
        }
        log::debug!(
            "rendered {} shape(s) onto {}x{} canvas",
            ctx.len(),
            canvas.width,
            canvas.height
        );
        ctx
    }
}

impl FromIterator<Box<dyn Drawable>> for SvgDocument {
    fn from_iter<I: IntoIterator<Item = Box<dyn Drawable>>>(iter: I) -> Self {
        Self { drawables: iter.into_iter().collect() }
    }
}

impl Extend<Box<dyn Drawable>> for SvgDocument {
    fn extend<I: IntoIterator<Item = Box<dyn Drawable>>>(&mut self, iter: I) {
        self.drawables.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::paint::{Color, PaletteKey};
    use crate::scene::{Circle, Rectangle};

    const EMPTY_PAGE: &str =
        "<!DOCTYPE html><html><body><svg width='250' height='250'></svg></body></html>";

    // ── empty ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_document_renders_bare_canvas() {
        let doc = SvgDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.render(), EMPTY_PAGE);
        assert_eq!(doc.render_svg(), "<svg width='250' height='250'></svg>");
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn shapes_render_in_insertion_order() {
        let mut doc = SvgDocument::new();
        doc.append(Rectangle::default());
        doc.append(Circle::default());

        let html = doc.render();
        let rect_at = html.find("<rect").unwrap();
        let circle_at = html.find("<circle").unwrap();
        assert!(rect_at < circle_at);
    }

    #[test]
    fn demo_document_output() {
        let mut doc = SvgDocument::new();
        doc.append(Rectangle::default());
        doc.append(Circle::default());

        assert_eq!(
            doc.render(),
            "<!DOCTYPE html><html><body><svg width='250' height='250'>\
             <rect x='110.0' y='10.0' width='100.0' height='130.0' stroke='teal' fill='aqua' stroke-width='5' />\
             <circle cx='80.0' cy='160.0' r='60.0' stroke='red' fill='yellow' stroke-width='5' />\
             </svg></body></html>"
        );
    }

    // ── repeat renders ────────────────────────────────────────────────────

    #[test]
    fn render_is_idempotent() {
        let mut doc = SvgDocument::new();
        doc.append(Circle::default());
        doc.append(Rectangle::new(1.0, 2.0, 3.0, 4.0));

        assert_eq!(doc.render(), doc.render());
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn captured_output_ignores_later_mutation() {
        let mut circle = Circle::default();

        let mut first = SvgDocument::new();
        first.append(circle.clone());
        let before = first.render();

        circle.fill_color = Color::from_gray(128);
        let mut second = SvgDocument::new();
        second.append(circle);
        let after = second.render();

        assert!(before.contains("fill='yellow'"));
        assert!(after.contains("fill='#808080'"));
        assert_eq!(before, first.render());
    }

    #[test]
    fn render_with_custom_canvas() {
        let mut doc = SvgDocument::new();
        doc.append(Circle::new(Point::new(1.0, 1.0), 1.0));

        let html = doc.render_with(Canvas::new(640, 480));
        assert!(html.contains("<svg width='640' height='480'>"));
    }

    #[test]
    fn collect_from_boxed_drawables() {
        let shapes: Vec<Box<dyn Drawable>> = vec![
            Box::new(Circle::default().with_fill(Color::Named(PaletteKey::Lime))),
            Box::new(Rectangle::default()),
        ];
        let mut doc: SvgDocument = shapes.into_iter().collect();
        doc.extend([Box::new(Circle::default()) as Box<dyn Drawable>]);

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.iter().count(), 3);

        let svg = doc.render_svg();
        assert!(svg.find("fill='lime'").unwrap() < svg.find("<rect").unwrap());
    }
}
