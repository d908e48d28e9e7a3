//! Markup rendering.
//!
//! Contexts implement [`DrawingContext`](crate::scene::DrawingContext) and turn
//! each shape into one text fragment, kept in draw order.
//!
//! Convention:
//! - attributes use single-quote delimiters
//! - floats go through [`Decimal`], integers print as plain decimals

mod canvas;
mod number;
mod svg;

pub use canvas::Canvas;
pub use number::Decimal;
pub use svg::SvgContext;
