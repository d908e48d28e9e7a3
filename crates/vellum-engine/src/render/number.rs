use core::fmt;

/// Markup text for a float attribute.
///
/// Shortest text that round-trips, always with a fractional part for integral
/// values (`80.0`). Non-finite values print as `NaN`, `inf` and `-inf`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
