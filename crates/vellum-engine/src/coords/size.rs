/// Width and height in canvas units.
///
/// Negative values are representable and are passed through to markup untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for Size {
    #[inline]
    fn from((width, height): (f64, f64)) -> Self {
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_conversion_keeps_negative_extent() {
        assert_eq!(Size::from((100.0, -130.0)), Size::new(100.0, -130.0));
    }
}
