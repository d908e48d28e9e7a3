/// Output canvas size written on the `<svg>` element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const DEFAULT_WIDTH: u32 = 250;
    pub const DEFAULT_HEIGHT: u32 = 250;

    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}
