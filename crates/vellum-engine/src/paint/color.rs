use core::fmt;

/// Named entry of the fixed CSS basic-color palette.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PaletteKey {
    Black,
    Silver,
    Gray,
    White,
    Maroon,
    Red,
    Purple,
    Fuchsia,
    Green,
    Lime,
    Olive,
    Yellow,
    Navy,
    Blue,
    Teal,
    Aqua,
}

impl PaletteKey {
    /// Every palette key, in declaration order.
    pub const ALL: [PaletteKey; 16] = [
        PaletteKey::Black,
        PaletteKey::Silver,
        PaletteKey::Gray,
        PaletteKey::White,
        PaletteKey::Maroon,
        PaletteKey::Red,
        PaletteKey::Purple,
        PaletteKey::Fuchsia,
        PaletteKey::Green,
        PaletteKey::Lime,
        PaletteKey::Olive,
        PaletteKey::Yellow,
        PaletteKey::Navy,
        PaletteKey::Blue,
        PaletteKey::Teal,
        PaletteKey::Aqua,
    ];

    /// Canonical lowercase name, as used in markup.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteKey::Black => "black",
            PaletteKey::Silver => "silver",
            PaletteKey::Gray => "gray",
            PaletteKey::White => "white",
            PaletteKey::Maroon => "maroon",
            PaletteKey::Red => "red",
            PaletteKey::Purple => "purple",
            PaletteKey::Fuchsia => "fuchsia",
            PaletteKey::Green => "green",
            PaletteKey::Lime => "lime",
            PaletteKey::Olive => "olive",
            PaletteKey::Yellow => "yellow",
            PaletteKey::Navy => "navy",
            PaletteKey::Blue => "blue",
            PaletteKey::Teal => "teal",
            PaletteKey::Aqua => "aqua",
        }
    }
}

impl fmt::Display for PaletteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color as written into markup.
///
/// Either a palette entry or explicit 8-bit sRGB channels. Immutable; build a
/// new value to change it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Named(PaletteKey),
    Rgb(u8, u8, u8),
}

impl Color {
    #[inline]
    pub const fn named(key: PaletteKey) -> Self {
        Color::Named(key)
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Neutral gray with all three channels set to `level`.
    #[inline]
    pub const fn from_gray(level: u8) -> Self {
        Color::Rgb(level, level, level)
    }

    /// Canonical textual form: palette name, or `#RRGGBB` in uppercase hex.
    pub fn to_text(self) -> String {
        self.to_string()
    }
}

impl From<PaletteKey> for Color {
    #[inline]
    fn from(key: PaletteKey) -> Self {
        Color::Named(key)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Named(key) => f.write_str(key.name()),
            Color::Rgb(r, g, b) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}
