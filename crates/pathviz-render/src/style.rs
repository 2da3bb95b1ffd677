//! Cell colours and the [`Style`] a glyph is painted with.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A 24-bit colour packed as `0x00RRGGBB`.
///
/// The zero value is reserved: back-ends paint it with the terminal's own
/// default colour instead of pure black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Terminal default colour.
    pub const DEFAULT: Self = Self(0);

    /// Pack red, green and blue channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Whether this is the terminal default rather than a concrete colour.
    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground, background and weight of one glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    /// Draw the character in bold.
    pub bold: bool,
}

impl Style {
    /// Same style with foreground `fg`.
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Same style with background `bg`.
    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Same style in bold.
    #[inline]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}
