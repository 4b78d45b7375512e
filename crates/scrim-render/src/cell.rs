#![forbid(unsafe_code)]

//! Cells, colors, and styles.

use bitflags::bitflags;

/// A packed RGB color.
///
/// Stored as `0x00RRGGBB`. The terminal backend decides how (or whether)
/// to downsample for limited color profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Create a color from red, green, and blue components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Scale all components toward black by `factor` in `[0.0, 1.0]`.
    ///
    /// Used for backdrop dimming: the content underneath stays legible but
    /// recedes behind the overlay.
    pub fn scaled(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * factor).round() as u8;
        Self::rgb(scale(self.r()), scale(self.g()), scale(self.b()))
    }
}

bitflags! {
    /// Text attribute flags for a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const REVERSE = 1 << 3;
    }
}

/// A style to apply while drawing.
///
/// `None` fields leave the corresponding cell property untouched, so
/// styles layer the way overlay drawing needs them to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Rgba>,
    /// Background color, if set.
    pub bg: Option<Rgba>,
    /// Attribute flags to OR into the cell.
    pub attrs: StyleFlags,
}

impl Style {
    /// Create an empty style.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Rgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Check if the style changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character displayed in this cell.
    pub ch: char,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgba::rgb(255, 255, 255),
            bg: Rgba::rgb(0, 0, 0),
            attrs: StyleFlags::empty(),
        }
    }
}

impl Cell {
    /// Create a cell from a character with default colors.
    pub fn from_char(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    /// Apply a style to this cell, leaving unset properties untouched.
    pub fn apply(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = fg;
        }
        if let Some(bg) = style.bg {
            self.bg = bg;
        }
        self.attrs |= style.attrs;
    }

    /// Check if the cell is a blank space with no attributes.
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.attrs.is_empty()
    }
}
