#![forbid(unsafe_code)]

//! Drawing helpers shared by overlay chrome and widgets.

use scrim_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::cell::{Cell, Style};
use crate::surface::Surface;

/// Characters used to draw a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Light box-drawing characters.
    pub const LIGHT: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// ASCII fallback.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// Draw a text span at the given position, clipped at `max_x` (exclusive).
///
/// Returns the x position after the last drawn grapheme. Wide graphemes
/// that would straddle the clip edge are dropped whole.
pub fn draw_text(
    surface: &mut Surface,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x as usize + w > max_x as usize {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            cell.apply(style);
            surface.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Draw a rectangular border just inside `rect`.
///
/// Rectangles narrower or shorter than two cells are skipped; there is no
/// room for a frame.
pub fn draw_border(surface: &mut Surface, rect: Rect, chars: BorderChars, style: Style) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let styled = |ch: char| {
        let mut cell = Cell::from_char(ch);
        cell.apply(style);
        cell
    };

    for x in rect.x + 1..right {
        surface.set(x, rect.y, styled(chars.horizontal));
        surface.set(x, bottom, styled(chars.horizontal));
    }
    for y in rect.y + 1..bottom {
        surface.set(rect.x, y, styled(chars.vertical));
        surface.set(right, y, styled(chars.vertical));
    }
    surface.set(rect.x, rect.y, styled(chars.top_left));
    surface.set(right, rect.y, styled(chars.top_right));
    surface.set(rect.x, bottom, styled(chars.bottom_left));
    surface.set(right, bottom, styled(chars.bottom_right));
}

/// Truncate `text` to at most `max_width` display columns.
///
/// Appends an ellipsis when anything was cut and there is room for one.
pub fn truncate_to_width(text: &str, max_width: u16) -> String {
    if UnicodeWidthStr::width(text) <= max_width as usize {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width as usize - 1;
    let mut out = String::new();
    let mut used = 0usize;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_text_basic() {
        let mut surface = Surface::new(10, 1);
        let end = draw_text(&mut surface, 0, 0, "abc", Style::default(), 10);
        assert_eq!(end, 3);
        assert_eq!(surface.row_text(0), "abc       ");
    }

    #[test]
    fn draw_text_clips_at_max_x() {
        let mut surface = Surface::new(10, 1);
        let end = draw_text(&mut surface, 0, 0, "abcdef", Style::default(), 3);
        assert_eq!(end, 3);
        assert_eq!(surface.row_text(0), "abc       ");
    }

    #[test]
    fn draw_text_drops_straddling_wide_grapheme() {
        let mut surface = Surface::new(10, 1);
        // '世' is two columns wide; with max_x = 1 it cannot fit at all.
        let end = draw_text(&mut surface, 0, 0, "世", Style::default(), 1);
        assert_eq!(end, 0);
        assert_eq!(surface.row_text(0), "          ");
    }

    #[test]
    fn border_draws_frame() {
        let mut surface = Surface::new(5, 3);
        draw_border(
            &mut surface,
            Rect::new(0, 0, 5, 3),
            BorderChars::ASCII,
            Style::default(),
        );
        assert_eq!(surface.row_text(0), "+---+");
        assert_eq!(surface.row_text(1), "|   |");
        assert_eq!(surface.row_text(2), "+---+");
    }

    #[test]
    fn border_skips_degenerate_rects() {
        let mut surface = Surface::new(5, 3);
        draw_border(
            &mut surface,
            Rect::new(0, 0, 1, 3),
            BorderChars::ASCII,
            Style::default(),
        );
        assert!(surface.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn truncate_passes_short_text_through() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
