#![forbid(unsafe_code)]

//! Bordered modal content for the overlay stack.

use scrim_core::geometry::Rect;
use scrim_overlay::OverlayContent;
use scrim_render::cell::{Style, StyleFlags};
use scrim_render::draw::{draw_border, draw_text, truncate_to_width, BorderChars};
use scrim_render::surface::Surface;
use unicode_width::UnicodeWidthStr;

/// A titled, bordered text panel.
///
/// Measures itself from its body lines plus one cell of horizontal padding
/// inside the border. The title is embedded in the top border run and
/// truncated with an ellipsis when the panel is narrower than the text.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    title: Option<String>,
    body: Vec<String>,
    border: Option<BorderChars>,
}

impl Modal {
    /// Create an empty modal.
    pub fn new() -> Self {
        Self {
            title: None,
            body: Vec::new(),
            border: Some(BorderChars::LIGHT),
        }
    }

    /// Set the title shown in the top border.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append one body line.
    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Set the body from newline-separated text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.body = text.into().lines().map(str::to_string).collect();
        self
    }

    /// Use a different border character set.
    #[must_use]
    pub fn border(mut self, border: BorderChars) -> Self {
        self.border = Some(border);
        self
    }

    fn content_width(&self) -> u16 {
        let body = self
            .body
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0);
        let title = self
            .title
            .as_deref()
            .map(|t| UnicodeWidthStr::width(t) + 2)
            .unwrap_or(0);
        body.max(title).min(u16::MAX as usize) as u16
    }
}

impl OverlayContent for Modal {
    fn measure(&self, avail: Rect) -> (u16, u16) {
        // Border plus one cell of horizontal padding on each side.
        let width = self.content_width().saturating_add(4).min(avail.width);
        let height = (self.body.len() as u16).saturating_add(2).min(avail.height);
        (width, height)
    }

    fn render(&self, area: Rect, surface: &mut Surface) {
        if area.is_empty() {
            return;
        }
        if let Some(border) = self.border {
            draw_border(surface, area, border, Style::new());
        }
        if let Some(title) = self.title.as_deref() {
            if area.width > 4 && area.height >= 1 {
                let label = format!(" {} ", truncate_to_width(title, area.width - 4));
                draw_text(
                    surface,
                    area.x + 1,
                    area.y,
                    &label,
                    Style::new().attrs(StyleFlags::BOLD),
                    area.right().saturating_sub(1),
                );
            }
        }

        let inner_left = area.x.saturating_add(2);
        let inner_right = area.right().saturating_sub(2);
        for (i, line) in self.body.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y + 1 >= area.bottom() {
                break;
            }
            draw_text(surface, inner_left, y, line, Style::new(), inner_right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_fits_widest_line_plus_chrome() {
        let modal = Modal::new().line("short").line("a longer line");
        let avail = Rect::new(0, 0, 80, 24);
        // 13 columns of text + 2 border + 2 padding.
        assert_eq!(modal.measure(avail), (17, 4));
    }

    #[test]
    fn measure_accounts_for_title() {
        let modal = Modal::new().title("A rather long title").line("hi");
        let (w, _) = modal.measure(Rect::new(0, 0, 80, 24));
        // Title width 19 + 2 spaces + 2 border + 2 padding.
        assert_eq!(w, 25);
    }

    #[test]
    fn measure_clamps_to_available_space() {
        let modal = Modal::new().line("x".repeat(200));
        assert_eq!(modal.measure(Rect::new(0, 0, 40, 3)), (40, 3));
    }

    #[test]
    fn render_draws_border_title_and_body() {
        let modal = Modal::new().title("Hi").text("one\ntwo");
        let area = Rect::new(0, 0, 10, 4);
        let mut surface = Surface::new(10, 4);
        modal.render(area, &mut surface);

        assert_eq!(surface.row_text(0), "┌ Hi ────┐");
        assert_eq!(surface.row_text(1), "│ one    │");
        assert_eq!(surface.row_text(2), "│ two    │");
        assert_eq!(surface.row_text(3), "└────────┘");
    }

    #[test]
    fn render_truncates_long_title() {
        let modal = Modal::new().title("a very long title");
        let area = Rect::new(0, 0, 10, 2);
        let mut surface = Surface::new(10, 2);
        modal.render(area, &mut surface);
        assert_eq!(surface.row_text(0), "┌ a ver… ┐");
    }

    #[test]
    fn render_clips_body_to_area() {
        let modal = Modal::new().text("one\ntwo\nthree\nfour");
        let area = Rect::new(0, 0, 12, 4);
        let mut surface = Surface::new(12, 4);
        modal.render(area, &mut surface);
        // Only two body rows fit between the border rows.
        assert_eq!(surface.row_text(1), "│ one      │");
        assert_eq!(surface.row_text(2), "│ two      │");
        assert_eq!(surface.row_text(3), "└──────────┘");
    }

    #[test]
    fn render_skips_empty_area() {
        let modal = Modal::new().line("x");
        let mut surface = Surface::new(5, 5);
        modal.render(Rect::new(0, 0, 0, 0), &mut surface);
        assert!(surface.cells().iter().all(|c| c.ch == ' '));
    }
}
