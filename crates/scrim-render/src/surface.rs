#![forbid(unsafe_code)]

//! The cell grid overlays composite into.

use scrim_core::geometry::Rect;

use crate::cell::{Cell, Style, StyleFlags};

/// A flat grid of cells acting as the overlay render target.
///
/// The surface sits outside the host application's widget tree: the portal
/// renderer paints every open overlay here, in stack order, after the base
/// scene has been drawn. Out-of-bounds writes are silently dropped.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    /// Create a new surface filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Surface width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Surface height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The surface bounds as a rectangle at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill a rectangle with copies of a cell, clipped to the surface.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let Some(clipped) = rect.intersection_opt(&self.bounds()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            let row = y as usize * self.width as usize;
            let start = row + clipped.x as usize;
            let end = row + clipped.right() as usize;
            self.cells[start..end].fill(cell);
        }
    }

    /// Apply a style to every cell in a rectangle, preserving content.
    pub fn set_style(&mut self, rect: Rect, style: Style) {
        if style.is_empty() {
            return;
        }
        let Some(clipped) = rect.intersection_opt(&self.bounds()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.apply(style);
                }
            }
        }
    }

    /// Dim every cell in a rectangle.
    ///
    /// Scales colors toward black and sets the DIM attribute; content
    /// underneath a backdrop stays readable but visibly recedes.
    pub fn dim(&mut self, rect: Rect, factor: f32) {
        let Some(clipped) = rect.intersection_opt(&self.bounds()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.fg = cell.fg.scaled(factor);
                    cell.bg = cell.bg.scaled(factor);
                    cell.attrs |= StyleFlags::DIM;
                }
            }
        }
    }

    /// Reset all cells to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The characters of one row as a `String`.
    ///
    /// Testing and headless-demo helper; colors and attributes are ignored.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let row = y as usize * self.width as usize;
        self.cells[row..row + self.width as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Rgba;

    #[test]
    fn new_surface_is_blank() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.cells().len(), 12);
        assert!(surface.cells().iter().all(Cell::is_blank));
        assert_eq!(surface.row_text(0), "    ");
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut surface = Surface::new(4, 3);
        surface.set(2, 1, Cell::from_char('X'));
        assert_eq!(surface.get(2, 1).unwrap().ch, 'X');
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut surface = Surface::new(4, 3);
        surface.set(10, 10, Cell::from_char('X'));
        assert!(surface.get(10, 10).is_none());
        assert!(surface.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn fill_clips_to_bounds() {
        let mut surface = Surface::new(4, 4);
        surface.fill(Rect::new(2, 2, 10, 10), Cell::from_char('#'));
        assert_eq!(surface.row_text(2), "  ##");
        assert_eq!(surface.row_text(3), "  ##");
        assert_eq!(surface.row_text(0), "    ");
    }

    #[test]
    fn fill_outside_bounds_is_noop() {
        let mut surface = Surface::new(4, 4);
        surface.fill(Rect::new(20, 20, 3, 3), Cell::from_char('#'));
        assert!(surface.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn dim_scales_colors_and_flags() {
        let mut surface = Surface::new(2, 1);
        let mut bright = Cell::from_char('A');
        bright.fg = Rgba::rgb(200, 100, 50);
        surface.set(0, 0, bright);

        surface.dim(Rect::new(0, 0, 2, 1), 0.5);

        let cell = surface.get(0, 0).unwrap();
        assert_eq!(cell.fg, Rgba::rgb(100, 50, 25));
        assert!(cell.attrs.contains(StyleFlags::DIM));
        // Content is preserved.
        assert_eq!(cell.ch, 'A');
    }

    #[test]
    fn clear_resets_everything() {
        let mut surface = Surface::new(3, 3);
        surface.fill(Rect::new(0, 0, 3, 3), Cell::from_char('#'));
        surface.clear();
        assert!(surface.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn row_text_out_of_range_is_empty() {
        let surface = Surface::new(3, 1);
        assert_eq!(surface.row_text(5), "");
    }
}
