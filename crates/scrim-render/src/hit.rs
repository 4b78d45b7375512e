#![forbid(unsafe_code)]

//! Hit testing grid for pointer routing.
//!
//! The portal renderer registers a region for every cell it paints; a
//! pointer event is then resolved by a single lookup. Because later
//! registrations overwrite earlier ones, the entry drawn last — the top of
//! the overlay stack — always wins, which is exactly the stacking rule the
//! boundary controller needs.

use scrim_core::geometry::Rect;

/// Identifier for the overlay (or widget) that registered a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u64);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Region classes an overlay registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// The dismissal area surrounding an overlay's content.
    Backdrop,
    /// The overlay's own content area.
    Content,
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    /// Who registered this cell, if anyone.
    pub owner: Option<HitId>,
    /// Region tag for the hit area.
    pub region: HitRegion,
}

impl HitCell {
    /// Create a populated hit cell.
    #[inline]
    pub const fn new(owner: HitId, region: HitRegion) -> Self {
        Self {
            owner: Some(owner),
            region,
        }
    }

    /// Check if the cell is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.owner.is_none()
    }
}

/// Maps screen positions to the overlay that owns them.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![HitCell::default(); size],
        }
    }

    /// Grid width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the hit cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&HitCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Register a region. All cells in the rectangle map to `(owner, region)`.
    ///
    /// Overwrites previous registrations, so callers register in paint order
    /// (bottom of the stack first).
    pub fn register(&mut self, rect: Rect, owner: HitId, region: HitRegion) {
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize);
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize);
        if rect.x as usize >= x_end || rect.y as usize >= y_end {
            return;
        }

        let cell = HitCell::new(owner, region);
        for y in rect.y as usize..y_end {
            let row = y * self.width as usize;
            self.cells[row + rect.x as usize..row + x_end].fill(cell);
        }
    }

    /// Hit test at the given position.
    ///
    /// Returns the owner and region registered at (x, y), if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion)> {
        self.get(x, y)
            .and_then(|cell| cell.owner.map(|id| (id, cell.region)))
    }

    /// Clear all registrations.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}
