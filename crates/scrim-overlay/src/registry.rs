#![forbid(unsafe_code)]

//! The overlay registry: an ordered stack of open overlay entries.

use std::fmt;

use scrim_core::geometry::Rect;
use scrim_render::surface::Surface;

/// Unique identifier for an open overlay entry.
///
/// Ids are caller-supplied. They are expected — but not enforced — to be
/// unique among currently open entries; see [`OverlayStack::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

impl OverlayId {
    /// Create a new overlay ID from a raw value.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

/// Something the portal can render as an overlay's content.
///
/// Implementations are opaque to the registry; the stack never inspects or
/// mutates content, it only carries it to the portal renderer.
pub trait OverlayContent {
    /// Preferred content size within the available area.
    ///
    /// The portal clamps the result to the available area and to the
    /// entry's `max_width` hint.
    fn measure(&self, avail: Rect) -> (u16, u16);

    /// Render into the given content area.
    fn render(&self, area: Rect, surface: &mut Surface);
}

/// Chrome/backdrop treatment for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayVariant {
    /// Dimmed backdrop behind the content.
    #[default]
    Default,
    /// No backdrop dimming; the content is composited as-is.
    ///
    /// A bare entry still owns its backdrop region for click dismissal.
    Bare,
}

/// Presentation hints supplied at `open` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayHints {
    /// Maximum content width in columns, if constrained.
    pub max_width: Option<u16>,
    /// Chrome/backdrop treatment.
    pub variant: OverlayVariant,
}

impl OverlayHints {
    /// Create default hints.
    pub const fn new() -> Self {
        Self {
            max_width: None,
            variant: OverlayVariant::Default,
        }
    }

    /// Constrain the content width.
    #[must_use]
    pub const fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the chrome/backdrop variant.
    #[must_use]
    pub const fn variant(mut self, variant: OverlayVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// One open overlay: id, content, and presentation hints.
pub struct OverlayEntry {
    /// Caller-supplied identifier.
    pub id: OverlayId,
    /// Opaque renderable content.
    pub content: Box<dyn OverlayContent>,
    /// Presentation hints.
    pub hints: OverlayHints,
}

impl OverlayEntry {
    /// Create an entry from its parts.
    pub fn new(id: OverlayId, content: Box<dyn OverlayContent>, hints: OverlayHints) -> Self {
        Self { id, content, hints }
    }
}

impl fmt::Debug for OverlayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayEntry")
            .field("id", &self.id)
            .field("hints", &self.hints)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of open overlays; the single source of truth.
///
/// Insertion order is stacking order: the entry opened last renders on top.
/// Only two operations mutate the stack — [`open`](Self::open) appends and
/// [`close`](Self::close) filter-removes — and no entry is ever mutated in
/// place.
#[derive(Debug, Default)]
pub struct OverlayStack {
    entries: Vec<OverlayEntry>,
}

impl OverlayStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the top of the stack.
    ///
    /// Duplicate ids are deliberately not rejected: reopening an id that is
    /// already present adds a second entry, and a single [`close`](Self::close)
    /// then removes both. The hazard is logged so misuse is visible.
    pub fn open(&mut self, entry: OverlayEntry) {
        if self.contains(entry.id) {
            #[cfg(feature = "tracing")]
            tracing::warn!(id = entry.id.0, "opening an id that is already open");
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(id = entry.id.0, depth = self.entries.len() + 1, "overlay opened");
        self.entries.push(entry);
    }

    /// Remove every entry whose id matches.
    ///
    /// A filter, not a single-delete: all matching entries go. Closing an
    /// absent id is a benign no-op, never an error — a boundary controller
    /// may race a close against an entry that is already gone. Returns the
    /// number of entries removed.
    pub fn close(&mut self, id: OverlayId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = before - self.entries.len();
        #[cfg(feature = "tracing")]
        tracing::trace!(id = id.0, removed, "overlay closed");
        removed
    }

    /// Read-only ordered view of the open entries, bottom first.
    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    /// Ids of the open entries in stacking order.
    pub fn ids(&self) -> impl Iterator<Item = OverlayId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Whether an entry with this id is open.
    pub fn contains(&self, id: OverlayId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Number of open entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Content stub that paints a single character over its area.
    #[derive(Debug, Clone, Copy)]
    pub struct Fill {
        pub ch: char,
        pub width: u16,
        pub height: u16,
    }

    impl Fill {
        pub fn new(ch: char, width: u16, height: u16) -> Self {
            Self { ch, width, height }
        }
    }

    impl OverlayContent for Fill {
        fn measure(&self, _avail: Rect) -> (u16, u16) {
            (self.width, self.height)
        }

        fn render(&self, area: Rect, surface: &mut Surface) {
            surface.fill(area, scrim_render::cell::Cell::from_char(self.ch));
        }
    }

    pub fn entry(id: u64, ch: char) -> OverlayEntry {
        OverlayEntry::new(
            OverlayId::new(id),
            Box::new(Fill::new(ch, 10, 4)),
            OverlayHints::new(),
        )
    }
}
