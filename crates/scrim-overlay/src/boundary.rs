#![forbid(unsafe_code)]

//! Per-entry click classification: backdrop (dismiss) vs content (interact).
//!
//! A [`Boundary`] is an explicit two-phase hit test: did the click land on
//! this entry's content, or only on the boundary element itself (the
//! backdrop)? Each click is classified independently; nothing persists
//! between events.

use scrim_core::geometry::Rect;
use scrim_render::hit::{HitGrid, HitId, HitRegion};

use crate::registry::OverlayId;

/// Where a click landed relative to one overlay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the entry's content.
    Content,
    /// On the backdrop surrounding the content.
    Backdrop,
    /// Outside this entry entirely.
    Outside,
}

/// What a routed click means for the overlay stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The topmost entry hit wants to be dismissed.
    Dismiss(OverlayId),
    /// The click landed on content; the entry consumes it, nothing closes.
    Consumed,
    /// No overlay region under the pointer.
    Ignored,
}

/// One entry's hit regions, captured at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// The entry these regions belong to.
    pub id: OverlayId,
    /// The dismissal region (typically the whole render target).
    pub backdrop: Rect,
    /// The entry's content rectangle, carved out of the backdrop.
    pub content: Rect,
}

impl Boundary {
    /// Create a boundary from its regions.
    pub const fn new(id: OverlayId, backdrop: Rect, content: Rect) -> Self {
        Self {
            id,
            backdrop,
            content,
        }
    }

    /// Classify a click against this entry: content first, then backdrop.
    pub fn classify(&self, x: u16, y: u16) -> ClickTarget {
        if self.content.contains(x, y) {
            ClickTarget::Content
        } else if self.backdrop.contains(x, y) {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Outside
        }
    }
}

/// Route a click through stacked boundaries, topmost first.
///
/// The first boundary the point lands in decides the outcome and stops the
/// walk — a dismiss click on the topmost entry never cascades to the
/// entries beneath it, so a close-N-then-open-N+1 chain stays intact.
///
/// `boundaries` must be in stacking order, bottom first, as produced by
/// [`crate::Portal::render`].
pub fn dispatch_click(boundaries: &[Boundary], x: u16, y: u16) -> ClickOutcome {
    for boundary in boundaries.iter().rev() {
        match boundary.classify(x, y) {
            ClickTarget::Content => return ClickOutcome::Consumed,
            ClickTarget::Backdrop => return ClickOutcome::Dismiss(boundary.id),
            ClickTarget::Outside => {}
        }
    }
    ClickOutcome::Ignored
}

/// Resolve a click through the hit grid instead of boundary rectangles.
///
/// The grid already encodes topmost-wins (later registrations overwrite
/// earlier ones), so a single lookup replaces the walk. Both paths produce
/// the same outcome for the same render pass.
pub fn dispatch_click_grid(grid: &HitGrid, x: u16, y: u16) -> ClickOutcome {
    match grid.hit_test(x, y) {
        Some((HitId(id), HitRegion::Backdrop)) => ClickOutcome::Dismiss(OverlayId::new(id)),
        Some((_, HitRegion::Content)) => ClickOutcome::Consumed,
        Some((_, HitRegion::None)) | None => ClickOutcome::Ignored,
    }
}
