#![forbid(unsafe_code)]

//! The portal renderer: render-target indirection for the overlay stack.
//!
//! A [`Portal`] holds a target rectangle that sits outside the host's
//! normal widget tree — in a terminal, the screen surface composited after
//! the base scene. Every render pass repaints the full entry list in stack
//! order; stacking comes from array order alone, there is no z-index field.

use scrim_core::geometry::Rect;
use scrim_render::hit::{HitGrid, HitId, HitRegion};
use scrim_render::surface::Surface;

use crate::boundary::Boundary;
use crate::registry::{OverlayStack, OverlayVariant};

/// Tunables for overlay placement and backdrop treatment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalConfig {
    /// Color scale applied to everything beneath a backdrop.
    pub dim_factor: f32,
    /// Minimum gap between the target edge and overlay content.
    pub margin: u16,
    /// Width cap applied when an entry carries no `max_width` hint.
    pub default_max_width: u16,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            dim_factor: 0.4,
            margin: 1,
            default_max_width: 60,
        }
    }
}

/// Renders the overlay stack at a fixed render target.
#[derive(Debug, Clone)]
pub struct Portal {
    target: Rect,
    config: PortalConfig,
}

impl Portal {
    /// Create a portal rendering at the given target rectangle.
    pub fn new(target: Rect) -> Self {
        Self {
            target,
            config: PortalConfig::default(),
        }
    }

    /// Override the placement configuration.
    #[must_use]
    pub fn with_config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    /// The render target.
    pub const fn target(&self) -> Rect {
        self.target
    }

    /// Move the render target (e.g. after a terminal resize).
    pub fn set_target(&mut self, target: Rect) {
        self.target = target;
    }

    /// Composite every stack entry onto the surface, bottom first.
    ///
    /// For each entry: dim the backdrop (unless the entry is
    /// [`OverlayVariant::Bare`]), render the content centered within the
    /// target, and register backdrop + content hit regions. Because entries
    /// paint and register in stack order, the topmost entry both draws last
    /// and wins hit testing.
    ///
    /// Returns one [`Boundary`] per entry, in the same order as the stack.
    pub fn render(
        &self,
        stack: &OverlayStack,
        surface: &mut Surface,
        hits: &mut HitGrid,
    ) -> Vec<Boundary> {
        hits.clear();
        let mut boundaries = Vec::with_capacity(stack.len());

        for entry in stack.entries() {
            if entry.hints.variant == OverlayVariant::Default {
                surface.dim(self.target, self.config.dim_factor);
            }

            let avail = self.target.inner(self.config.margin.into());
            let (want_w, want_h) = entry.content.measure(avail);
            let max_w = entry
                .hints
                .max_width
                .unwrap_or(self.config.default_max_width)
                .min(avail.width);
            let content_rect = self
                .target
                .centered(want_w.min(max_w), want_h.min(avail.height));

            entry.content.render(content_rect, surface);

            let owner = HitId::new(entry.id.0);
            hits.register(self.target, owner, HitRegion::Backdrop);
            hits.register(content_rect, owner, HitRegion::Content);

            boundaries.push(Boundary::new(entry.id, self.target, content_rect));
        }

        boundaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::test_support::Fill;
    use crate::registry::{OverlayEntry, OverlayHints, OverlayId};

    fn setup() -> (Portal, Surface, HitGrid) {
        let target = Rect::new(0, 0, 40, 12);
        (Portal::new(target), Surface::new(40, 12), HitGrid::new(40, 12))
    }

    fn entry_with(id: u64, ch: char, hints: OverlayHints) -> OverlayEntry {
        OverlayEntry::new(OverlayId::new(id), Box::new(Fill::new(ch, 10, 4)), hints)
    }

    #[test]
    fn renders_content_centered() {
        let (portal, mut surface, mut hits) = setup();
        let mut stack = OverlayStack::new();
        stack.open(entry_with(1, 'x', OverlayHints::new()));

        let boundaries = portal.render(&stack, &mut surface, &mut hits);

        assert_eq!(boundaries.len(), 1);
        let content = boundaries[0].content;
        assert_eq!(content, Rect::new(15, 4, 10, 4));
        assert_eq!(surface.get(15, 4).unwrap().ch, 'x');
        assert_eq!(surface.get(24, 7).unwrap().ch, 'x');
        // One past the content edge is backdrop, not content.
        assert_eq!(surface.get(25, 4).unwrap().ch, ' ');
    }

    #[test]
    fn max_width_hint_clamps_content() {
        let (portal, mut surface, mut hits) = setup();
        let mut stack = OverlayStack::new();
        stack.open(entry_with(1, 'x', OverlayHints::new().max_width(4)));

        let boundaries = portal.render(&stack, &mut surface, &mut hits);
        assert_eq!(boundaries[0].content.width, 4);
    }

    #[test]
    fn later_entries_render_on_top() {
        let (portal, mut surface, mut hits) = setup();
        let mut stack = OverlayStack::new();
        stack.open(entry_with(1, 'a', OverlayHints::new()));
        stack.open(entry_with(2, 'b', OverlayHints::new()));

        portal.render(&stack, &mut surface, &mut hits);

        // Both entries are the same size and centered, so entry 2 paints
        // over entry 1 completely.
        assert_eq!(surface.get(20, 6).unwrap().ch, 'b');
        // Hit grid agrees: the topmost entry owns both regions.
        assert_eq!(
            hits.hit_test(20, 6),
            Some((HitId::new(2), HitRegion::Content))
        );
        assert_eq!(
            hits.hit_test(0, 0),
            Some((HitId::new(2), HitRegion::Backdrop))
        );
    }

    #[test]
    fn bare_variant_skips_backdrop_dim() {
        use scrim_render::cell::{Cell, Rgba};

        let (portal, mut surface, mut hits) = setup();
        let mut bright = Cell::from_char('o');
        bright.fg = Rgba::rgb(200, 200, 200);
        surface.set(0, 0, bright);

        let mut stack = OverlayStack::new();
        stack.open(entry_with(
            1,
            'x',
            OverlayHints::new().variant(OverlayVariant::Bare),
        ));
        portal.render(&stack, &mut surface, &mut hits);

        // Base scene cell outside the content is untouched.
        assert_eq!(surface.get(0, 0).unwrap().fg, Rgba::rgb(200, 200, 200));
        // But the bare entry still owns a backdrop region for dismissal.
        assert_eq!(
            hits.hit_test(0, 0),
            Some((HitId::new(1), HitRegion::Backdrop))
        );
    }

    #[test]
    fn default_variant_dims_backdrop() {
        use scrim_render::cell::{Cell, Rgba};

        let (portal, mut surface, mut hits) = setup();
        let mut bright = Cell::from_char('o');
        bright.fg = Rgba::rgb(200, 200, 200);
        surface.set(0, 0, bright);

        let mut stack = OverlayStack::new();
        stack.open(entry_with(1, 'x', OverlayHints::new()));
        portal.render(&stack, &mut surface, &mut hits);

        let after = surface.get(0, 0).unwrap().fg;
        assert_ne!(after, Rgba::rgb(200, 200, 200));
    }

    #[test]
    fn empty_stack_renders_nothing() {
        let (portal, mut surface, mut hits) = setup();
        let stack = OverlayStack::new();
        let boundaries = portal.render(&stack, &mut surface, &mut hits);
        assert!(boundaries.is_empty());
        assert!(surface.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(hits.hit_test(0, 0), None);
    }

    #[test]
    fn render_clears_stale_hit_regions() {
        let (portal, mut surface, mut hits) = setup();
        let mut stack = OverlayStack::new();
        stack.open(entry_with(1, 'x', OverlayHints::new()));
        portal.render(&stack, &mut surface, &mut hits);

        stack.close(OverlayId::new(1));
        portal.render(&stack, &mut surface, &mut hits);
        assert_eq!(hits.hit_test(0, 0), None);
    }
}
