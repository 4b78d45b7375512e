//! End-to-end overlay flows: handle -> service -> portal -> boundary.

use scrim_core::geometry::Rect;
use scrim_overlay::{
    ClickOutcome, OverlayContent, OverlayHandle, OverlayHints, OverlayId, OverlayService, Portal,
};
use scrim_render::cell::Cell;
use scrim_render::hit::HitGrid;
use scrim_render::surface::Surface;

/// Minimal overlay content: paints its area with one character.
struct Panel(char);

impl OverlayContent for Panel {
    fn measure(&self, _avail: Rect) -> (u16, u16) {
        (12, 5)
    }

    fn render(&self, area: Rect, surface: &mut Surface) {
        surface.fill(area, Cell::from_char(self.0));
    }
}

struct Harness {
    service: OverlayService,
    handle: OverlayHandle,
    portal: Portal,
    surface: Surface,
    hits: HitGrid,
}

impl Harness {
    fn new() -> Self {
        let (service, handle) = OverlayService::new();
        Self {
            service,
            handle,
            portal: Portal::new(Rect::new(0, 0, 60, 20)),
            surface: Surface::new(60, 20),
            hits: HitGrid::new(60, 20),
        }
    }

    /// Drain pending commands and re-render, as an event loop iteration would.
    fn settle(&mut self) -> Vec<scrim_overlay::Boundary> {
        self.service.apply_pending();
        self.surface.clear();
        self.portal
            .render(self.service.stack(), &mut self.surface, &mut self.hits)
    }

    /// Deliver a click and apply whatever it caused.
    fn click(&mut self, x: u16, y: u16) -> ClickOutcome {
        let boundaries = self.settle();
        let outcome = scrim_overlay::dispatch_click(&boundaries, x, y);
        if let ClickOutcome::Dismiss(id) = outcome {
            self.handle.close(id);
            self.service.apply_pending();
        }
        outcome
    }

    fn open_ids(&mut self) -> Vec<u64> {
        self.service.apply_pending();
        self.service.stack().ids().map(|id| id.0).collect()
    }
}

#[test]
fn open_close_sequence_keeps_insertion_order() {
    let mut h = Harness::new();

    h.handle.open(OverlayId::new(1), Panel('x'), OverlayHints::new());
    assert_eq!(h.open_ids(), vec![1]);

    h.handle.open(OverlayId::new(2), Panel('y'), OverlayHints::new());
    assert_eq!(h.open_ids(), vec![1, 2]);

    h.handle.close(OverlayId::new(1));
    assert_eq!(h.open_ids(), vec![2]);

    h.handle.close(OverlayId::new(2));
    assert_eq!(h.open_ids(), Vec::<u64>::new());
}

#[test]
fn duplicate_id_entries_close_together() {
    let mut h = Harness::new();
    h.handle.open(OverlayId::new(5), Panel('a'), OverlayHints::new());
    h.handle.open(OverlayId::new(5), Panel('b'), OverlayHints::new());
    assert_eq!(h.open_ids(), vec![5, 5]);

    h.handle.close(OverlayId::new(5));
    assert_eq!(h.open_ids(), Vec::<u64>::new());
}

#[test]
fn backdrop_click_closes_that_entry_only() {
    let mut h = Harness::new();
    h.handle.open(OverlayId::new(1), Panel('x'), OverlayHints::new());

    let outcome = h.click(0, 0);
    assert_eq!(outcome, ClickOutcome::Dismiss(OverlayId::new(1)));
    assert_eq!(h.open_ids(), Vec::<u64>::new());
}

#[test]
fn content_click_closes_nothing() {
    let mut h = Harness::new();
    h.handle.open(OverlayId::new(1), Panel('x'), OverlayHints::new());

    // Content is 12x5 centered in 60x20 -> starts at (24, 7).
    let outcome = h.click(30, 9);
    assert_eq!(outcome, ClickOutcome::Consumed);
    assert_eq!(h.open_ids(), vec![1]);
}

#[test]
fn dismissing_top_of_stack_leaves_lower_entries() {
    let mut h = Harness::new();
    h.handle.open(OverlayId::new(1), Panel('a'), OverlayHints::new());
    h.handle.open(OverlayId::new(2), Panel('b'), OverlayHints::new());

    let outcome = h.click(0, 0);
    assert_eq!(outcome, ClickOutcome::Dismiss(OverlayId::new(2)));
    assert_eq!(h.open_ids(), vec![1]);

    // The next backdrop click reaches the remaining entry.
    let outcome = h.click(0, 0);
    assert_eq!(outcome, ClickOutcome::Dismiss(OverlayId::new(1)));
    assert_eq!(h.open_ids(), Vec::<u64>::new());
}

#[test]
fn close_then_open_chains_one_screen_to_the_next() {
    let mut h = Harness::new();
    h.handle.open(OverlayId::new(1), Panel('a'), OverlayHints::new());
    h.settle();

    // A wizard-style step: dismiss screen 1, immediately open screen 2.
    h.handle.close(OverlayId::new(1));
    h.handle.open(OverlayId::new(2), Panel('b'), OverlayHints::new());
    let boundaries = h.settle();

    assert_eq!(h.service.stack().ids().map(|id| id.0).collect::<Vec<_>>(), vec![2]);
    assert_eq!(boundaries.len(), 1);
    assert_eq!(boundaries[0].id, OverlayId::new(2));
    // The fresh entry is rendered, the old one is gone.
    assert_eq!(h.surface.get(30, 9).unwrap().ch, 'b');
}

#[test]
fn render_reflects_latest_state_synchronously() {
    let mut h = Harness::new();
    h.handle.open(OverlayId::new(1), Panel('x'), OverlayHints::new());

    // Before the drain the surface knows nothing of the overlay.
    let boundaries = h
        .portal
        .render(h.service.stack(), &mut h.surface, &mut h.hits);
    assert!(boundaries.is_empty());

    // After the drain the very next render is complete.
    let boundaries = h.settle();
    assert_eq!(boundaries.len(), 1);
    assert_eq!(h.surface.get(30, 9).unwrap().ch, 'x');
}
