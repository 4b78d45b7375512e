#![forbid(unsafe_code)]

//! Headless walkthrough of the overlay stack and carousel.
//!
//! Renders deterministic frames to stdout so the behavior can be eyeballed
//! without a live terminal.

use std::time::Duration;

use scrim::prelude::*;
use scrim::{BatchSwap, RingGeometry};

fn print_frame(label: &str, surface: &Surface) {
    println!("== {label} ==");
    for y in 0..surface.bounds().height {
        println!("{}", surface.row_text(y));
    }
    println!();
}

fn main() {
    let target = Rect::new(0, 0, 60, 16);
    let (mut service, handle) = OverlayService::new();
    let mut portal = Portal::new(target);
    let mut surface = Surface::new(60, 16);
    let mut hits = HitGrid::new(60, 16);

    // Open two stacked modals through the cloneable handle.
    handle.open(
        OverlayId::new(1),
        Modal::new()
            .title("Settings")
            .line("Theme: dark")
            .line("Mouse: enabled"),
        OverlayHints::new(),
    );
    handle.open(
        OverlayId::new(2),
        Modal::new().title("Confirm").line("Apply changes?"),
        OverlayHints::new().max_width(24),
    );
    service.apply_pending();

    surface.clear();
    let boundaries = portal.render(service.stack(), &mut surface, &mut hits);
    print_frame("two stacked modals", &surface);

    // A click outside the top modal's content lands on its backdrop and
    // dismisses it; lower entries are untouched.
    let outcome = dispatch_click(&boundaries, 2, 2);
    println!("click at (2, 2): {outcome:?}");
    if let ClickOutcome::Dismiss(id) = outcome {
        handle.close(id);
    }
    service.apply_pending();

    surface.clear();
    let boundaries = portal.render(service.stack(), &mut surface, &mut hits);
    print_frame("after backdrop dismiss", &surface);

    // A click inside the remaining modal's content is consumed.
    let (cx, cy) = target.center();
    println!("click at ({cx}, {cy}): {:?}\n", dispatch_click(&boundaries, cx, cy));

    // Circular carousel: five labels on a ring, front slot emphasized.
    let mut ring = match CarouselRing::new(["alpha", "bravo", "charlie", "delta", "echo"]) {
        Ok(ring) => ring,
        Err(err) => {
            eprintln!("carousel setup failed: {err}");
            return;
        }
    };
    for slot in 0..5 {
        ring.set_measured(slot, Rect::new(27, 13, 7, 1));
    }

    let geometry = RingGeometry::fitted(Rect::new(0, 0, 60, 16));
    let mut swap = BatchSwap::new(Duration::ZERO);
    swap.swap(ring.compute_batch(geometry));

    let mut carousel_surface = Surface::new(60, 16);
    if let Some(batch) = swap.live() {
        ring.draw(batch, &mut carousel_surface);
    }
    print_frame("carousel, item at front", &carousel_surface);

    // A click right of the front slot rotates forward; the whole position
    // batch is recomputed and swapped in.
    if let Some(direction) = ring.rotation_from_click(50) {
        println!("click at column 50 rotates: {direction:?}");
        ring.rotate(direction);
    }
    swap.swap(ring.compute_batch(geometry));
    swap.tick();

    carousel_surface.clear();
    if let Some(batch) = swap.live() {
        ring.draw(batch, &mut carousel_surface);
    }
    print_frame("carousel, rotated forward", &carousel_surface);
    println!("front item: {}", ring.front());
}
