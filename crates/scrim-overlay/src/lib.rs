#![forbid(unsafe_code)]

//! Stacked overlay management.
//!
//! Four pieces cooperate here, in data-flow order:
//!
//! 1. [`OverlayHandle`] — the dispatch gateway call sites use to request
//!    `open`/`close` without being wired to the owner of the stack.
//! 2. [`OverlayStack`] — the registry: the single ordered source of truth
//!    for open overlays. Insertion order is stacking order.
//! 3. [`Portal`] — renders every stack entry onto a [`scrim_render::Surface`]
//!    outside the host's widget tree, registering pointer regions as it goes.
//! 4. [`Boundary`] — per-entry click classifier separating backdrop
//!    (dismiss) clicks from content (interact) clicks.
//!
//! The whole module is single-threaded and event-driven: commands queue up
//! while an event is being handled and [`OverlayService::apply_pending`]
//! applies them FIFO before the next render, so a render never observes a
//! partially applied sequence.

pub mod boundary;
pub mod portal;
pub mod registry;
pub mod service;

pub use boundary::{Boundary, ClickOutcome, ClickTarget, dispatch_click, dispatch_click_grid};
pub use portal::{Portal, PortalConfig};
pub use registry::{OverlayContent, OverlayEntry, OverlayHints, OverlayId, OverlayStack, OverlayVariant};
pub use service::{OverlayCommand, OverlayHandle, OverlayService};
