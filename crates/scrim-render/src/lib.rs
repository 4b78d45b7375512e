#![forbid(unsafe_code)]

//! Render target for scrim overlays.
//!
//! The portal renderer composites overlay entries onto a [`Surface`] — a
//! flat grid of [`Cell`]s — and registers pointer regions in a [`HitGrid`]
//! as it draws. Nothing here talks to a terminal; presenting the surface
//! is the host application's job.

pub mod cell;
pub mod draw;
pub mod hit;
pub mod surface;

pub use cell::{Cell, Rgba, Style, StyleFlags};
pub use hit::{HitCell, HitGrid, HitId, HitRegion};
pub use surface::Surface;
