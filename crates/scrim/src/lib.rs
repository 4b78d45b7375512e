#![forbid(unsafe_code)]

//! Scrim public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use scrim_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use scrim_core::geometry::{Rect, Sides};

// --- Render re-exports -----------------------------------------------------

pub use scrim_render::cell::{Cell, Rgba, Style, StyleFlags};
pub use scrim_render::draw::BorderChars;
pub use scrim_render::hit::{HitCell, HitGrid, HitId, HitRegion};
pub use scrim_render::surface::Surface;

// --- Overlay re-exports ----------------------------------------------------

pub use scrim_overlay::{
    dispatch_click, Boundary, ClickOutcome, ClickTarget, OverlayCommand, OverlayContent,
    OverlayEntry, OverlayHandle, OverlayHints, OverlayId, OverlayService, OverlayStack,
    OverlayVariant, Portal, PortalConfig,
};

// --- Widget re-exports -----------------------------------------------------

pub use scrim_widgets::{
    BatchSwap, CarouselError, CarouselRing, Easing, Modal, PositionBatch, RingGeometry,
    RotationDirection, SlotPlacement,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for scrim apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// Carousel construction failure.
    Carousel(CarouselError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Carousel(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<CarouselError> for Error {
    fn from(err: CarouselError) -> Self {
        Self::Carousel(err)
    }
}

/// Standard result type for scrim APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        dispatch_click, Boundary, CarouselRing, ClickOutcome, Error, Event, HitGrid, KeyCode,
        KeyEvent, Modal, Modifiers, MouseEvent, OverlayContent, OverlayHandle, OverlayHints,
        OverlayId, OverlayService, Portal, Rect, Result, RotationDirection, Style, Surface,
    };

    pub use crate::{core, overlay, render, widgets};
}

pub use scrim_core as core;
pub use scrim_overlay as overlay;
pub use scrim_render as render;
pub use scrim_widgets as widgets;
