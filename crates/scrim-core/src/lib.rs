#![forbid(unsafe_code)]

//! Core primitives for scrim: geometry, input events, and logging.
//!
//! This crate has no dependency on the render or overlay layers. It holds
//! the types every other scrim crate agrees on: rectangles for layout and
//! hit testing, the input event model, and the optional tracing shim.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Rect, Sides};
