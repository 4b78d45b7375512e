#![forbid(unsafe_code)]

//! Overlay content widgets for scrim.

pub mod carousel;
pub mod modal;

pub use carousel::{
    BatchSwap, CarouselError, CarouselRing, Easing, PositionBatch, RingGeometry,
    RotationDirection, SlotPlacement,
};
pub use modal::Modal;
