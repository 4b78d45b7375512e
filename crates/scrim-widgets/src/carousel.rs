#![forbid(unsafe_code)]

//! Circular carousel selector.
//!
//! N items sit evenly on a ring; each slot carries a logical
//! `angular_index` in `[0, N)` where index 0 is the focused front slot.
//! A click left or right of the front slot rotates the ring by reassigning
//! every slot's angular index — items never move between slots, only the
//! index assignment (and the positions derived from it) changes.
//!
//! Positions are a recomputed projection: each rotation builds the complete
//! next [`PositionBatch`] and swaps it in atomically via [`BatchSwap`]. The
//! previous batch stays alive only while a transition animates between the
//! two generations, then is discarded.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::time::{Duration, Instant};

use scrim_core::geometry::Rect;
use scrim_render::cell::{Cell, Style, StyleFlags};
use scrim_render::surface::Surface;
use unicode_width::UnicodeWidthStr;

/// Scale applied to the front slot's emphasis.
pub const FRONT_SCALE: f64 = 1.25;

/// Errors from carousel construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A ring needs at least one item; N = 0 would divide by zero.
    Empty,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "carousel ring requires at least one item"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// Which way a rotation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// `new = (old + 1) % N`.
    Forward,
    /// `new = (old + N - 1) % N`.
    Backward,
}

/// Ring projection parameters. Recomputed per layout, never stored per slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Ring center in surface coordinates.
    pub center: (f64, f64),
    /// Ring radius in cells.
    pub radius: f64,
}

impl RingGeometry {
    /// Geometry centered within a rectangle, radius fitted with a margin.
    pub fn fitted(area: Rect) -> Self {
        let (cx, cy) = area.center();
        let radius = (area.width.min(area.height).saturating_sub(2) / 2) as f64;
        Self {
            center: (cx as f64, cy as f64),
            radius,
        }
    }
}

/// One slot's computed position and stacking for a single generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlacement {
    /// The slot this placement belongs to (stable item position).
    pub slot: usize,
    /// The slot's current angular index.
    pub angular_index: usize,
    /// Projected x coordinate.
    pub x: f64,
    /// Projected y coordinate.
    pub y: f64,
    /// Stacking layer; higher draws on top. Distinct per slot.
    pub layer: u16,
    /// Emphasis scale; `FRONT_SCALE` for the front slot, 1.0 otherwise.
    pub scale: f64,
}

/// The complete set of placements for one rotation step.
///
/// Built as a single atomic unit — a batch is never patched slot by slot.
/// Slots whose geometry was not yet measured are absent and picked up on
/// the next rotation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionBatch {
    placements: Vec<SlotPlacement>,
}

impl PositionBatch {
    /// All placements, in slot order.
    pub fn placements(&self) -> &[SlotPlacement] {
        &self.placements
    }

    /// The placement for a given slot, if it was computed this step.
    pub fn get(&self, slot: usize) -> Option<&SlotPlacement> {
        self.placements.iter().find(|p| p.slot == slot)
    }

    /// Number of placements in this batch.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the batch holds no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    angular_index: usize,
    measured: Option<Rect>,
}

/// A fixed ring of N slots with a rotating angular-index assignment.
///
/// Slots are created once at construction and live for the ring's
/// lifetime; rotation only permutes their angular indices. The assignment
/// is always a permutation of `[0, N)`.
#[derive(Debug, Clone)]
pub struct CarouselRing<T> {
    slots: Vec<Slot<T>>,
}

impl<T> CarouselRing<T> {
    /// Create a ring from its items. Rejects an empty item set.
    pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self, CarouselError> {
        let slots: Vec<Slot<T>> = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Slot {
                item,
                angular_index: i,
                measured: None,
            })
            .collect();
        if slots.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { slots })
    }

    /// Number of slots on the ring.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: empty rings are rejected at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The item currently at the front (angular index 0).
    pub fn front(&self) -> &T {
        self.slots
            .iter()
            .find(|slot| slot.angular_index == 0)
            .map(|slot| &slot.item)
            .expect("angular indices form a permutation of [0, N)")
    }

    /// The slot position currently at the front.
    pub fn front_slot(&self) -> usize {
        self.slots
            .iter()
            .position(|slot| slot.angular_index == 0)
            .expect("angular indices form a permutation of [0, N)")
    }

    /// Each slot's current angular index, in slot order.
    pub fn angular_indices(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.angular_index).collect()
    }

    /// The items, in slot order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().map(|slot| &slot.item)
    }

    /// Record a slot's rendered bounds once it is mounted.
    ///
    /// Out-of-range slot positions are ignored.
    pub fn set_measured(&mut self, slot: usize, rect: Rect) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.measured = Some(rect);
        }
    }

    /// Rotation direction for a click at column `x`, relative to the front
    /// slot's measured bounds.
    ///
    /// Strictly left of the front slot's left edge rotates backward;
    /// anywhere else rotates forward. Returns `None` while the front slot
    /// has no measured geometry yet.
    pub fn rotation_from_click(&self, x: u16) -> Option<RotationDirection> {
        let front = self.slots.iter().find(|slot| slot.angular_index == 0)?;
        let bounds = front.measured?;
        if x < bounds.left() {
            Some(RotationDirection::Backward)
        } else {
            Some(RotationDirection::Forward)
        }
    }

    /// Rotate the ring one step by reassigning every angular index.
    ///
    /// A ring of one (or zero, which cannot exist) has nothing to reorder;
    /// rotation is a no-op.
    pub fn rotate(&mut self, direction: RotationDirection) {
        let n = self.slots.len();
        if n <= 1 {
            return;
        }
        for slot in &mut self.slots {
            slot.angular_index = match direction {
                RotationDirection::Forward => (slot.angular_index + 1) % n,
                RotationDirection::Backward => (slot.angular_index + n - 1) % n,
            };
        }
    }

    /// Project every measured slot onto the ring for the current
    /// assignment.
    ///
    /// Slot `i` lands at `center + radius * (cos(i*Δ + π/2), sin(i*Δ + π/2))`
    /// with `Δ = 2π / N`. The front slot gets `FRONT_SCALE` emphasis and the
    /// topmost layer; all other layers fall off with symmetric distance from
    /// the front, ties broken by index value, so equidistant slots overlap
    /// in one deterministic order.
    ///
    /// Unmeasured slots are skipped this step and picked up after the next
    /// rotation once their geometry exists.
    pub fn compute_batch(&self, geometry: RingGeometry) -> PositionBatch {
        let n = self.slots.len();
        let delta = TAU / n as f64;
        let layers = layer_assignment(n);
        let (cx, cy) = geometry.center;

        let placements = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.measured.is_some())
            .map(|(pos, slot)| {
                let i = slot.angular_index;
                let angle = i as f64 * delta + FRAC_PI_2;
                SlotPlacement {
                    slot: pos,
                    angular_index: i,
                    x: cx + geometry.radius * angle.cos(),
                    y: cy + geometry.radius * angle.sin(),
                    layer: layers[i],
                    scale: if i == 0 { FRONT_SCALE } else { 1.0 },
                }
            })
            .collect();

        PositionBatch { placements }
    }
}

impl<T: AsRef<str>> CarouselRing<T> {
    /// Draw a batch's labels onto a surface, lowest layer first.
    ///
    /// The front slot is drawn bold and reversed; every other slot shares
    /// uniform treatment and differs only in position and layer.
    pub fn draw(&self, batch: &PositionBatch, surface: &mut Surface) {
        let mut ordered: Vec<&SlotPlacement> = batch.placements().iter().collect();
        ordered.sort_by_key(|p| p.layer);

        for placement in ordered {
            let Some(slot) = self.slots.get(placement.slot) else {
                continue;
            };
            let label = slot.item.as_ref();
            let width = UnicodeWidthStr::width(label) as f64;
            let x = (placement.x - width / 2.0).round();
            let y = placement.y.round();
            if x < 0.0 || y < 0.0 {
                continue;
            }

            let style = if placement.angular_index == 0 {
                Style::new().attrs(StyleFlags::BOLD | StyleFlags::REVERSE)
            } else {
                Style::new()
            };
            let mut col = x as u16;
            for ch in label.chars() {
                let mut cell = Cell::from_char(ch);
                cell.apply(style);
                surface.set(col, y as u16, cell);
                col = col.saturating_add(1);
            }
        }
    }
}

/// Stacking layers per angular index: front on top, falling off with
/// `min(i, N - i)`, equidistant pairs resolved by index value.
fn layer_assignment(n: usize) -> Vec<u16> {
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| (i.min(n - i), i));

    let mut layers = vec![0u16; n];
    for (pos, &i) in order.iter().enumerate() {
        layers[i] = (n - pos) as u16;
    }
    layers
}

/// Easing function for batch transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Smooth ease-out (decelerating).
    #[default]
    EaseOut,
    /// Smooth ease-in (accelerating).
    EaseIn,
    /// Smooth S-curve.
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Two-generation double buffering for position batches.
///
/// [`swap`](Self::swap) installs the next batch atomically and keeps the
/// displaced one as `previous` for the transition window. Once the window
/// elapses, [`tick`](Self::tick) discards the old generation. There is no
/// per-slot incremental mutation path.
#[derive(Debug, Clone)]
pub struct BatchSwap {
    live: Option<PositionBatch>,
    previous: Option<PositionBatch>,
    swapped_at: Option<Instant>,
    transition: Duration,
    easing: Easing,
}

impl BatchSwap {
    /// Create a swap buffer with the given transition window.
    pub fn new(transition: Duration) -> Self {
        Self {
            live: None,
            previous: None,
            swapped_at: None,
            transition,
            easing: Easing::default(),
        }
    }

    /// Set the transition easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Install the next batch, retiring the current one to `previous`.
    pub fn swap(&mut self, next: PositionBatch) {
        self.previous = self.live.take();
        self.live = Some(next);
        self.swapped_at = Some(Instant::now());
    }

    /// The current generation, if any batch has been installed.
    pub fn live(&self) -> Option<&PositionBatch> {
        self.live.as_ref()
    }

    /// The displaced generation, alive only during the transition window.
    pub fn previous(&self) -> Option<&PositionBatch> {
        self.previous.as_ref()
    }

    /// Eased transition progress in `[0.0, 1.0]`; 1.0 when idle.
    pub fn progress(&self) -> f64 {
        self.easing.apply(self.raw_progress())
    }

    /// Discard the previous generation once its transition has elapsed.
    ///
    /// Returns true if a batch was retired.
    pub fn tick(&mut self) -> bool {
        if self.previous.is_some() && self.raw_progress() >= 1.0 {
            self.previous = None;
            return true;
        }
        false
    }

    fn raw_progress(&self) -> f64 {
        let Some(swapped_at) = self.swapped_at else {
            return 1.0;
        };
        if self.transition.is_zero() {
            return 1.0;
        }
        (swapped_at.elapsed().as_secs_f64() / self.transition.as_secs_f64()).min(1.0)
    }
}
