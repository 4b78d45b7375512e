#![forbid(unsafe_code)]

//! The dispatch gateway: an explicit overlay service plus cloneable handles.
//!
//! The service owns the [`OverlayStack`] and is constructed once at
//! application start; call sites receive an [`OverlayHandle`] by dependency
//! injection rather than reaching for hidden global state, so tests can run
//! isolated service instances side by side.
//!
//! Handles only enqueue. The event loop calls
//! [`OverlayService::apply_pending`] synchronously after each UI event,
//! which drains the queue in FIFO order and applies every command exactly
//! once — a render that follows sees the final state, never an intermediate
//! one.

use std::fmt;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::registry::{OverlayContent, OverlayEntry, OverlayHints, OverlayId, OverlayStack};

/// A queued registry mutation.
pub enum OverlayCommand {
    /// Append an entry to the stack.
    Open {
        /// Caller-supplied identifier.
        id: OverlayId,
        /// Opaque renderable content.
        content: Box<dyn OverlayContent>,
        /// Presentation hints.
        hints: OverlayHints,
    },
    /// Remove every entry with this id.
    Close {
        /// Identifier to remove.
        id: OverlayId,
    },
}

impl fmt::Debug for OverlayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { id, hints, .. } => f
                .debug_struct("Open")
                .field("id", id)
                .field("hints", hints)
                .finish_non_exhaustive(),
            Self::Close { id } => f.debug_struct("Close").field("id", id).finish(),
        }
    }
}

/// Owner of the overlay stack and its command queue.
pub struct OverlayService {
    stack: OverlayStack,
    rx: Receiver<OverlayCommand>,
    tx: Sender<OverlayCommand>,
}

impl OverlayService {
    /// Create the service and its first handle.
    pub fn new() -> (Self, OverlayHandle) {
        let (tx, rx) = channel();
        let service = Self {
            stack: OverlayStack::new(),
            rx,
            tx: tx.clone(),
        };
        (service, OverlayHandle { tx })
    }

    /// A fresh handle to hand to another call site.
    pub fn handle(&self) -> OverlayHandle {
        OverlayHandle {
            tx: self.tx.clone(),
        }
    }

    /// The current stack, for the portal renderer.
    pub fn stack(&self) -> &OverlayStack {
        &self.stack
    }

    /// Apply one command immediately, bypassing the queue.
    pub fn apply(&mut self, command: OverlayCommand) {
        match command {
            OverlayCommand::Open { id, content, hints } => {
                self.stack.open(OverlayEntry::new(id, content, hints));
            }
            OverlayCommand::Close { id } => {
                self.stack.close(id);
            }
        }
    }

    /// Drain the queue, applying every pending command in FIFO order.
    ///
    /// Call this after each UI event, before rendering. Returns the number
    /// of commands applied.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.rx.try_recv() {
            self.apply(command);
            applied += 1;
        }
        applied
    }
}

/// Cloneable gateway for `open`/`close` requests.
///
/// Handles stay valid for the life of the service; a command sent after the
/// service is gone (teardown) is silently dropped.
pub struct OverlayHandle {
    tx: Sender<OverlayCommand>,
}

impl Clone for OverlayHandle {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl fmt::Debug for OverlayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayHandle").finish_non_exhaustive()
    }
}

impl OverlayHandle {
    /// Request an overlay to open.
    pub fn open(
        &self,
        id: OverlayId,
        content: impl OverlayContent + 'static,
        hints: OverlayHints,
    ) {
        let _ = self.tx.send(OverlayCommand::Open {
            id,
            content: Box::new(content),
            hints,
        });
    }

    /// Request every entry with this id to close.
    pub fn close(&self, id: OverlayId) {
        let _ = self.tx.send(OverlayCommand::Close { id });
    }
}
