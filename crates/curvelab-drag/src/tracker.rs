//! Pointer-drag state machine.
//!
//! The adapter between a raw pointer position stream and the diagram:
//! feed it down/move/up/cancel positions and it emits events carrying the
//! current position plus the delta since the previous event, which is what
//! handle code needs to build [`ScaleRotateStep`](crate::ScaleRotateStep)s.

use crate::DragError;
use curvelab_math::{Point2, Vec2};

/// Events emitted by [`DragTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// A drag began at `position`.
    Start {
        /// Grab position.
        position: Point2,
    },
    /// The pointer moved during a drag.
    Move {
        /// New position.
        position: Point2,
        /// Displacement since the previous event.
        delta: Vec2,
    },
    /// The drag finished normally.
    End {
        /// Release position.
        position: Point2,
        /// Displacement since the previous event.
        delta: Vec2,
    },
    /// The drag was aborted; the handle should snap back.
    Cancel {
        /// The original grab position.
        original: Point2,
        /// Displacement from the latest position back to the grab point.
        delta: Vec2,
    },
}

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    original: Point2,
    previous: Point2,
}

/// Tracks one pointer drag at a time.
///
/// Purely computational: callers feed in positions already converted to
/// diagram coordinates and dispatch the returned events themselves.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

impl DragTracker {
    /// A tracker with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a drag at `position`. Restarting while a drag is active simply
    /// abandons the old one.
    pub fn pointer_down(&mut self, position: Point2) -> DragEvent {
        self.active = Some(ActiveDrag {
            original: position,
            previous: position,
        });
        DragEvent::Start { position }
    }

    /// Record pointer motion during a drag.
    ///
    /// # Errors
    ///
    /// [`DragError::NotDragging`] if no drag is active.
    pub fn pointer_move(&mut self, position: Point2) -> Result<DragEvent, DragError> {
        let drag = self.active.as_mut().ok_or(DragError::NotDragging)?;
        let delta = position - drag.previous;
        drag.previous = position;
        Ok(DragEvent::Move { position, delta })
    }

    /// Finish the drag at `position`.
    ///
    /// # Errors
    ///
    /// [`DragError::NotDragging`] if no drag is active.
    pub fn pointer_up(&mut self, position: Point2) -> Result<DragEvent, DragError> {
        let drag = self.active.take().ok_or(DragError::NotDragging)?;
        let delta = position - drag.previous;
        Ok(DragEvent::End { position, delta })
    }

    /// Abort the drag, reporting the displacement back to the grab point.
    ///
    /// # Errors
    ///
    /// [`DragError::NotDragging`] if no drag is active.
    pub fn pointer_cancel(&mut self) -> Result<DragEvent, DragError> {
        let drag = self.active.take().ok_or(DragError::NotDragging)?;
        let delta = drag.original - drag.previous;
        Ok(DragEvent::Cancel {
            original: drag.original,
            delta,
        })
    }
}
