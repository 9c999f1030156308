#![warn(missing_docs)]

//! Pin-scale-rotate drag composition for the curvelab diagram.
//!
//! Diagram handles are manipulated by dragging: each pointer update moves
//! one handle while another stays pinned, and the motion is interpreted as
//! the unique scale-plus-rotation about the pin that carries the handle's
//! previous position to its new one. [`scale_rotate`] folds a sequence of
//! such updates into a single affine transform.
//!
//! [`DragTracker`] is the pointer-side adapter: a pure state machine that
//! turns a down/move/up/cancel position stream into drag events carrying
//! positions and deltas, with no windowing-system dependency.

use curvelab_math::{Point2, Transform2, MIN_MOTION_SQ, MIN_PIN_DISTANCE};
use thiserror::Error;

mod tracker;

pub use tracker::{DragEvent, DragTracker};

/// One incremental drag update: `pos` and `prev_pos` describe the handle's
/// motion, `pin` the point held fixed. All three are in the same
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRotateStep {
    /// The point held fixed by this step.
    pub pin: Point2,
    /// Handle position after the update.
    pub pos: Point2,
    /// Handle position before the update.
    pub prev_pos: Point2,
}

/// Errors from the drag crate.
#[derive(Debug, Error)]
pub enum DragError {
    /// A step's handle sits on (or numerically at) its pin, so the scale
    /// factor and rotation angle are undefined.
    #[error("degenerate step: point too close to pin (length={length} prev_length={prev_length})")]
    DegenerateStep {
        /// Distance from `pos` to the pin.
        length: f64,
        /// Distance from `prev_pos` to the pin.
        prev_length: f64,
    },
    /// A tracker event arrived while no drag was active.
    #[error("no active drag")]
    NotDragging,
}

/// Compose a sequence of pin-scale-rotate steps into one affine transform.
///
/// Steps combine in input order: a point transformed by the result moves
/// as if each step's scale/rotation about its pin had been applied from
/// first to last. Steps whose endpoints coincide within motion tolerance
/// contribute nothing and are skipped.
///
/// The rotation angle is the raw difference of the two `atan2` values and
/// is deliberately not normalized into (-pi, pi]: a step that crosses the
/// atan2 branch cut can encode a turn of up to 2*pi. Callers relying on
/// shortest-turn behavior near +/-180 degrees should be aware (open
/// product question, preserved as-is).
///
/// # Errors
///
/// [`DragError::DegenerateStep`] when either endpoint of a moving step is
/// within [`MIN_PIN_DISTANCE`] of its pin. The whole composition aborts;
/// no partial transform is returned.
pub fn scale_rotate(steps: &[ScaleRotateStep]) -> Result<Transform2, DragError> {
    let mut acc = Transform2::identity();

    for step in steps {
        if (step.pos - step.prev_pos).norm_squared() < MIN_MOTION_SQ {
            continue;
        }

        let pos_o = step.pos - step.pin;
        let prev_o = step.prev_pos - step.pin;

        let length = pos_o.norm();
        let prev_length = prev_o.norm();
        if length < MIN_PIN_DISTANCE || prev_length < MIN_PIN_DISTANCE {
            return Err(DragError::DegenerateStep {
                length,
                prev_length,
            });
        }

        let scale = length / prev_length;
        let angle = pos_o.y.atan2(pos_o.x) - prev_o.y.atan2(prev_o.x);

        // translate(-pin), scale, rotate, translate(+pin), innermost first.
        let step_transform = Transform2::translation(step.pin.x, step.pin.y)
            .then(&Transform2::rotation(angle))
            .then(&Transform2::scaling(scale))
            .then(&Transform2::translation(-step.pin.x, -step.pin.y));

        acc = step_transform.then(&acc);
    }

    Ok(acc)
}
