#![warn(missing_docs)]

//! curvelab — sun-angle curvature diagram core.
//!
//! The computational heart of an interactive diagram that compares
//! flat/globe/hollow-Earth curvature hypotheses against recorded
//! stick-and-shadow sun-angle observations:
//!
//! - [`compute_parameters`] maps a curvature control to an Earth
//!   cross-section curve evaluable at any latitude.
//! - [`scale_rotate`] folds pin-scale-rotate drag updates into one affine
//!   transform for SVG handle manipulation.
//! - [`observations`] is the reference data set.
//! - [`diagram`] assembles outlines, ray anchors, and an SVG rendering.
//! - [`History`] models the URL-history-backed state the UI keeps.
//!
//! # Example
//!
//! ```
//! use curvelab::{compute_parameters, observations};
//!
//! let earth = compute_parameters(1.0);
//! let horizon = earth.surface_at(51.5);
//! println!("surface at 51.5N: {:?}", horizon.point);
//! println!("{} observations on record", observations().len());
//! ```

pub mod diagram;
pub mod observations;

pub use curvelab_drag::{scale_rotate, DragError, DragEvent, DragTracker, ScaleRotateStep};
pub use curvelab_geom::{compute_parameters, CurvatureType, EarthParams, SurfaceSample};
pub use curvelab_math::{Point2, Transform2, Vec2};
pub use curvelab_store::{History, StoreError, SubscriptionId};
pub use observations::{observations, Observation};
