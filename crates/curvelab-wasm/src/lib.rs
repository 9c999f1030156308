//! WASM bindings for the curvelab diagram core.
//!
//! Exposes the [`Transform`] and [`Earth`] types plus the [`scale_rotate`]
//! entry point for use in JavaScript/TypeScript via wasm-bindgen. Points
//! cross the boundary as `[x, y]` arrays.

use curvelab_drag::ScaleRotateStep;
use curvelab_geom::{compute_parameters, CurvatureType, EarthParams};
use curvelab_math::{Point2, Transform2};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (sets up panic hook for better error messages).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[WASM] curvelab-wasm loaded".into());
}

/// A 2D affine transform with DOMMatrix-compatible coefficient accessors.
#[wasm_bindgen]
pub struct Transform {
    inner: Transform2,
}

#[wasm_bindgen]
impl Transform {
    /// The identity transform.
    #[wasm_bindgen(js_name = identity)]
    pub fn identity() -> Transform {
        Transform {
            inner: Transform2::identity(),
        }
    }

    /// `other` applied first, then `self` (matrix product `self * other`).
    #[wasm_bindgen(js_name = multiply)]
    pub fn multiply(&self, other: &Transform) -> Transform {
        Transform {
            inner: self.inner.then(&other.inner),
        }
    }

    /// The inverse transform.
    ///
    /// Throws if the transform is singular (never the case for transforms
    /// produced by `scaleRotate`).
    #[wasm_bindgen(js_name = inverse)]
    pub fn inverse(&self) -> Result<Transform, JsValue> {
        self.inner
            .inverse()
            .map(|inner| Transform { inner })
            .ok_or_else(|| JsValue::from_str("transform is not invertible"))
    }

    /// Transform the point `(x, y)`, returning `[x', y']`.
    #[wasm_bindgen(js_name = applyPoint)]
    pub fn apply_point(&self, x: f64, y: f64) -> Vec<f64> {
        let p = self.inner.apply_point(&Point2::new(x, y));
        vec![p.x, p.y]
    }

    /// DOMMatrix `a` coefficient (column-major m11).
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> f64 {
        self.inner.matrix[(0, 0)]
    }

    /// DOMMatrix `b` coefficient (m12).
    #[wasm_bindgen(getter)]
    pub fn b(&self) -> f64 {
        self.inner.matrix[(1, 0)]
    }

    /// DOMMatrix `c` coefficient (m21).
    #[wasm_bindgen(getter)]
    pub fn c(&self) -> f64 {
        self.inner.matrix[(0, 1)]
    }

    /// DOMMatrix `d` coefficient (m22).
    #[wasm_bindgen(getter)]
    pub fn d(&self) -> f64 {
        self.inner.matrix[(1, 1)]
    }

    /// DOMMatrix `e` coefficient (x translation).
    #[wasm_bindgen(getter)]
    pub fn e(&self) -> f64 {
        self.inner.matrix[(0, 2)]
    }

    /// DOMMatrix `f` coefficient (y translation).
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> f64 {
        self.inner.matrix[(1, 2)]
    }
}

/// A surface sample serialized to JS as `{point: [x, y], normal: [x, y]}`.
#[derive(Serialize)]
struct JsSurfaceSample {
    point: [f64; 2],
    normal: [f64; 2],
}

/// An Earth cross-section curve for one curvature control value.
#[wasm_bindgen]
pub struct Earth {
    inner: EarthParams,
}

#[wasm_bindgen]
impl Earth {
    /// Compute cross-section parameters for a curvature control in [-1, 1].
    #[wasm_bindgen(js_name = compute)]
    pub fn compute(control: f64) -> Earth {
        Earth {
            inner: compute_parameters(control),
        }
    }

    /// `"flat"`, `"convex"`, or `"concave"`.
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        match self.inner {
            EarthParams::Flat { .. } => "flat",
            EarthParams::Curved {
                curvature: CurvatureType::Convex,
                ..
            } => "convex",
            EarthParams::Curved {
                curvature: CurvatureType::Concave,
                ..
            } => "concave",
        }
        .to_string()
    }

    /// Horizontal extent of the drawn surface.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.width()
    }

    /// Signed vertical extent of the drawn surface.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.height()
    }

    /// Subtended arc angle in radians; `undefined` for the flat case.
    #[wasm_bindgen(getter, js_name = segmentAngle)]
    pub fn segment_angle(&self) -> Option<f64> {
        match self.inner {
            EarthParams::Curved { segment_angle, .. } => Some(segment_angle),
            EarthParams::Flat { .. } => None,
        }
    }

    /// Arc radius; `undefined` for the flat case.
    #[wasm_bindgen(getter, js_name = circleScale)]
    pub fn circle_scale(&self) -> Option<f64> {
        match self.inner {
            EarthParams::Curved { circle_scale, .. } => Some(circle_scale),
            EarthParams::Flat { .. } => None,
        }
    }

    /// Vertical offset of the arc center; `undefined` for the flat case.
    #[wasm_bindgen(getter, js_name = circleOffset)]
    pub fn circle_offset(&self) -> Option<f64> {
        match self.inner {
            EarthParams::Curved { circle_offset, .. } => Some(circle_offset),
            EarthParams::Flat { .. } => None,
        }
    }

    /// Surface point and outward normal at a latitude in degrees.
    #[wasm_bindgen(js_name = surfaceAt)]
    pub fn surface_at(&self, latitude: f64) -> Result<JsValue, JsValue> {
        let sample = self.inner.surface_at(latitude);
        let js = JsSurfaceSample {
            point: [sample.point.x, sample.point.y],
            normal: [sample.normal.x, sample.normal.y],
        };
        serde_wasm_bindgen::to_value(&js).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// A pin-scale-rotate step as passed from JS.
#[derive(Deserialize)]
struct JsScaleRotateStep {
    pin: [f64; 2],
    pos: [f64; 2],
    #[serde(rename = "prevPos")]
    prev_pos: [f64; 2],
}

/// Compose drag steps into a single transform.
///
/// `steps` is an array of `{pin: [x, y], pos: [x, y], prevPos: [x, y]}`.
/// Throws on malformed input or on a step whose endpoint coincides with
/// its pin.
#[wasm_bindgen(js_name = scaleRotate)]
pub fn scale_rotate(steps: JsValue) -> Result<Transform, JsValue> {
    let steps: Vec<JsScaleRotateStep> =
        serde_wasm_bindgen::from_value(steps).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let steps: Vec<ScaleRotateStep> = steps
        .iter()
        .map(|s| ScaleRotateStep {
            pin: Point2::new(s.pin[0], s.pin[1]),
            pos: Point2::new(s.pos[0], s.pos[1]),
            prev_pos: Point2::new(s.prev_pos[0], s.prev_pos[1]),
        })
        .collect();

    curvelab_drag::scale_rotate(&steps)
        .map(|inner| Transform { inner })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
