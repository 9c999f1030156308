#![warn(missing_docs)]

//! Curvature-to-surface mapping for the curvelab diagram.
//!
//! Maps a scalar curvature control to the closed-form parameters of a 2D
//! Earth cross-section: a flat line for control near zero, otherwise a
//! circular arc that bulges up (globe) or down (hollow) depending on the
//! sign of the control. Every curve can be evaluated at any latitude to
//! get a surface point and its outward normal.

use curvelab_math::{Point2, Vec2, FLAT_CONTROL};
use std::f64::consts::FRAC_PI_2;

/// Which way a curved cross-section bulges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvatureType {
    /// Globe-like: the surface bulges toward the viewer's sky.
    Convex,
    /// Hollow-Earth-like: the surface curves away.
    Concave,
}

impl CurvatureType {
    /// +1 for convex, -1 for concave.
    pub fn sign(self) -> f64 {
        match self {
            CurvatureType::Convex => 1.0,
            CurvatureType::Concave => -1.0,
        }
    }
}

/// A point on the cross-section surface together with its outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Position on the curve.
    pub point: Point2,
    /// Unit vector pointing away from the interior of the curve.
    pub normal: Vec2,
}

/// Closed-form parameters of one curvature hypothesis.
///
/// Produced by [`compute_parameters`]; evaluate with
/// [`surface_at`](EarthParams::surface_at). All fields describe the curve
/// in diagram units where the flat case spans x in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EarthParams {
    /// Degenerate limit of the arc as the subtended angle goes to zero.
    Flat {
        /// Horizontal extent of the drawn surface.
        width: f64,
        /// Vertical extent (always zero for a flat surface).
        height: f64,
    },
    /// A circular arc subtending `segment_angle`.
    Curved {
        /// Bulge direction.
        curvature: CurvatureType,
        /// Horizontal extent of the chord.
        width: f64,
        /// Signed sagitta of the arc.
        height: f64,
        /// Full angle subtended by the arc, in radians.
        segment_angle: f64,
        /// Arc radius, chosen so path length is constant across controls.
        circle_scale: f64,
        /// Vertical offset of the arc's center.
        circle_offset: f64,
    },
}

impl EarthParams {
    /// Horizontal extent of the drawn surface.
    pub fn width(&self) -> f64 {
        match *self {
            EarthParams::Flat { width, .. } | EarthParams::Curved { width, .. } => width,
        }
    }

    /// Signed vertical extent of the drawn surface.
    pub fn height(&self) -> f64 {
        match *self {
            EarthParams::Flat { height, .. } | EarthParams::Curved { height, .. } => height,
        }
    }

    /// Evaluate the surface at a latitude in degrees, domain [-90, 90].
    ///
    /// Pure and restartable: calls are independent, in any order. Latitude
    /// maps linearly to angular position along the arc, so an animated
    /// sweep moves at constant angular speed.
    pub fn surface_at(&self, latitude: f64) -> SurfaceSample {
        match *self {
            EarthParams::Flat { .. } => SurfaceSample {
                point: Point2::new(-latitude / 90.0, 0.0),
                normal: Vec2::new(0.0, 1.0),
            },
            EarthParams::Curved {
                curvature,
                segment_angle,
                circle_scale,
                circle_offset,
                ..
            } => {
                let sign = curvature.sign();
                // The pi/2 offset puts the arc's apex at latitude 0.
                let angle = sign * ((latitude / 90.0) * segment_angle + FRAC_PI_2);
                let (s, c) = angle.sin_cos();
                SurfaceSample {
                    point: Point2::new(circle_scale * c, circle_offset + circle_scale * s),
                    normal: Vec2::new(sign * c, sign * s),
                }
            }
        }
    }
}

/// Map a curvature control to cross-section parameters.
///
/// `control` is nominally in [-1, 1] but is not clamped: positive values
/// give a convex (globe) arc, negative a concave (hollow) one, and
/// magnitudes under [`FLAT_CONTROL`] collapse to the flat case. Defined
/// for every finite input; never fails.
pub fn compute_parameters(control: f64) -> EarthParams {
    if control.abs() < FLAT_CONTROL {
        return EarthParams::Flat {
            width: 1.0,
            height: 0.0,
        };
    }

    let sign = if control >= 0.0 { 1.0 } else { -1.0 };
    let curvature = if control >= 0.0 {
        CurvatureType::Convex
    } else {
        CurvatureType::Concave
    };

    // segment_angle -> 0 recovers the flat case; control = +/-1 gives a
    // quarter circle. Scaling by 1/segment_angle keeps the arc's path
    // length (rather than its chord) constant, which reads as smooth
    // constant-speed motion when the control is animated.
    let segment_angle = 2.0 * control.abs().atan();
    let circle_scale = 1.0 / segment_angle;
    let width = circle_scale * segment_angle.sin();
    let height = sign * circle_scale * (1.0 - segment_angle.cos());
    let circle_offset = sign * -circle_scale + 0.5 * height;

    EarthParams::Curved {
        curvature,
        width,
        height,
        segment_angle,
        circle_scale,
        circle_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_flat_case() {
        let params = compute_parameters(0.0);
        assert_eq!(
            params,
            EarthParams::Flat {
                width: 1.0,
                height: 0.0
            }
        );
        for lat in [-90.0, -45.0, 0.0, 30.0, 90.0] {
            let s = params.surface_at(lat);
            assert_eq!(s.point, Point2::new(-lat / 90.0, 0.0));
            assert_eq!(s.normal, Vec2::new(0.0, 1.0));
        }
    }

    #[test]
    fn test_flat_threshold() {
        assert!(matches!(
            compute_parameters(9.9e-5),
            EarthParams::Flat { .. }
        ));
        assert!(matches!(
            compute_parameters(-9.9e-5),
            EarthParams::Flat { .. }
        ));
        assert!(matches!(
            compute_parameters(1.1e-4),
            EarthParams::Curved { .. }
        ));
    }

    #[test]
    fn test_full_globe_control() {
        let params = compute_parameters(1.0);
        let EarthParams::Curved {
            curvature,
            segment_angle,
            circle_scale,
            ..
        } = params
        else {
            panic!("expected curved params");
        };
        assert_eq!(curvature, CurvatureType::Convex);
        // atan(1) = pi/4, so the arc subtends a quarter circle.
        assert_relative_eq!(segment_angle, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(circle_scale, 2.0 / PI, epsilon = 1e-12);
    }

    #[test]
    fn test_concave_mirrors_convex() {
        let up = compute_parameters(0.5);
        let down = compute_parameters(-0.5);
        assert_relative_eq!(up.width(), down.width(), epsilon = 1e-12);
        assert_relative_eq!(up.height(), -down.height(), epsilon = 1e-12);

        let su = up.surface_at(30.0);
        let sd = down.surface_at(30.0);
        assert_relative_eq!(su.point.x, sd.point.x, epsilon = 1e-12);
        assert_relative_eq!(su.point.y, -sd.point.y, epsilon = 1e-12);
        assert_relative_eq!(su.normal.x, -sd.normal.x, epsilon = 1e-12);
        assert_relative_eq!(su.normal.y, sd.normal.y, epsilon = 1e-12);
    }

    #[test]
    fn test_converges_to_flat_near_threshold() {
        // Just above the flat threshold the curved formula must already be
        // indistinguishable from width=1, height=0.
        let params = compute_parameters(1.001e-4);
        assert_relative_eq!(params.width(), 1.0, epsilon = 1e-7);
        assert!(params.height().abs() < 1e-3);

        let s = params.surface_at(45.0);
        let flat = compute_parameters(0.0).surface_at(45.0);
        assert_relative_eq!(s.point.x, flat.point.x, epsilon = 1e-3);
        assert_relative_eq!(s.point.y, flat.point.y, epsilon = 1e-3);
        assert_relative_eq!(s.normal.x, flat.normal.x, epsilon = 1e-3);
        assert_relative_eq!(s.normal.y, flat.normal.y, epsilon = 1e-3);
    }

    #[test]
    fn test_apex_at_latitude_zero() {
        let params = compute_parameters(0.8);
        let s = params.surface_at(0.0);
        // Apex sits on the vertical midline, normal straight up.
        assert!(s.point.x.abs() < 1e-12);
        assert!(s.normal.x.abs() < 1e-12);
        assert_relative_eq!(s.normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoint_symmetry() {
        let params = compute_parameters(1.0);
        let west = params.surface_at(-90.0);
        let east = params.surface_at(90.0);
        assert_relative_eq!(west.point.x, -east.point.x, epsilon = 1e-12);
        assert_relative_eq!(west.point.y, east.point.y, epsilon = 1e-12);
        assert_relative_eq!(west.normal.x, -east.normal.x, epsilon = 1e-12);
        assert_relative_eq!(west.normal.y, east.normal.y, epsilon = 1e-12);
    }

    #[test]
    fn test_normals_are_unit_length() {
        for control in [-1.0, -0.3, 0.2, 0.7, 1.0] {
            let params = compute_parameters(control);
            for lat in [-90.0, -10.0, 0.0, 55.0, 90.0] {
                let s = params.surface_at(lat);
                assert_relative_eq!(s.normal.norm(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_points_lie_on_circle() {
        let params = compute_parameters(0.6);
        let EarthParams::Curved {
            circle_scale,
            circle_offset,
            ..
        } = params
        else {
            panic!("expected curved params");
        };
        let center = Point2::new(0.0, circle_offset);
        for lat in [-90.0, -30.0, 0.0, 60.0, 90.0] {
            let s = params.surface_at(lat);
            assert_relative_eq!((s.point - center).norm(), circle_scale, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_width_matches_endpoint_span() {
        // `width` is the half-span, matching the flat case where width is 1
        // but the surface runs from x = -1 to x = 1.
        let params = compute_parameters(0.9);
        let west = params.surface_at(-90.0);
        let east = params.surface_at(90.0);
        assert_relative_eq!(
            (west.point.x - east.point.x).abs(),
            2.0 * params.width(),
            epsilon = 1e-12
        );
    }
}
