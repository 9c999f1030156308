#![warn(missing_docs)]

//! Math types for the curvelab diagram core.
//!
//! Thin wrappers around nalgebra providing the 2D types the diagram
//! works in: points, vectors, homogeneous affine transforms, and the
//! tolerance constants shared by the geometry and drag crates.

use nalgebra::{Matrix3, Vector2, Vector3};

/// A point in diagram space.
pub type Point2 = nalgebra::Point2<f64>;

/// A displacement vector in diagram space.
pub type Vec2 = Vector2<f64>;

/// Below this magnitude the curvature control is treated as exactly flat.
pub const FLAT_CONTROL: f64 = 1e-4;

/// Squared pointer motion below which a drag step carries no perceptible
/// movement and is skipped.
pub const MIN_MOTION_SQ: f64 = 1e-12;

/// Minimum distance between a drag endpoint and its pin. Closer than this
/// the scale factor and angle are numerically meaningless.
pub const MIN_PIN_DISTANCE: f64 = 1e-6;

/// A 2D affine transformation as a 3x3 homogeneous matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2 {
    /// The underlying 3x3 matrix.
    pub matrix: Matrix3<f64>,
}

impl Transform2 {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Translation by `(dx, dy)`.
    pub fn translation(dx: f64, dy: f64) -> Self {
        let mut m = Matrix3::identity();
        m[(0, 2)] = dx;
        m[(1, 2)] = dy;
        Self { matrix: m }
    }

    /// Uniform scale by `s` about the origin.
    pub fn scaling(s: f64) -> Self {
        let mut m = Matrix3::identity();
        m[(0, 0)] = s;
        m[(1, 1)] = s;
        Self { matrix: m }
    }

    /// Rotation about the origin by `angle` radians, counter-clockwise.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix3::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Compose: `self * other`, i.e. `other` is applied first, then `self`.
    pub fn then(&self, other: &Transform2) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Inverse of this transform, if the linear part is non-singular.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point2) -> Point2 {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Point2::new(v.x, v.y)
    }

    /// Transform a displacement vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec2) -> Vec2 {
        let r = self.matrix * Vector3::new(v.x, v.y, 0.0);
        Vec2::new(r.x, r.y)
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform2::identity();
        let p = Point2::new(1.0, 2.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform2::translation(10.0, 20.0);
        let p = Point2::new(1.0, 2.0);
        let result = t.apply_point(&p);
        assert_relative_eq!(result.x, 11.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, 22.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translation_ignores_vectors() {
        let t = Transform2::translation(10.0, 20.0);
        let v = Vec2::new(1.0, 2.0);
        let result = t.apply_vec(&v);
        assert_relative_eq!(result.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_90() {
        let t = Transform2::rotation(PI / 2.0);
        let p = Point2::new(1.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert_relative_eq!(result.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scaling() {
        let t = Transform2::scaling(2.0);
        let p = Point2::new(1.0, -3.0);
        let result = t.apply_point(&p);
        assert_relative_eq!(result.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, -6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compose_order() {
        let translate = Transform2::translation(1.0, 0.0);
        let scale = Transform2::scaling(2.0);
        // scale.then(&translate) applies the translation first:
        // (0,0) -> (1,0) -> (2,0)
        let composed = scale.then(&translate);
        let result = composed.apply_point(&Point2::origin());
        assert_relative_eq!(result.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform2::translation(1.0, 2.0)
            .then(&Transform2::rotation(0.7))
            .then(&Transform2::scaling(3.0));
        let inv = t.inverse().unwrap();
        let composed = t.then(&inv);
        let p = Point2::new(5.0, 6.0);
        let result = composed.apply_point(&p);
        assert!((result - p).norm() < 1e-9);
    }
}
