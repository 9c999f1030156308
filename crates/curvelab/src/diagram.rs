//! Diagram assembly: turn curve parameters and observations into
//! renderable geometry and SVG markup.

use crate::observations::Observation;
use curvelab_geom::EarthParams;
use curvelab_math::{Point2, Vec2};
use std::fmt::Write;

/// Relative length of the drawn sun-ray segments, in diagram units.
const RAY_LENGTH: f64 = 0.25;

/// A sun ray anchored to the surface at an observer's latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayAnchor {
    /// Observer latitude in degrees.
    pub latitude: f64,
    /// Point on the cross-section surface.
    pub point: Point2,
    /// Outward surface normal at that point.
    pub normal: Vec2,
    /// Observed sun elevation angle in radians.
    pub angle: f64,
    /// Unit direction toward the sun: the local horizon direction rotated
    /// up by the elevation angle.
    pub sun_dir: Vec2,
}

/// Sample the surface from latitude -90 to 90 in `samples` points.
///
/// `samples` is clamped to at least 2 (the two endpoints).
pub fn earth_outline(params: &EarthParams, samples: usize) -> Vec<Point2> {
    let samples = samples.max(2);
    (0..samples)
        .map(|i| {
            let latitude = -90.0 + 180.0 * (i as f64) / ((samples - 1) as f64);
            params.surface_at(latitude).point
        })
        .collect()
}

/// SVG path data (`M`/`L` commands) through the given points.
pub fn outline_path_data(points: &[Point2]) -> String {
    let mut data = String::new();
    for (i, p) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        // SVG y grows downward; diagram y grows upward.
        let _ = write!(data, "{}{:.5} {:.5} ", command, p.x, -p.y);
    }
    data.trim_end().to_string()
}

/// Anchor each observation's sun ray on the surface.
pub fn ray_anchors(params: &EarthParams, observations: &[Observation]) -> Vec<RayAnchor> {
    observations
        .iter()
        .map(|obs| {
            let sample = params.surface_at(obs.latitude);
            let normal = sample.normal;
            // Local horizon, pointing toward decreasing latitude (the
            // shadow side for northern observers).
            let tangent = Vec2::new(normal.y, -normal.x);
            let (sin, cos) = obs.angle.sin_cos();
            RayAnchor {
                latitude: obs.latitude,
                point: sample.point,
                normal,
                angle: obs.angle,
                sun_dir: tangent * cos + normal * sin,
            }
        })
        .collect()
}

/// Render the complete diagram as a standalone SVG document.
///
/// The outline is sampled at `samples` points; one ray segment is drawn
/// per observation.
pub fn render_svg(params: &EarthParams, observations: &[Observation], samples: usize) -> String {
    let outline = earth_outline(params, samples);
    let rays = ray_anchors(params, observations);

    // Leave room above the surface for the rays on either curvature sign.
    let min_y = params.height().min(0.0) - 0.1;
    let max_y = params.height().max(0.0) + RAY_LENGTH + 0.1;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.3} {:.3} {:.3} {:.3}">"#,
        -1.1,
        -max_y,
        2.2,
        max_y - min_y,
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="none" stroke="black" stroke-width="0.005"/>"#,
        outline_path_data(&outline)
    );
    for ray in &rays {
        let tip = ray.point + ray.sun_dir * RAY_LENGTH;
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.5}" y1="{:.5}" x2="{:.5}" y2="{:.5}" stroke="orange" stroke-width="0.003"/>"#,
            ray.point.x, -ray.point.y, tip.x, -tip.y,
        );
    }
    svg.push_str("</svg>\n");
    svg
}
