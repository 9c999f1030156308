//! Recorded stick-and-shadow sun-angle observations.
//!
//! Each raw record is a latitude in degrees plus a stick height and shadow
//! length (same unit, whatever the observer had to hand); the elevation
//! angle of the sun follows as `atan2(stick, shadow)`. Southern-hemisphere
//! shadows point the other way, hence the negative lengths.

use serde::{Deserialize, Serialize};

/// One sun-angle observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observer latitude in degrees, positive north.
    pub latitude: f64,
    /// Sun elevation angle in radians, from `atan2(stick, shadow)`.
    pub angle: f64,
}

/// (latitude, stick height, shadow length)
const RAW_OBSERVATIONS: &[(f64, f64, f64)] = &[
    (-45.2, 1001.0, -2575.0),
    (-41.8, 75.0, -170.0),
    (-37.8, 425.0, -773.0),
    (-35.2, 58.2, -97.6),
    (-30.0, 1.2, -1.6),
    (-27.4, 14.7, -18.0),
    (-27.2, 1300.0, -1520.0),
    (34.0, 23.4, 3.95),
    (34.0, 12.0, 1.81),
    (34.1, 118.55, 21.6),
    (37.0, 69.0, 16.0),
    (37.8, 48.0, 12.0),
    (42.0, 30.0, 11.5),
    (44.1, 62.5, 23.0),
    (44.2, 60.0, 22.6),
    (45.4, 110.0, 47.0),
    (45.6, 12.0, 4.73),
    (47.0, 51.0, 23.5),
    (50.9, 150.0, 82.0),
    (51.5, 31.8, 16.7),
    (52.2, 293.0, 162.4),
    (52.3, 210.0, 116.6),
    (52.5, 150.7, 84.5),
    (53.4, 152.0, 92.0),
    (53.6, 121.4, 69.5),
    (53.8, 42.5, 21.8),
    (59.2, 119.5, 86.0),
    (59.4, 150.0, 110.0),
    (61.5, 80.0, 61.8),
    (61.5, 1692.0, 1242.0),
    (66.9, 79.5, 75.0),
];

/// The observation table with angles computed from the raw measurements.
pub fn observations() -> Vec<Observation> {
    RAW_OBSERVATIONS
        .iter()
        .map(|&(latitude, stick, shadow)| Observation {
            latitude,
            angle: stick.atan2(shadow),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_table_size() {
        assert_eq!(observations().len(), 31);
    }

    #[test]
    fn test_angles_are_elevations() {
        // Sticks are positive, so every angle lands in (0, pi): above the
        // horizon, with southern-hemisphere records past pi/2.
        for obs in observations() {
            assert!(obs.angle > 0.0 && obs.angle < PI, "angle {}", obs.angle);
        }
    }

    #[test]
    fn test_known_record() {
        // 42N: stick 30, shadow 11.5.
        let obs = observations();
        let rec = obs.iter().find(|o| o.latitude == 42.0).unwrap();
        assert_relative_eq!(rec.angle, (30.0f64).atan2(11.5), epsilon = 1e-12);
    }

    #[test]
    fn test_sorted_by_latitude() {
        let obs = observations();
        assert!(obs.windows(2).all(|w| w[0].latitude <= w[1].latitude));
    }
}
