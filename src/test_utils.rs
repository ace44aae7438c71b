//! Test utilities for the orbit kinematics and frame tests.
//!
//! Provides fixtures for the scene's standard orbits and assertions for
//! vector closeness and frame orthonormality.

use bevy::math::DVec3;

use crate::orbit::HillFrame;

/// Fixtures for creating test orbits and frames.
pub mod fixtures {
    use super::*;
    use crate::orbit::{CircularOrbit, OrbitKinematics, OrbitParameters};

    /// The leader orbit from the scene: R = 68.7, 94 minutes, 45°.
    pub fn leader_orbit() -> CircularOrbit {
        CircularOrbit::new(
            OrbitParameters::from_degrees(68.7, 94.0, 45.0).expect("valid leader orbit"),
        )
    }

    /// The leader's Hill frame at simulated time `t`.
    pub fn leader_frame(t: f64) -> HillFrame {
        let state = OrbitKinematics::default()
            .compute_state(t)
            .expect("finite time");
        HillFrame::new(state.body_position, state.body_velocity).expect("non-degenerate orbit")
    }
}

/// Assertions for geometric invariants.
pub mod assertions {
    use super::*;

    /// Assert two vectors are within `eps` of each other.
    ///
    /// # Panics
    /// Panics if `|a - b| >= eps`.
    pub fn assert_vec_close(a: DVec3, b: DVec3, eps: f64) {
        assert!(
            (a - b).length() < eps,
            "expected {b:?}, got {a:?} (distance {:.3e}, eps {eps:.1e})",
            (a - b).length()
        );
    }

    /// Assert the frame's axes are unit length, mutually perpendicular and
    /// right-handed.
    pub fn assert_orthonormal(frame: &HillFrame, eps: f64) {
        for axis in [frame.radial, frame.cross_track, frame.along_track] {
            assert!(
                (axis.length() - 1.0).abs() < eps,
                "axis {axis:?} is not unit length"
            );
        }
        assert!(frame.radial.dot(frame.cross_track).abs() < eps);
        assert!(frame.radial.dot(frame.along_track).abs() < eps);
        assert!(frame.cross_track.dot(frame.along_track).abs() < eps);
        assert!(
            (frame.frame_to_world().determinant() - 1.0).abs() < eps,
            "frame is not right-handed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_frame_is_orthonormal_over_an_orbit() {
        for i in 0..=94 {
            let frame = fixtures::leader_frame(i as f64);
            assertions::assert_orthonormal(&frame, 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "expected")]
    fn test_assert_vec_close_panics_when_far() {
        assertions::assert_vec_close(DVec3::ZERO, DVec3::X, 0.5);
    }
}
