//! Common test utilities for integration tests.

use bevy::math::DVec3;
use hillview::orbit::{KinematicState, OrbitKinematics};

/// Absolute state of the default scene at `t`.
pub fn state_at(t: f64) -> KinematicState {
    OrbitKinematics::default()
        .compute_state(t)
        .expect("finite time")
}

/// Assert two vectors are within `eps` of each other.
pub fn assert_vec_close(a: DVec3, b: DVec3, eps: f64) {
    assert!(
        (a - b).length() < eps,
        "expected {b:?}, got {a:?} (distance {:.3e})",
        (a - b).length()
    );
}
