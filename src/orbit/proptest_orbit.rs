//! Property-based tests for the orbit kinematics and Hill frame using proptest.
//!
//! These tests verify that the closed-form orbit and the frame transform keep
//! their geometric invariants across a wide range of times and orbits.

use bevy::math::DVec3;
use proptest::prelude::*;

use super::frame::HillFrame;
use super::kinematics::{CircularOrbit, OrbitKinematics, OrbitParameters};
use crate::types::{LEADER_ORBIT_PERIOD, SUN_ORBIT_PERIOD};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Circular orbits keep their radius, before and after inclination.
    #[test]
    fn prop_radius_preserved(
        radius in 1.0f64..5000.0,
        period in 1.0f64..1.0e6,
        inclination_deg in -90.0f64..90.0,
        t in -1.0e6f64..1.0e6,
    ) {
        let orbit = CircularOrbit::new(
            OrbitParameters::from_degrees(radius, period, inclination_deg).unwrap(),
        );
        let tolerance = radius * 1e-12;
        prop_assert!((orbit.planar_position(t).length() - radius).abs() < tolerance);
        prop_assert!((orbit.position(t).length() - radius).abs() < tolerance);
    }

    /// compute_state is pure: equal inputs give bit-identical output.
    #[test]
    fn prop_compute_state_deterministic(t in -1.0e7f64..1.0e7) {
        let kinematics = OrbitKinematics::default();
        let a = kinematics.compute_state(t).unwrap();
        let b = kinematics.compute_state(t).unwrap();
        prop_assert_eq!(a.sun_position.to_array(), b.sun_position.to_array());
        prop_assert_eq!(a.body_position.to_array(), b.body_position.to_array());
        prop_assert_eq!(a.body_velocity.to_array(), b.body_velocity.to_array());
        prop_assert_eq!(a.primary_rotation.to_array(), b.primary_rotation.to_array());
    }

    /// The leader returns to the same place after one period.
    #[test]
    fn prop_leader_periodic(t in 0.0f64..10_000.0) {
        let kinematics = OrbitKinematics::default();
        let a = kinematics.compute_state(t).unwrap();
        let b = kinematics.compute_state(t + LEADER_ORBIT_PERIOD).unwrap();
        prop_assert!((a.body_position - b.body_position).length() < 1e-9);
        prop_assert!((a.body_velocity - b.body_velocity).length() < 1e-9);
    }

    /// The sun returns to the same place after one year.
    #[test]
    fn prop_sun_periodic(t in 0.0f64..1.0e6) {
        let kinematics = OrbitKinematics::default();
        let a = kinematics.compute_state(t).unwrap();
        let b = kinematics.compute_state(t + SUN_ORBIT_PERIOD).unwrap();
        prop_assert!((a.sun_position - b.sun_position).length() < 1e-6);
    }

    /// The Hill frame transform preserves distances from the body.
    #[test]
    fn prop_frame_isometry(
        t in 0.0f64..10_000.0,
        px in -2000.0f64..2000.0,
        py in -2000.0f64..2000.0,
        pz in -2000.0f64..2000.0,
    ) {
        let state = OrbitKinematics::default().compute_state(t).unwrap();
        let frame = HillFrame::new(state.body_position, state.body_velocity).unwrap();
        let p = DVec3::new(px, py, pz);

        let relative = frame.to_body_centered(p);
        let expected = (p - state.body_position).length();
        prop_assert!((relative.length() - expected).abs() < 1e-9 * expected.max(1.0));
    }

    /// to_world undoes to_body_centered.
    #[test]
    fn prop_frame_round_trip(
        t in 0.0f64..10_000.0,
        px in -2000.0f64..2000.0,
        py in -2000.0f64..2000.0,
        pz in -2000.0f64..2000.0,
    ) {
        let state = OrbitKinematics::default().compute_state(t).unwrap();
        let frame = HillFrame::new(state.body_position, state.body_velocity).unwrap();
        let p = DVec3::new(px, py, pz);

        prop_assert!((frame.to_world(frame.to_body_centered(p)) - p).length() < 1e-9);
    }

    /// Earth always sits one orbit radius "below" the leader in its own frame.
    #[test]
    fn prop_primary_on_negative_radial_axis(t in 0.0f64..10_000.0) {
        let kinematics = OrbitKinematics::default();
        let state = kinematics.compute_state(t).unwrap();
        let frame = HillFrame::new(state.body_position, state.body_velocity).unwrap();
        let earth = frame.to_body_centered(DVec3::ZERO);
        let radius = kinematics.body_orbit.params().radius();

        prop_assert!((earth - DVec3::new(-radius, 0.0, 0.0)).length() < 1e-9);
    }
}
