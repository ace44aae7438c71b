//! Integration tests for the orbit kinematics and Hill frame through the
//! public API.
//!
//! Run with: cargo test --test orbit_integration

mod common;

use bevy::math::DVec3;
use hillview::dynamics::{DynamicsController, ViewMode};
use hillview::orbit::{
    CircularOrbit, FrameError, HillFrame, OrbitKinematics, OrbitParameters, to_body_centered,
};
use hillview::types::{LEADER_ORBIT_PERIOD, LEADER_ORBIT_RADIUS, SUN_ORBIT_PERIOD};

use common::{assert_vec_close, state_at};

#[test]
fn test_leader_scenario_epoch_and_quarter_period() {
    let orbit = CircularOrbit::new(OrbitParameters::from_degrees(68.7, 94.0, 45.0).unwrap());

    assert_vec_close(orbit.planar_position(0.0), DVec3::new(0.0, 0.0, 68.7), 1e-12);
    assert_vec_close(
        orbit.planar_position(94.0 / 4.0),
        DVec3::new(68.7, 0.0, 0.0),
        1e-9,
    );
}

#[test]
fn test_state_is_bit_identical_for_equal_time() {
    for t in [0.0, 0.1, 47.0, 12_345.6, -3.0] {
        assert_eq!(state_at(t), state_at(t));
    }
}

#[test]
fn test_state_is_periodic() {
    let t = 31.4;
    let a = state_at(t);
    let leader_later = state_at(t + LEADER_ORBIT_PERIOD);
    let sun_later = state_at(t + SUN_ORBIT_PERIOD);

    assert_vec_close(a.body_position, leader_later.body_position, 1e-9);
    assert_vec_close(a.sun_position, sun_later.sun_position, 1e-6);
}

#[test]
fn test_a_full_orbit_of_frames_is_valid() {
    // One frame per animation step over one leader orbit
    let mut t = 0.0;
    while t <= LEADER_ORBIT_PERIOD {
        let state = state_at(t);
        let frame = HillFrame::new(state.body_position, state.body_velocity).unwrap();
        assert_vec_close(
            frame.to_body_centered(DVec3::ZERO),
            DVec3::new(-LEADER_ORBIT_RADIUS, 0.0, 0.0),
            1e-9,
        );
        t += 0.1;
    }
}

#[test]
fn test_transform_isometry_and_round_trip() {
    let state = state_at(17.0);
    let frame = HillFrame::new(state.body_position, state.body_velocity).unwrap();
    let p = state.sun_position;

    let relative = to_body_centered(p, state.body_position, state.body_velocity).unwrap();
    assert!((relative.length() - (p - state.body_position).length()).abs() < 1e-9);
    assert_vec_close(frame.to_world(relative), p, 1e-9);
}

#[test]
fn test_degenerate_state_is_an_error() {
    let err = to_body_centered(DVec3::ONE, DVec3::new(0.0, 0.0, 68.7), DVec3::new(0.0, 0.0, 1.0))
        .unwrap_err();
    assert_eq!(err, FrameError::ParallelVectors);
}

#[test]
fn test_invalid_mode_is_rejected() {
    let mut dynamics = DynamicsController::new(OrbitKinematics::default(), ViewMode::PrimaryCentered);
    assert!(dynamics.set_mode_str("invalid").is_err());
    assert_eq!(dynamics.mode(), ViewMode::PrimaryCentered);

    assert_eq!(dynamics.set_mode_str("leader").unwrap(), true);
    assert_eq!(dynamics.mode(), ViewMode::BodyCentered);
}

#[test]
fn test_modes_agree_on_relative_geometry() {
    // The sun-leader distance is the same whichever body the view is centered on
    let mut earth_view = DynamicsController::new(OrbitKinematics::default(), ViewMode::PrimaryCentered);
    let mut leader_view = DynamicsController::new(OrbitKinematics::default(), ViewMode::BodyCentered);

    let a = *earth_view.update(250.0).unwrap();
    let b = *leader_view.update(250.0).unwrap();

    assert!(((a.sun - a.leader).length() - (b.sun - b.leader).length()).abs() < 1e-9);
    assert!(((a.earth - a.leader).length() - (b.earth - b.leader).length()).abs() < 1e-9);
}
