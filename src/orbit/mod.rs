//! Numerical core: circular-orbit kinematics and the Hill frame transform.
//!
//! Coordinate frame:
//! - Earth-centered, Y up; orbits are circles in the XZ plane before
//!   inclination is applied.
//! - Time is in simulated minutes.

pub mod frame;
pub mod kinematics;

#[cfg(test)]
mod proptest_orbit;

pub use frame::{FrameError, HillFrame, to_body_centered};
pub use kinematics::{
    CircularOrbit, InclinationTransform, KinematicState, KinematicsError, OrbitKinematics,
    OrbitParameters, SpinParameters,
};
