//! Hillview - leader/follower orbit viewer
//!
//! A library crate providing the orbit kinematics, Hill frame transform and
//! Bevy plugins of the viewer, for testing and integration purposes.

pub mod camera;
pub mod dynamics;
pub mod input;
pub mod orbit;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
