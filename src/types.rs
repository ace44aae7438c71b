//! Core types and constants for the leader/follower orbit viewer.
//!
//! All distances are in render units (Earth radius = 63.7) and all times in
//! simulated minutes.

use bevy::prelude::*;

/// System sets ordering one frame of the simulation.
///
/// The clock must advance before positions are recomputed, and positions must
/// be recomputed before transforms are written.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Advance the simulated clock
    AdvanceTime,
    /// Recompute body positions for the current time and mode
    UpdateDynamics,
    /// Copy positions into render transforms
    SyncRender,
}

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Simulated minutes per day
pub const MINUTES_PER_DAY: f64 = 60.0 * 24.0;

/// Simulated minutes per (365 day) year
pub const MINUTES_PER_YEAR: f64 = MINUTES_PER_DAY * 365.0;

/// Radius of the sun's apparent orbit around Earth.
pub const SUN_ORBIT_RADIUS: f64 = 1000.0;

/// Period of the sun's apparent orbit (one year).
pub const SUN_ORBIT_PERIOD: f64 = MINUTES_PER_YEAR;

/// Tilt of the sun's apparent orbit (Earth's obliquity), degrees.
pub const SUN_INCLINATION_DEG: f64 = 23.5;

/// Radius of the leader spacecraft orbit.
pub const LEADER_ORBIT_RADIUS: f64 = 68.7;

/// Period of the leader spacecraft orbit (94 minutes, low Earth orbit).
pub const LEADER_ORBIT_PERIOD: f64 = 94.0;

/// Inclination of the leader spacecraft orbit, degrees.
pub const LEADER_INCLINATION_DEG: f64 = 45.0;

/// Earth's rotation period (one day).
pub const EARTH_SPIN_PERIOD: f64 = MINUTES_PER_DAY;

/// Default time step: one frame advances a tenth of a simulated minute.
///
/// At ~60 frames per second this runs six simulated minutes per real second,
/// fast enough to watch an orbit go by but slow enough to follow.
pub const ANIMATION_STEP: f64 = 0.1;

/// Time step that keeps simulated time in step with wall-clock time at 60 fps.
pub const REALTIME_STEP: f64 = 1.0 / 3600.0;

/// Simulation clock, in simulated minutes.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationTime {
    /// Current time in simulated minutes since start
    pub current: f64,
    /// Minutes advanced per rendered frame
    pub step: f64,
    /// Whether the clock is paused
    pub paused: bool,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            current: 0.0,
            step: ANIMATION_STEP,
            paused: false,
        }
    }
}

impl SimulationTime {
    /// Advance by one frame step unless paused.
    pub fn advance(&mut self) {
        if !self.paused {
            self.current += self.step;
        }
    }

    /// Rewind the clock to the start.
    pub fn reset(&mut self) {
        self.current = 0.0;
    }

    /// Whether the clock runs at the real-time step.
    pub fn is_realtime(&self) -> bool {
        self.step == REALTIME_STEP
    }

    /// Switch between the animation and real-time step presets.
    pub fn toggle_step(&mut self) {
        self.step = if self.is_realtime() {
            ANIMATION_STEP
        } else {
            REALTIME_STEP
        };
    }
}

/// Toggles for optional overlays.
#[derive(Resource, Clone, Debug)]
pub struct DisplaySettings {
    /// Draw the radial/velocity/sun arrows and the frame axes at the leader.
    pub show_axes: bool,
    /// Length of the overlay arrows in render units.
    pub axis_length: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_axes: true,
            axis_length: 2.0,
        }
    }
}

/// Format simulated minutes as "day D, HH:MM:SS".
pub fn format_sim_time(minutes: f64) -> String {
    let total_seconds = (minutes.max(0.0) * 60.0).floor() as u64;
    let days = total_seconds / 86_400;
    let time_of_day = total_seconds % 86_400;

    format!(
        "day {}, {:02}:{:02}:{:02}",
        days,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}
