//! View mode state machine and per-frame scene layout.
//!
//! The [`DynamicsController`] owns the orbit kinematics and the current
//! [`ViewMode`]. Each frame it evaluates the kinematics at the simulated time
//! and lays the bodies out either around Earth or around the leader
//! spacecraft, in the leader's Hill frame.

use std::fmt;
use std::str::FromStr;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::orbit::{FrameError, HillFrame, KinematicState, KinematicsError, OrbitKinematics};
use crate::types::{SimulationSet, SimulationTime};

/// Which body the scene is centered on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Ride along with the leader: the leader sits at the origin and the sun
    /// and Earth move around it in the leader's Hill frame.
    #[default]
    BodyCentered,
    /// Earth at the origin, everything else at its absolute position.
    PrimaryCentered,
}

impl ViewMode {
    /// Short human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::BodyCentered => "Leader",
            ViewMode::PrimaryCentered => "Earth",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown view mode {0:?} (expected leader, follower or earth)")]
    Unknown(String),
}

impl FromStr for ViewMode {
    type Err = ModeError;

    /// Parse a mode name as used by the mode buttons.
    ///
    /// "leader" and "follower" both ride along with the formation; "earth"
    /// centers on the primary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leader" | "follower" | "body" => Ok(ViewMode::BodyCentered),
            "earth" | "primary" => Ok(ViewMode::PrimaryCentered),
            _ => Err(ModeError::Unknown(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DynamicsError {
    #[error(transparent)]
    Kinematics(#[from] KinematicsError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Mode(#[from] ModeError),
}

/// Positions of every rendered body for one frame, in the active mode's frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    /// Mode this layout was produced in
    pub mode: ViewMode,
    pub sun: DVec3,
    pub earth: DVec3,
    pub leader: DVec3,
    /// The follower flies in formation with the leader; it has no separate
    /// dynamics and shares the leader's position.
    pub follower: DVec3,
    /// Earth orientation as XYZ Euler angles in radians
    pub earth_rotation: DVec3,
    /// Leader's radial direction in layout axes
    pub radial_axis: DVec3,
    /// Leader's direction of motion in layout axes
    pub along_track_axis: DVec3,
}

impl SceneLayout {
    /// Lay out `state` for `mode`.
    pub fn from_state(state: &KinematicState, mode: ViewMode) -> Result<Self, FrameError> {
        let frame = HillFrame::new(state.body_position, state.body_velocity)?;

        let layout = match mode {
            ViewMode::PrimaryCentered => Self {
                mode,
                sun: state.sun_position,
                earth: DVec3::ZERO,
                leader: state.body_position,
                follower: state.body_position,
                earth_rotation: state.primary_rotation,
                radial_axis: frame.radial,
                along_track_axis: frame.along_track,
            },
            ViewMode::BodyCentered => Self {
                mode,
                sun: frame.to_body_centered(state.sun_position),
                earth: frame.to_body_centered(DVec3::ZERO),
                leader: DVec3::ZERO,
                follower: DVec3::ZERO,
                earth_rotation: state.primary_rotation,
                radial_axis: frame.direction_to_frame(frame.radial),
                along_track_axis: frame.direction_to_frame(frame.along_track),
            },
        };
        Ok(layout)
    }

    /// Unit vector from the leader toward the sun.
    pub fn sun_direction(&self) -> DVec3 {
        (self.sun - self.leader).normalize_or_zero()
    }
}

/// Owns the kinematics and the view mode; recomputes the layout each frame.
///
/// The mode is fixed at construction so there is never an unset state. Until
/// the first [`DynamicsController::update`] there is no layout to read.
#[derive(Resource, Clone, Debug)]
pub struct DynamicsController {
    kinematics: OrbitKinematics,
    mode: ViewMode,
    state: Option<KinematicState>,
    layout: Option<SceneLayout>,
}

impl Default for DynamicsController {
    fn default() -> Self {
        Self::new(OrbitKinematics::default(), ViewMode::default())
    }
}

impl DynamicsController {
    pub fn new(kinematics: OrbitKinematics, mode: ViewMode) -> Self {
        Self {
            kinematics,
            mode,
            state: None,
            layout: None,
        }
    }

    pub fn kinematics(&self) -> &OrbitKinematics {
        &self.kinematics
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch view mode. Returns true if the mode changed.
    ///
    /// The cached layout is re-laid out from the last state so readers never
    /// see a layout from the old mode.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.layout = self
            .state
            .and_then(|state| SceneLayout::from_state(&state, mode).ok());
        true
    }

    /// Switch view mode by name, rejecting unknown names.
    pub fn set_mode_str(&mut self, name: &str) -> Result<bool, DynamicsError> {
        let mode: ViewMode = name.parse()?;
        Ok(self.set_mode(mode))
    }

    /// Absolute state from the last update.
    pub fn state(&self) -> Option<&KinematicState> {
        self.state.as_ref()
    }

    /// Layout from the last update.
    pub fn layout(&self) -> Option<&SceneLayout> {
        self.layout.as_ref()
    }

    /// Evaluate the scene at simulated time `t` and lay it out for the
    /// current mode.
    ///
    /// On error the previous state and layout are left untouched.
    pub fn update(&mut self, t: f64) -> Result<&SceneLayout, DynamicsError> {
        let state = self.kinematics.compute_state(t)?;
        let layout = SceneLayout::from_state(&state, self.mode)?;
        self.state = Some(state);
        Ok(&*self.layout.insert(layout))
    }
}

/// Plugin running the dynamics update once per frame.
pub struct DynamicsPlugin;

impl Plugin for DynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DynamicsController>()
            .configure_sets(
                Update,
                (
                    SimulationSet::AdvanceTime,
                    SimulationSet::UpdateDynamics,
                    SimulationSet::SyncRender,
                )
                    .chain(),
            )
            .add_systems(Update, update_dynamics.in_set(SimulationSet::UpdateDynamics));
    }
}

/// Recompute the layout for the current simulated time.
///
/// Failures keep the last good layout on screen. Each distinct failure is
/// logged once rather than every frame.
fn update_dynamics(
    mut dynamics: ResMut<DynamicsController>,
    sim_time: Res<SimulationTime>,
    mut last_error: Local<Option<DynamicsError>>,
) {
    match dynamics.update(sim_time.current) {
        Ok(_) => {
            if last_error.take().is_some() {
                info!("Dynamics recovered at t = {:.1} min", sim_time.current);
            }
        }
        Err(err) => {
            if last_error.as_ref() != Some(&err) {
                error!("Dynamics update failed at t = {}: {}", sim_time.current, err);
                *last_error = Some(err);
            }
        }
    }
}
