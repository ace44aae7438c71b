//! Closed-form circular orbit kinematics.
//!
//! Every position is evaluated directly from simulated time; nothing is
//! integrated, so no error accumulates however long the scene runs.

use std::f64::consts::TAU;

use bevy::math::{DMat3, DVec3};

use crate::types::{
    DEG_TO_RAD, EARTH_SPIN_PERIOD, LEADER_INCLINATION_DEG, LEADER_ORBIT_PERIOD,
    LEADER_ORBIT_RADIUS, SUN_INCLINATION_DEG, SUN_ORBIT_PERIOD, SUN_ORBIT_RADIUS,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    #[error("simulation time must be finite, got {0}")]
    NonFiniteTime(f64),

    #[error("invalid orbit radius: {0} (must be finite and positive)")]
    InvalidRadius(f64),

    #[error("invalid period: {0} (must be finite and positive)")]
    InvalidPeriod(f64),

    #[error("inclination must be finite, got {0}")]
    NonFiniteInclination(f64),
}

fn validate_period(period: f64) -> Result<f64, KinematicsError> {
    if period.is_finite() && period > 0.0 {
        Ok(period)
    } else {
        Err(KinematicsError::InvalidPeriod(period))
    }
}

/// Constant description of one circular orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParameters {
    radius: f64,
    period: f64,
    inclination: f64,
}

impl OrbitParameters {
    /// Create orbit parameters.
    ///
    /// # Arguments
    /// * `radius` - Orbit radius in render units
    /// * `period` - Orbital period in simulated minutes
    /// * `inclination` - Tilt of the orbital plane in radians
    pub fn new(radius: f64, period: f64, inclination: f64) -> Result<Self, KinematicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(KinematicsError::InvalidRadius(radius));
        }
        let period = validate_period(period)?;
        if !inclination.is_finite() {
            return Err(KinematicsError::NonFiniteInclination(inclination));
        }
        Ok(Self {
            radius,
            period,
            inclination,
        })
    }

    /// Same as [`OrbitParameters::new`] with the inclination in degrees.
    pub fn from_degrees(
        radius: f64,
        period: f64,
        inclination_deg: f64,
    ) -> Result<Self, KinematicsError> {
        Self::new(radius, period, inclination_deg * DEG_TO_RAD)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }
}

/// Fixed rotation taking the reference plane (XZ) to an inclined orbital plane.
///
/// The tilt is about the X axis, so the point where the orbit crosses the
/// reference plane stays on X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InclinationTransform {
    matrix: DMat3,
}

impl InclinationTransform {
    pub fn new(inclination: f64) -> Self {
        let (sin_i, cos_i) = inclination.sin_cos();
        // Rows: (1, 0, 0), (0, cos, sin), (0, -sin, cos)
        let matrix = DMat3::from_cols(
            DVec3::X,
            DVec3::new(0.0, cos_i, -sin_i),
            DVec3::new(0.0, sin_i, cos_i),
        );
        Self { matrix }
    }

    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.matrix * v
    }
}

/// A circular, inclined orbit ready for evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularOrbit {
    params: OrbitParameters,
    inclination: InclinationTransform,
    /// period / 2π, so that t / normalized_period is an angle in radians
    normalized_period: f64,
}

impl CircularOrbit {
    pub fn new(params: OrbitParameters) -> Self {
        Self {
            params,
            inclination: InclinationTransform::new(params.inclination),
            normalized_period: params.period / TAU,
        }
    }

    pub fn params(&self) -> &OrbitParameters {
        &self.params
    }

    pub fn inclination_transform(&self) -> &InclinationTransform {
        &self.inclination
    }

    /// Orbit angle in radians at time `t`.
    pub fn angle(&self, t: f64) -> f64 {
        t / self.normalized_period
    }

    /// Position in the un-inclined reference plane.
    pub fn planar_position(&self, t: f64) -> DVec3 {
        let (sin, cos) = self.angle(t).sin_cos();
        DVec3::new(self.params.radius * sin, 0.0, self.params.radius * cos)
    }

    /// Velocity in the un-inclined reference plane.
    ///
    /// This is the derivative with respect to the orbit angle, not time: the
    /// `1 / normalized_period` factor is left out. Only the direction feeds
    /// the Hill frame, so the magnitude is immaterial.
    pub fn planar_velocity(&self, t: f64) -> DVec3 {
        let (sin, cos) = self.angle(t).sin_cos();
        DVec3::new(self.params.radius * cos, 0.0, -self.params.radius * sin)
    }

    pub fn position(&self, t: f64) -> DVec3 {
        self.inclination.apply(self.planar_position(t))
    }

    pub fn velocity(&self, t: f64) -> DVec3 {
        self.inclination.apply(self.planar_velocity(t))
    }
}

/// Self-rotation of the primary body about its spin (Y) axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinParameters {
    period: f64,
    normalized_period: f64,
}

impl SpinParameters {
    pub fn new(period: f64) -> Result<Self, KinematicsError> {
        let period = validate_period(period)?;
        Ok(Self {
            period,
            normalized_period: period / TAU,
        })
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Spin angle in radians at time `t`.
    pub fn angle(&self, t: f64) -> f64 {
        t / self.normalized_period
    }
}

/// Absolute (Earth-centered) state of the scene at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicState {
    /// Simulated minutes this state was evaluated at
    pub time: f64,
    /// Sun position
    pub sun_position: DVec3,
    /// Leader spacecraft position
    pub body_position: DVec3,
    /// Leader spacecraft velocity (direction only is meaningful)
    pub body_velocity: DVec3,
    /// Earth orientation as XYZ Euler angles in radians
    pub primary_rotation: DVec3,
}

/// The scene's fixed orbits: the sun's apparent orbit, the leader's orbit and
/// Earth's spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitKinematics {
    pub sun_orbit: CircularOrbit,
    pub body_orbit: CircularOrbit,
    pub primary_spin: SpinParameters,
}

impl Default for OrbitKinematics {
    fn default() -> Self {
        let sun = OrbitParameters {
            radius: SUN_ORBIT_RADIUS,
            period: SUN_ORBIT_PERIOD,
            inclination: SUN_INCLINATION_DEG * DEG_TO_RAD,
        };
        let leader = OrbitParameters {
            radius: LEADER_ORBIT_RADIUS,
            period: LEADER_ORBIT_PERIOD,
            inclination: LEADER_INCLINATION_DEG * DEG_TO_RAD,
        };
        let spin = SpinParameters {
            period: EARTH_SPIN_PERIOD,
            normalized_period: EARTH_SPIN_PERIOD / TAU,
        };
        Self::new(sun, leader, spin)
    }
}

impl OrbitKinematics {
    pub fn new(sun: OrbitParameters, body: OrbitParameters, primary_spin: SpinParameters) -> Self {
        Self {
            sun_orbit: CircularOrbit::new(sun),
            body_orbit: CircularOrbit::new(body),
            primary_spin,
        }
    }

    /// Evaluate every body at simulated time `t` (minutes).
    ///
    /// Pure: equal `t` always gives bit-identical output.
    pub fn compute_state(&self, t: f64) -> Result<KinematicState, KinematicsError> {
        if !t.is_finite() {
            return Err(KinematicsError::NonFiniteTime(t));
        }

        Ok(KinematicState {
            time: t,
            sun_position: self.sun_orbit.position(t),
            body_position: self.body_orbit.position(t),
            body_velocity: self.body_orbit.velocity(t),
            primary_rotation: DVec3::new(0.0, self.primary_spin.angle(t), 0.0),
        })
    }
}
