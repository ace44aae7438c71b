//! Hill (body-centered rotating) frame.
//!
//! Axes, in frame coordinates:
//! - X: radial, away from the primary
//! - Y: cross-track, `v̂ × r̂`
//! - Z: along-track, the direction of motion
//!
//! A point at the orbiting body maps to the origin and the primary's center
//! maps to `(-|r|, 0, 0)`.

use bevy::math::{DMat3, DVec3};

/// Below this `|v̂ × r̂|` the position and velocity are treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("body position or velocity is not finite")]
    NonFinite,

    #[error("body position has zero length")]
    ZeroPosition,

    #[error("body velocity has zero length")]
    ZeroVelocity,

    #[error("body position and velocity are parallel; the cross-track axis is undefined")]
    ParallelVectors,
}

/// Orthonormal radial / cross-track / along-track triad anchored at a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HillFrame {
    /// Absolute position of the body (frame origin)
    pub origin: DVec3,
    /// r̂
    pub radial: DVec3,
    /// ŵ = normalize(v̂ × r̂)
    pub cross_track: DVec3,
    /// v̂
    pub along_track: DVec3,
}

impl HillFrame {
    /// Build the frame from a body's absolute position and velocity.
    ///
    /// The along-track axis is rebuilt as `r̂ × ŵ` so the triad stays
    /// orthonormal when the velocity is not exactly perpendicular to the
    /// radius. For a circular orbit this is the normalized velocity.
    ///
    /// # Errors
    /// Fails when either vector is non-finite or zero, or when they are
    /// parallel.
    pub fn new(body_position: DVec3, body_velocity: DVec3) -> Result<Self, FrameError> {
        if !body_position.is_finite() || !body_velocity.is_finite() {
            return Err(FrameError::NonFinite);
        }

        let radial = body_position
            .try_normalize()
            .ok_or(FrameError::ZeroPosition)?;
        let velocity_dir = body_velocity
            .try_normalize()
            .ok_or(FrameError::ZeroVelocity)?;

        let cross = velocity_dir.cross(radial);
        if cross.length() < PARALLEL_TOLERANCE {
            return Err(FrameError::ParallelVectors);
        }
        let cross_track = cross.normalize();
        let along_track = radial.cross(cross_track);

        Ok(Self {
            origin: body_position,
            radial,
            cross_track,
            along_track,
        })
    }

    /// Frame-to-world rotation: columns are `r̂, ŵ, v̂`.
    pub fn frame_to_world(&self) -> DMat3 {
        DMat3::from_cols(self.radial, self.cross_track, self.along_track)
    }

    /// World-to-frame rotation. The triad is orthonormal, so this is the
    /// transpose.
    pub fn world_to_frame(&self) -> DMat3 {
        self.frame_to_world().transpose()
    }

    /// Re-express an absolute position relative to the body, in frame axes.
    pub fn to_body_centered(&self, absolute: DVec3) -> DVec3 {
        self.world_to_frame() * (absolute - self.origin)
    }

    /// Inverse of [`HillFrame::to_body_centered`].
    pub fn to_world(&self, relative: DVec3) -> DVec3 {
        self.frame_to_world() * relative + self.origin
    }

    /// Rotate a direction (no translation) into frame axes.
    pub fn direction_to_frame(&self, direction: DVec3) -> DVec3 {
        self.world_to_frame() * direction
    }
}

/// One-shot transform of `absolute` into the Hill frame of a body.
pub fn to_body_centered(
    absolute: DVec3,
    body_position: DVec3,
    body_velocity: DVec3,
) -> Result<DVec3, FrameError> {
    Ok(HillFrame::new(body_position, body_velocity)?.to_body_centered(absolute))
}
