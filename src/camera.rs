//! Orbit camera for the viewer.
//!
//! The camera circles a target point: left-drag rotates, scroll zooms. Each
//! view mode has a preset that the camera jumps to when the mode changes.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::dynamics::{DynamicsController, ViewMode};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Far clip plane; the sun orbits at 1000 units so this leaves room to zoom out.
pub const FAR_PLANE: f32 = 5000.0;

/// Closest the camera may get to its target.
pub const MIN_DISTANCE: f32 = 2.0;

/// Farthest the camera may get from its target.
pub const MAX_DISTANCE: f32 = 3000.0;

/// Camera distance when riding along with the leader.
pub const LEADER_VIEW_DISTANCE: f32 = 50.0;

/// Camera distance when centered on Earth.
pub const EARTH_VIEW_DISTANCE: f32 = 200.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of mouse drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Pitch is kept just short of the poles so "up" stays defined.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical camera placement around a target.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub target: Vec3,
    /// Rotation about +Y in radians; 0 looks from +Z, π/2 from +X
    pub yaw: f32,
    /// Elevation above the XZ plane in radians
    pub pitch: f32,
    /// Distance from the target
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::for_mode(ViewMode::default())
    }
}

impl OrbitCamera {
    /// Preset placement for a view mode.
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            // Look along -X at the leader, Earth off to the left
            ViewMode::BodyCentered => Self {
                target: Vec3::ZERO,
                yaw: std::f32::consts::FRAC_PI_2,
                pitch: 0.0,
                distance: LEADER_VIEW_DISTANCE,
            },
            ViewMode::PrimaryCentered => Self {
                target: Vec3::ZERO,
                yaw: 0.0,
                pitch: 0.0,
                distance: EARTH_VIEW_DISTANCE,
            },
        }
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// Camera transform looking at the target.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// Rotate by a mouse drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Logarithmic zoom: positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        let zoom_factor = (1.0 - scroll * ZOOM_SPEED).max(0.1);
        self.distance = (self.distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (apply_mode_preset, camera_controls, apply_orbit_camera).chain(),
            );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: 0.1,
            far: FAR_PLANE,
            ..default()
        }),
        orbit.transform(),
        MainCamera,
    ));
}

/// Jump to the preset for the active mode whenever the mode changes.
fn apply_mode_preset(
    dynamics: Res<DynamicsController>,
    mut orbit: ResMut<OrbitCamera>,
    mut last_mode: Local<Option<ViewMode>>,
) {
    let mode = dynamics.mode();
    if *last_mode == Some(mode) {
        return;
    }
    // The first frame keeps whatever placement was configured at startup
    if last_mode.is_some() {
        *orbit = OrbitCamera::for_mode(mode);
    }
    *last_mode = Some(mode);
}

/// Left-drag to rotate, scroll to zoom.
fn camera_controls(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut orbit: ResMut<OrbitCamera>,
    mut contexts: EguiContexts,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        orbit.rotate(mouse_motion.delta);
    }

    if mouse_scroll.delta.y != 0.0 {
        orbit.zoom(mouse_scroll.delta.y);
    }
}

/// Write the orbit placement into the camera transform.
fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    *transform = orbit.transform();
}
