//! Position synchronization between the dynamics layout and rendering.

use bevy::{math::DVec3, prelude::*};

use crate::dynamics::{DynamicsController, SceneLayout};
use crate::render::bodies::{SceneBody, Sunlight};

/// Where `body` sits in `layout`.
pub fn body_translation(body: SceneBody, layout: &SceneLayout) -> DVec3 {
    match body {
        SceneBody::Sun => layout.sun,
        SceneBody::Earth => layout.earth,
        SceneBody::Leader => layout.leader,
        SceneBody::Follower => layout.follower,
    }
}

/// Copy the current layout into body transforms.
///
/// Runs after the dynamics update; does nothing until a layout exists.
pub fn sync_body_transforms(
    dynamics: Res<DynamicsController>,
    mut bodies: Query<(&mut Transform, &SceneBody)>,
) {
    let Some(layout) = dynamics.layout() else {
        return;
    };

    for (mut transform, body) in bodies.iter_mut() {
        transform.translation = body_translation(*body, layout).as_vec3();

        if *body == SceneBody::Earth {
            let r = layout.earth_rotation.as_vec3();
            transform.rotation = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        }
    }
}

/// Point the sunlight from the sun toward the layout origin.
pub fn sync_sunlight(
    dynamics: Res<DynamicsController>,
    mut lights: Query<&mut Transform, With<Sunlight>>,
) {
    let Some(layout) = dynamics.layout() else {
        return;
    };

    let sun = layout.sun.as_vec3();
    for mut transform in lights.iter_mut() {
        *transform = Transform::from_translation(sun).looking_at(Vec3::ZERO, Vec3::Y);
    }
}
