//! Scene body spawning.
//!
//! Handles the visual representation of the sun, Earth and the leader and
//! follower spacecraft.

use bevy::prelude::*;

/// Visual radius of the sun. Deliberately far smaller than the real ratio so
/// it fits in the scene.
pub const SUN_RENDER_RADIUS: f32 = 30.0;

/// Visual radius of Earth (render units are 100 km).
pub const EARTH_RENDER_RADIUS: f32 = 63.7;

/// Spacecraft box dimensions; the long side points along +Z.
pub const SPACECRAFT_SIZE: Vec3 = Vec3::new(1.0, 1.0, 2.0);

/// Component marking an entity as one of the rendered bodies.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneBody {
    Sun,
    Earth,
    Leader,
    Follower,
}

impl SceneBody {
    pub const ALL: [SceneBody; 4] = [
        SceneBody::Sun,
        SceneBody::Earth,
        SceneBody::Leader,
        SceneBody::Follower,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SceneBody::Sun => "Sun",
            SceneBody::Earth => "Earth",
            SceneBody::Leader => "Leader",
            SceneBody::Follower => "Follower",
        }
    }

    fn color(&self) -> Color {
        match self {
            SceneBody::Sun => Color::srgb(1.0, 0.95, 0.4),
            SceneBody::Earth => Color::srgb(0.2, 0.5, 0.8),
            SceneBody::Leader => Color::srgb_u8(0xb5, 0xb5, 0x35),
            SceneBody::Follower => Color::srgb_u8(0xa2, 0x41, 0xcc),
        }
    }
}

/// Marker for the directional light that shines from the sun.
#[derive(Component)]
pub struct Sunlight;

/// Spawn the sun, Earth, both spacecraft and the sunlight.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Unit sphere, scaled per body
    let sphere = meshes.add(Sphere::new(1.0));
    let spacecraft = meshes.add(Cuboid::from_size(SPACECRAFT_SIZE));

    for body in SceneBody::ALL {
        let color = body.color();
        let (mesh, scale, material) = match body {
            SceneBody::Sun => (
                sphere.clone(),
                SUN_RENDER_RADIUS,
                StandardMaterial {
                    base_color: color,
                    emissive: color.to_linear() * 2.0,
                    unlit: true,
                    ..default()
                },
            ),
            SceneBody::Earth => (
                sphere.clone(),
                EARTH_RENDER_RADIUS,
                StandardMaterial {
                    base_color: color,
                    perceptual_roughness: 0.7,
                    ..default()
                },
            ),
            // Spacecraft are flat-shaded markers
            SceneBody::Leader | SceneBody::Follower => (
                spacecraft.clone(),
                1.0,
                StandardMaterial {
                    base_color: color,
                    unlit: true,
                    ..default()
                },
            ),
        };

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(materials.add(material)),
            Transform::from_scale(Vec3::splat(scale)),
            body,
            Name::new(body.name()),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 5000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
        Sunlight,
    ));

    info!("Spawned {} scene bodies", SceneBody::ALL.len());
}
