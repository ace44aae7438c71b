//! Rendering systems for the orbit viewer.
//!
//! Spawns the sun, Earth and the two spacecraft, copies the dynamics layout
//! into their transforms every frame, and draws the frame-axis overlay.

pub mod axes;
pub mod bodies;
mod sync;

use bevy::prelude::*;

use self::axes::draw_frame_axes;
use self::bodies::spawn_scene;
use self::sync::{sync_body_transforms, sync_sunlight};
use crate::types::{DisplaySettings, SimulationSet};

pub use self::bodies::{SceneBody, Sunlight};
pub use self::sync::body_translation;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DisplaySettings>()
            .add_systems(Startup, spawn_scene)
            // Transforms first, then overlays that read the final layout
            .add_systems(
                Update,
                ((sync_body_transforms, sync_sunlight), draw_frame_axes)
                    .chain()
                    .in_set(SimulationSet::SyncRender),
            );
    }
}
