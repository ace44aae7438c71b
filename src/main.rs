//! Hillview - leader/follower orbit viewer
//!
//! A desktop application showing the sun, Earth and a spacecraft formation on
//! circular orbits, viewed either around Earth or riding along with the
//! leader in its Hill frame.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use hillview::camera::CameraPlugin;
use hillview::dynamics::{DynamicsController, DynamicsPlugin};
use hillview::input::InputPlugin;
use hillview::render::RenderPlugin;
use hillview::time::TimePlugin;
use hillview::types::SimulationTime;
use hillview::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hillview".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SimulationTime::default())
        .insert_resource(DynamicsController::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Add simulation plugins
        .add_plugins((
            TimePlugin,
            DynamicsPlugin,
            CameraPlugin,
            RenderPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
