//! Keyboard shortcuts for simulation and view control.

use bevy::prelude::*;

use crate::dynamics::{DynamicsController, ViewMode};
use crate::types::{DisplaySettings, SimulationTime};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// View mode selected by a key, if any.
///
/// L and F ride along with the formation, E centers on Earth.
pub fn mode_for_key(key: KeyCode) -> Option<ViewMode> {
    match key {
        KeyCode::KeyL | KeyCode::KeyF => Some(ViewMode::BodyCentered),
        KeyCode::KeyE => Some(ViewMode::PrimaryCentered),
        _ => None,
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim_time: ResMut<SimulationTime>,
    mut dynamics: ResMut<DynamicsController>,
    mut settings: ResMut<DisplaySettings>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        sim_time.paused = !sim_time.paused;
        info!("Simulation {}", if sim_time.paused { "paused" } else { "running" });
    }

    for key in keys.get_just_pressed() {
        if let Some(mode) = mode_for_key(*key)
            && dynamics.set_mode(mode)
        {
            info!("View mode: {}", mode);
        }
    }

    // T: switch between animation speed and real time
    if keys.just_pressed(KeyCode::KeyT) {
        sim_time.toggle_step();
        info!(
            "Time step: {} min/frame{}",
            sim_time.step,
            if sim_time.is_realtime() { " (real-time)" } else { "" }
        );
    }

    // A: toggle the axis overlay
    if keys.just_pressed(KeyCode::KeyA) {
        settings.show_axes = !settings.show_axes;
    }

    // R: rewind the clock
    if keys.just_pressed(KeyCode::KeyR) {
        sim_time.reset();
        info!("Simulation clock reset");
    }
}
