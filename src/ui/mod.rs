//! UI module providing the egui control panel.

mod mode_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use mode_panel::ModeButton;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, mode_panel::mode_panel_system);
    }
}
