//! Top panel with the view mode buttons and the clock.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::dynamics::{DynamicsController, ViewMode};
use crate::types::{DisplaySettings, SimulationTime, format_sim_time};

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 220);
    pub const ACTIVE: Color32 = Color32::from_rgb(85, 221, 136);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// One button in the mode selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeButton {
    Leader,
    Follower,
    Earth,
}

impl ModeButton {
    pub const ALL: [ModeButton; 3] = [ModeButton::Leader, ModeButton::Follower, ModeButton::Earth];

    /// Id used to look the mode up by name.
    pub fn id(&self) -> &'static str {
        match self {
            ModeButton::Leader => "leader",
            ModeButton::Follower => "follower",
            ModeButton::Earth => "earth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModeButton::Leader => "Leader",
            ModeButton::Follower => "Follower",
            ModeButton::Earth => "Earth",
        }
    }

    /// Mode this button selects.
    pub fn mode(&self) -> ViewMode {
        match self {
            ModeButton::Leader | ModeButton::Follower => ViewMode::BodyCentered,
            ModeButton::Earth => ViewMode::PrimaryCentered,
        }
    }
}

/// System that renders the mode panel.
pub fn mode_panel_system(
    mut contexts: EguiContexts,
    mut dynamics: ResMut<DynamicsController>,
    mut sim_time: ResMut<SimulationTime>,
    mut settings: ResMut<DisplaySettings>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("mode_panel")
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(egui::RichText::new("View:").color(colors::TEXT));
                let current = dynamics.mode();
                for button in ModeButton::ALL {
                    let text = egui::RichText::new(button.label()).color(if button.mode() == current {
                        colors::ACTIVE
                    } else {
                        colors::TEXT
                    });
                    if ui.button(text).clicked() {
                        match dynamics.set_mode_str(button.id()) {
                            Ok(true) => info!("View mode: {}", dynamics.mode()),
                            Ok(false) => {}
                            Err(err) => warn!("Mode button {:?} rejected: {}", button, err),
                        }
                    }
                }

                ui.separator();

                let icon = if sim_time.paused { "\u{25B6}" } else { "\u{23F8}" };
                if ui
                    .button(icon)
                    .on_hover_text(if sim_time.paused { "Play (Space)" } else { "Pause (Space)" })
                    .clicked()
                {
                    sim_time.paused = !sim_time.paused;
                }

                ui.label(
                    egui::RichText::new(format_sim_time(sim_time.current))
                        .monospace()
                        .color(colors::TEXT),
                );

                let mut realtime = sim_time.is_realtime();
                if ui
                    .checkbox(&mut realtime, "Real time")
                    .on_hover_text("Toggle real-time speed (T)")
                    .changed()
                {
                    sim_time.toggle_step();
                }

                ui.checkbox(&mut settings.show_axes, "Axes")
                    .on_hover_text("Show frame axes (A)");
            });
        });
}
