//! Arrow overlay anchored at the leader: radial, along-track and sun
//! direction, plus the layout's X/Y/Z axes.

use bevy::prelude::*;

use crate::dynamics::{DynamicsController, SceneLayout};
use crate::types::DisplaySettings;

mod colors {
    use bevy::prelude::Color;

    pub const RADIAL: Color = Color::WHITE;
    pub const ALONG_TRACK: Color = Color::srgb(0.44, 0.44, 0.44);
    pub const SUN: Color = Color::srgb(1.0, 1.0, 0.0);
    pub const X: Color = Color::srgb(1.0, 0.0, 0.0);
    pub const Y: Color = Color::srgb(0.0, 1.0, 0.0);
    pub const Z: Color = Color::srgb(0.0, 0.0, 1.0);
}

/// One overlay arrow: start, end and color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayArrow {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// Arrows for `layout`, each `length` long and anchored at the leader.
pub fn overlay_arrows(layout: &SceneLayout, length: f32) -> [OverlayArrow; 6] {
    let anchor = layout.leader.as_vec3();
    let arrow = |direction: Vec3, color: Color| OverlayArrow {
        start: anchor,
        end: anchor + direction.normalize_or_zero() * length,
        color,
    };

    [
        arrow(layout.radial_axis.as_vec3(), colors::RADIAL),
        arrow(layout.along_track_axis.as_vec3(), colors::ALONG_TRACK),
        arrow(layout.sun_direction().as_vec3(), colors::SUN),
        arrow(Vec3::X, colors::X),
        arrow(Vec3::Y, colors::Y),
        arrow(Vec3::Z, colors::Z),
    ]
}

/// Draw the overlay with gizmos when enabled.
pub fn draw_frame_axes(
    mut gizmos: Gizmos,
    dynamics: Res<DynamicsController>,
    settings: Res<DisplaySettings>,
) {
    if !settings.show_axes {
        return;
    }
    let Some(layout) = dynamics.layout() else {
        return;
    };

    for arrow in overlay_arrows(layout, settings.axis_length) {
        gizmos.arrow(arrow.start, arrow.end, arrow.color);
    }
}
