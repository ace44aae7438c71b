//! Time advancement system for the orbit viewer.
//!
//! Simulated time moves by a fixed step per rendered frame, not by wall-clock
//! delta, so one frame always covers the same slice of the orbit.

use bevy::prelude::*;

use crate::types::{SimulationSet, SimulationTime};

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTime>()
            .add_systems(Update, advance_time.in_set(SimulationSet::AdvanceTime));
    }
}

/// Advance simulation time by one frame step.
fn advance_time(mut sim_time: ResMut<SimulationTime>) {
    sim_time.advance();
}
