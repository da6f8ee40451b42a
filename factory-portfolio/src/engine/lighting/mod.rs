//! Day/night lighting.
//!
//! A single transition value drives sky, fog, ambient and every tagged
//! light. Nothing else writes rendered light intensity.

pub mod day_night;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::core::frame::FrameSet;
use day_night::{DayNightController, ambient_light, apply_day_night, sky_colour};

pub struct DayNightPlugin;

impl Plugin for DayNightPlugin {
    fn build(&self, app: &mut App) {
        let (colour, brightness) = ambient_light(0.0);
        app.init_resource::<DayNightController>()
            .insert_resource(ClearColor(sky_colour(0.0)))
            .insert_resource(AmbientLight {
                color: colour,
                brightness,
                ..default()
            })
            .add_systems(
                Update,
                apply_day_night
                    .in_set(FrameSet::Lighting)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
