//! Pointer interaction with the scene markers.
//!
//! Screen position → camera ray → nearest marker part → owning marker →
//! category. Hover drives the cursor icon and tooltip; clicks and taps
//! open the category's projects.

pub mod hover;
pub mod picking;

/// Ray intersection tests for pick volumes.
pub mod ray;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::core::frame::FrameSet;
use hover::{HoverState, marker_click_system, marker_hover_system};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>().add_systems(
            Update,
            (marker_hover_system, marker_click_system)
                .in_set(FrameSet::Input)
                .run_if(in_state(AppState::Running)),
        );
    }
}
