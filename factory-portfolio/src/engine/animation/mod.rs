//! Per-frame kinematic animation of the factory scene.
//!
//! Scene builders register every moving part once; a single dispatcher
//! walks the registry each frame with the scene clock.

pub mod conveyor;
pub mod machinery;
pub mod marker;
pub mod particles;

/// Animated-object enum, registry resource and the dispatch system.
pub mod registry;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::core::frame::FrameSet;
use registry::{AnimatedObjectRegistry, update_animated_objects};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimatedObjectRegistry>().add_systems(
            Update,
            update_animated_objects
                .in_set(FrameSet::Animate)
                .run_if(in_state(AppState::Running)),
        );
    }
}
