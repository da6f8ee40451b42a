//! Scene camera rig.
//!
//! An eased fly-to navigator between named viewpoints, handing back to a
//! damped orbit controller with auto-rotate.

/// Fly-to flights and the camera command event.
pub mod navigator;

/// Orbit controller with damping, distance and polar limits.
pub mod orbit_camera;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::core::frame::FrameSet;
use navigator::{CameraCommand, CameraNavigator, advance_camera_flight, apply_camera_commands};
use orbit_camera::{OrbitCamera, orbit_camera_controller};

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraNavigator>()
            .init_resource::<OrbitCamera>()
            .add_event::<CameraCommand>()
            .add_systems(
                Update,
                (
                    apply_camera_commands,
                    advance_camera_flight,
                    orbit_camera_controller,
                )
                    .chain()
                    .in_set(FrameSet::Camera)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
