use bevy::prelude::*;
use constants::camera::{FLIGHT_STEP_PER_FRAME, Viewpoint, viewpoint};

use super::orbit_camera::OrbitCamera;
use crate::engine::core::frame::SceneCamera;

/// Requests for the camera rig, produced by UI commands.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    FlyTo(&'static Viewpoint),
    SetAutoRotate(bool),
    ToggleAutoRotate,
    /// Move along the current view direction by this distance.
    Zoom(f32),
}

impl CameraCommand {
    /// Fly to a named viewpoint; unknown names produce no command.
    pub fn fly_to_named(name: &str) -> Option<Self> {
        viewpoint(name).map(Self::FlyTo)
    }
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One eased transition of camera position and look target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFlight {
    pub start_position: Vec3,
    pub start_look: Vec3,
    pub end_position: Vec3,
    pub end_look: Vec3,
    pub progress: f32,
}

impl CameraFlight {
    pub fn new(start_position: Vec3, start_look: Vec3, end_position: Vec3, end_look: Vec3) -> Self {
        Self {
            start_position,
            start_look,
            end_position,
            end_look,
            progress: 0.0,
        }
    }

    /// Advance one frame and return the (position, look) pose to apply.
    pub fn step(&mut self, step: f32) -> (Vec3, Vec3) {
        self.progress = (self.progress + step).min(1.0);
        let eased = ease_in_out_cubic(self.progress);
        (
            self.start_position.lerp(self.end_position, eased),
            self.start_look.lerp(self.end_look, eased),
        )
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Holds at most one active flight. Starting a new one replaces it.
#[derive(Resource, Debug, Default)]
pub struct CameraNavigator {
    flight: Option<CameraFlight>,
}

impl CameraNavigator {
    pub fn fly_to(
        &mut self,
        current_position: Vec3,
        current_look: Vec3,
        destination: Vec3,
        look_at: Vec3,
    ) {
        self.flight = Some(CameraFlight::new(
            current_position,
            current_look,
            destination,
            look_at,
        ));
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    pub fn flight(&self) -> Option<&CameraFlight> {
        self.flight.as_ref()
    }

    /// Pose for this frame, if a flight is running. The flight is dropped
    /// after the frame that reaches its destination.
    pub fn advance(&mut self) -> Option<(Vec3, Vec3)> {
        let flight = self.flight.as_mut()?;
        let pose = flight.step(FLIGHT_STEP_PER_FRAME);
        if flight.is_finished() {
            self.flight = None;
        }
        Some(pose)
    }
}

pub fn apply_camera_commands(
    mut commands: EventReader<CameraCommand>,
    mut navigator: ResMut<CameraNavigator>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        commands.clear();
        return;
    };

    for command in commands.read() {
        match *command {
            CameraCommand::FlyTo(viewpoint) => {
                debug!("Camera flight to {}", viewpoint.name);
                navigator.fly_to(
                    camera_transform.translation,
                    orbit.target,
                    viewpoint.position,
                    viewpoint.look_at,
                );
            }
            CameraCommand::SetAutoRotate(enabled) => orbit.auto_rotate = enabled,
            CameraCommand::ToggleAutoRotate => orbit.auto_rotate = !orbit.auto_rotate,
            CameraCommand::Zoom(distance) => {
                let forward = camera_transform.forward();
                camera_transform.translation += forward * distance;
            }
        }
    }
}

pub fn advance_camera_flight(
    mut navigator: ResMut<CameraNavigator>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
) {
    if !navigator.is_flying() {
        return;
    }
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if let Some((position, look)) = navigator.advance() {
        camera_transform.translation = position;
        orbit.target = look;
    }
}
