use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::touch::Touches;
use bevy::{prelude::*, window::PrimaryWindow};
use constants::camera::{
    ORBIT_AUTO_ROTATE_SPEED, ORBIT_DAMPING, ORBIT_DRAG_SENSITIVITY, ORBIT_MAX_DISTANCE,
    ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_ZOOM_STEP,
};

use crate::engine::core::frame::SceneCamera;

const MIN_POLAR: f32 = 1e-4;

/// Damped orbit rig around a look target. Reads the camera's current
/// position every frame, so anything else moving the camera (flights,
/// zoom buttons) composes with it.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
    /// Pending (azimuth, polar) change, released a damping fraction per frame.
    rotate_delta: Vec2,
    zoom_scale: f32,
    last_pinch_distance: Option<f32>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: constants::camera::HOME.look_at,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            max_polar: ORBIT_MAX_POLAR,
            rotate_delta: Vec2::ZERO,
            zoom_scale: 1.0,
            last_pinch_distance: None,
        }
    }
}

impl OrbitCamera {
    /// Azimuth step per frame while auto-rotating (one turn per minute at speed 1, 60 fps).
    pub fn auto_rotate_angle(&self) -> f32 {
        std::f32::consts::TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    pub fn rotate(&mut self, azimuth: f32, polar: f32) {
        self.rotate_delta += Vec2::new(azimuth, polar);
    }

    /// Scale the orbit distance; values below 1 move closer.
    pub fn dolly(&mut self, scale: f32) {
        self.zoom_scale *= scale;
    }

    /// Advance the rig one frame from `position` and return the new camera position.
    pub fn update(&mut self, position: Vec3, user_active: bool) -> Vec3 {
        let offset = position - self.target;
        let radius = offset.length();
        if !radius.is_finite() || radius < f32::EPSILON {
            return position;
        }

        if self.auto_rotate && !user_active {
            self.rotate_delta.x -= self.auto_rotate_angle();
        }

        let theta = offset.x.atan2(offset.z) + self.rotate_delta.x * self.damping;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + self.rotate_delta.y * self.damping)
            .clamp(MIN_POLAR, self.max_polar);
        let radius = (radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);

        self.zoom_scale = 1.0;
        self.rotate_delta *= 1.0 - self.damping;

        self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            )
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Full window height of drag turns the camera once around.
    let radians_per_pixel = windows
        .single()
        .map(|window| std::f32::consts::TAU / window.height().max(1.0))
        .unwrap_or(ORBIT_DRAG_SENSITIVITY);

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let dragging = mouse_button.pressed(MouseButton::Left);
    if dragging && mouse_delta != Vec2::ZERO {
        orbit.rotate(-mouse_delta.x * radians_per_pixel, -mouse_delta.y * radians_per_pixel);
    }

    let mut scroll_lines = 0.0;
    for ev in scroll_events.read() {
        scroll_lines += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_lines.abs() > f32::EPSILON {
        orbit.dolly(ORBIT_ZOOM_STEP.powf(scroll_lines));
    }

    let active: Vec<_> = touches.iter().collect();
    match active.as_slice() {
        [finger] => {
            let delta = finger.delta();
            orbit.rotate(-delta.x * radians_per_pixel, -delta.y * radians_per_pixel);
            orbit.last_pinch_distance = None;
        }
        [first, second, ..] => {
            let distance = first.position().distance(second.position());
            if let Some(previous) = orbit.last_pinch_distance {
                if distance > f32::EPSILON {
                    orbit.dolly(previous / distance);
                }
            }
            orbit.last_pinch_distance = Some(distance);
        }
        [] => orbit.last_pinch_distance = None,
    }

    let user_active = dragging || !active.is_empty();
    let position = orbit.update(camera_transform.translation, user_active);
    camera_transform.translation = position;
    camera_transform.look_at(orbit.target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_clamped() {
        let mut orbit = OrbitCamera {
            auto_rotate: false,
            ..default()
        };
        let near = orbit.update(orbit.target + Vec3::new(0.0, 5.0, 5.0), false);
        assert!((near.distance(orbit.target) - ORBIT_MIN_DISTANCE).abs() < 1e-3);

        orbit.dolly(10.0);
        let far = orbit.update(orbit.target + Vec3::new(0.0, 50.0, 50.0), false);
        assert!((far.distance(orbit.target) - ORBIT_MAX_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn camera_never_dips_below_polar_limit() {
        let mut orbit = OrbitCamera {
            auto_rotate: false,
            ..default()
        };
        let below = orbit.target + Vec3::new(40.0, -10.0, 0.0);
        let position = orbit.update(below, false);
        let offset = position - orbit.target;
        let polar = (offset.y / offset.length()).acos();
        assert!(polar <= ORBIT_MAX_POLAR + 1e-4);
        assert!(position.y > orbit.target.y);
    }

    #[test]
    fn auto_rotate_turns_the_same_way_each_frame() {
        let mut orbit = OrbitCamera::default();
        let start = constants::camera::HOME.position;
        let mut position = start;
        let mut last_azimuth = (start - orbit.target).x.atan2((start - orbit.target).z);
        for _ in 0..30 {
            position = orbit.update(position, false);
            let offset = position - orbit.target;
            let azimuth = offset.x.atan2(offset.z);
            assert!(azimuth < last_azimuth);
            last_azimuth = azimuth;
        }
        assert!((position.distance(orbit.target) - start.distance(orbit.target)).abs() < 1e-2);
    }

    #[test]
    fn user_input_suspends_auto_rotate() {
        let mut orbit = OrbitCamera::default();
        let start = constants::camera::HOME.position;
        let position = orbit.update(start, true);
        assert!(position.distance(start) < 1e-3);
    }
}
