use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;
use constants::animation::{
    BLINK_BASE, BLINK_RATE, BLINK_SWING, MARKER_BOB_AMPLITUDE, MARKER_BOB_RATE, MARKER_CORE_RATE,
    MARKER_RING_RATE, MARKER_SATELLITE_BOB_AMPLITUDE, MARKER_SATELLITE_BOB_RATE,
    MARKER_SATELLITE_COUNT, MARKER_SATELLITE_ORBIT_RATE, MARKER_SATELLITE_RADIUS,
    MARKER_SATELLITE_SLOT_OFFSET, MARKER_SPIN_RATE,
};

use super::registry::{AnimationFault, AnimationTargets, ensure_finite};

/// Resting angle of satellite `index` around the marker core.
pub fn satellite_base_angle(index: usize) -> f32 {
    index as f32 / MARKER_SATELLITE_COUNT as f32 * TAU
}

pub fn satellite_position(index: usize, t: f32) -> Vec3 {
    let angle = satellite_base_angle(index) + t * MARKER_SATELLITE_ORBIT_RATE;
    let slot = (index + MARKER_SATELLITE_SLOT_OFFSET) as f32;
    Vec3::new(
        angle.cos() * MARKER_SATELLITE_RADIUS,
        (t * MARKER_SATELLITE_BOB_RATE + slot).sin() * MARKER_SATELLITE_BOB_AMPLITUDE,
        angle.sin() * MARKER_SATELLITE_RADIUS,
    )
}

/// Height above the resting position. Starts at zero and never drifts.
pub fn marker_bob(t: f32) -> f32 {
    MARKER_BOB_AMPLITUDE * (1.0 - (t * MARKER_BOB_RATE).cos())
}

/// Static tilt laying the ring flat before its own roll.
pub fn ring_rotation(t: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, FRAC_PI_2, 0.0, t * MARKER_RING_RATE)
}

/// Floating category marker: spinning root, tumbling core, rolling ring
/// and a ring of orbiting satellites.
#[derive(Debug, Clone)]
pub struct OrbitingMarker {
    pub root: Entity,
    pub core: Entity,
    pub ring: Entity,
    pub satellites: Vec<Entity>,
    /// Resting local position of the root.
    pub base: Vec3,
}

impl OrbitingMarker {
    pub fn update(&self, t: f32, targets: &mut AnimationTargets) -> Result<(), AnimationFault> {
        let bob = marker_bob(t);
        ensure_finite("marker", &[t, bob])?;

        let base = self.base;
        targets.with_transform(self.root, |transform| {
            transform.translation = base + Vec3::Y * bob;
            transform.rotation = Quat::from_rotation_y(t * MARKER_SPIN_RATE);
        });
        targets.with_transform(self.core, |transform| {
            transform.rotation = Quat::from_rotation_x(t * MARKER_CORE_RATE);
        });
        targets.with_transform(self.ring, |transform| {
            transform.rotation = ring_rotation(t);
        });
        for (index, satellite) in self.satellites.iter().enumerate() {
            let position = satellite_position(index, t);
            targets.with_transform(*satellite, |transform| {
                transform.translation = position;
            });
        }
        Ok(())
    }
}

pub fn blink_strength(t: f32) -> f32 {
    BLINK_BASE + (t * BLINK_RATE).sin() * BLINK_SWING
}

/// Beacon whose emissive strength pulses between off and full.
#[derive(Debug, Clone)]
pub struct BlinkingLight {
    pub entity: Entity,
    pub material: Handle<StandardMaterial>,
    /// Emissive colour at full strength.
    pub colour: LinearRgba,
}

impl BlinkingLight {
    pub fn update(&self, t: f32, targets: &mut AnimationTargets) -> Result<(), AnimationFault> {
        let strength = blink_strength(t);
        ensure_finite("blink", &[strength])?;
        targets.set_emissive(&self.material, scale_emissive(self.colour, strength));
        Ok(())
    }
}

pub fn scale_emissive(colour: LinearRgba, strength: f32) -> LinearRgba {
    LinearRgba::rgb(
        colour.red * strength,
        colour.green * strength,
        colour.blue * strength,
    )
}
