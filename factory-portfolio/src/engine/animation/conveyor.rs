use bevy::prelude::*;
use constants::animation::{PACKAGE_PHASE_SPACING, PACKAGE_STEP_PER_FRAME};
use constants::scene_layout::CONVEYOR_WAYPOINTS;

use super::registry::{AnimationFault, AnimationTargets, ensure_finite};

/// Position on the closed conveyor loop for `progress` in [0, 1).
/// Each quarter of the progress range covers one segment.
pub fn conveyor_position(progress: f32) -> Vec2 {
    let segments = CONVEYOR_WAYPOINTS.len();
    let scaled = wrap_progress(progress) * segments as f32;
    let segment = (scaled.floor() as usize) % segments;
    let fraction = scaled - segment as f32;

    let start = CONVEYOR_WAYPOINTS[segment];
    let end = CONVEYOR_WAYPOINTS[(segment + 1) % segments];
    start.lerp(end, fraction)
}

/// Progress folded into [0, 1). `rem_euclid` rounds tiny negatives up to
/// exactly 1.0, which folds back to the loop start.
pub fn wrap_progress(progress: f32) -> f32 {
    let wrapped = progress.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

#[derive(Debug, Clone)]
pub struct ConveyorPackage {
    pub entity: Entity,
    pub progress: f32,
    pub step: f32,
}

impl ConveyorPackage {
    /// Package `index` of the loop, spaced along the belt.
    pub fn new(entity: Entity, index: usize) -> Self {
        Self {
            entity,
            progress: wrap_progress(index as f32 * PACKAGE_PHASE_SPACING),
            step: PACKAGE_STEP_PER_FRAME,
        }
    }

    pub fn advance(&mut self) {
        self.progress = wrap_progress(self.progress + self.step);
    }

    pub fn update(&mut self, targets: &mut AnimationTargets) -> Result<(), AnimationFault> {
        self.advance();
        let position = conveyor_position(self.progress);
        ensure_finite("package", &[position.x, position.y])?;

        targets.with_transform(self.entity, |transform| {
            transform.translation.x = position.x;
            transform.translation.z = position.y;
        });
        Ok(())
    }
}
