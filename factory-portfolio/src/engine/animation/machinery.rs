use bevy::prelude::*;
use constants::animation::{
    CRANE_JIB_AMPLITUDE, CRANE_JIB_RATE, CRANE_TROLLEY_AMPLITUDE, CRANE_TROLLEY_CENTRE,
    CRANE_TROLLEY_RATE, GANTRY_CABLE_MID, GANTRY_CABLE_SWING, GANTRY_CYCLE_RATE,
    GANTRY_DROP_THRESHOLD, GANTRY_HOOK_OFFSET, GANTRY_TROLLEY_AMPLITUDE, GANTRY_TROLLEY_RATE,
    ROBOT_GRIPPER_WAG, ROBOT_LOWER_ARM_SWING, ROBOT_LOWER_ARM_TWIST, ROBOT_UPPER_ARM_SWING,
};

use super::registry::{AnimationFault, AnimationTargets, ensure_finite};

fn oscillate((rate, amplitude, offset): (f32, f32, f32), t: f32, phase: f32) -> f32 {
    (t * rate + phase).sin() * amplitude + offset
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotPose {
    pub lower_arm_yaw: f32,
    pub lower_arm_roll: f32,
    pub upper_arm_roll: f32,
    pub gripper_roll: f32,
}

pub fn robot_pose(t: f32, phase: f32) -> RobotPose {
    RobotPose {
        lower_arm_yaw: oscillate(ROBOT_LOWER_ARM_TWIST, t, phase),
        lower_arm_roll: oscillate(ROBOT_LOWER_ARM_SWING, t, phase),
        upper_arm_roll: oscillate(ROBOT_UPPER_ARM_SWING, t, phase),
        gripper_roll: oscillate(ROBOT_GRIPPER_WAG, t, phase),
    }
}

/// Articulated arm: base yaw and shoulder on the lower arm, elbow on the
/// upper arm, wrist on the gripper.
#[derive(Debug, Clone)]
pub struct RobotArm {
    pub lower_arm: Entity,
    pub upper_arm: Entity,
    pub gripper: Entity,
    pub phase: f32,
}

impl RobotArm {
    pub fn update(&self, t: f32, targets: &mut AnimationTargets) -> Result<(), AnimationFault> {
        let pose = robot_pose(t, self.phase);
        ensure_finite(
            "robot arm",
            &[
                pose.lower_arm_yaw,
                pose.lower_arm_roll,
                pose.upper_arm_roll,
                pose.gripper_roll,
            ],
        )?;

        targets.with_transform(self.lower_arm, |transform| {
            transform.rotation =
                Quat::from_euler(EulerRot::XYZ, 0.0, pose.lower_arm_yaw, pose.lower_arm_roll);
        });
        targets.with_transform(self.upper_arm, |transform| {
            transform.rotation = Quat::from_rotation_z(pose.upper_arm_roll);
        });
        targets.with_transform(self.gripper, |transform| {
            transform.rotation = Quat::from_rotation_z(pose.gripper_roll);
        });
        Ok(())
    }
}

/// (jib yaw, trolley offset along the jib).
pub fn tower_crane_pose(t: f32) -> (f32, f32) {
    (
        (t * CRANE_JIB_RATE).sin() * CRANE_JIB_AMPLITUDE,
        CRANE_TROLLEY_CENTRE + (t * CRANE_TROLLEY_RATE).sin() * CRANE_TROLLEY_AMPLITUDE,
    )
}

#[derive(Debug, Clone)]
pub struct TowerCrane {
    pub jib: Entity,
    pub trolley: Entity,
}

impl TowerCrane {
    pub fn update(&self, t: f32, targets: &mut AnimationTargets) -> Result<(), AnimationFault> {
        let (jib_yaw, trolley_x) = tower_crane_pose(t);
        ensure_finite("tower crane", &[jib_yaw, trolley_x])?;

        targets.with_transform(self.jib, |transform| {
            transform.rotation = Quat::from_rotation_y(jib_yaw);
        });
        targets.with_transform(self.trolley, |transform| {
            transform.translation.x = trolley_x;
        });
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GantryPose {
    pub trolley_x: f32,
    pub cable_length: f32,
    pub hook_y: f32,
    pub cargo_visible: bool,
}

pub fn gantry_pose(t: f32) -> GantryPose {
    let cycle = (t * GANTRY_CYCLE_RATE).rem_euclid(std::f32::consts::TAU);
    let lift = cycle.sin();
    let cable_length = GANTRY_CABLE_MID + lift * GANTRY_CABLE_SWING;

    GantryPose {
        trolley_x: (t * GANTRY_TROLLEY_RATE).sin() * GANTRY_TROLLEY_AMPLITUDE,
        cable_length,
        hook_y: -cable_length - GANTRY_HOOK_OFFSET,
        cargo_visible: lift > GANTRY_DROP_THRESHOLD,
    }
}

/// Overhead gantry with a hoist trolley, a cable scaled to length, the
/// hook block below it and the carried cargo.
#[derive(Debug, Clone)]
pub struct GantryCrane {
    pub trolley: Entity,
    pub cable: Entity,
    pub hook: Entity,
    pub cargo: Entity,
}

impl GantryCrane {
    pub fn update(&self, t: f32, targets: &mut AnimationTargets) -> Result<(), AnimationFault> {
        let pose = gantry_pose(t);
        ensure_finite("gantry", &[pose.trolley_x, pose.cable_length, pose.hook_y])?;

        targets.with_transform(self.trolley, |transform| {
            transform.translation.x = pose.trolley_x;
        });
        targets.with_transform(self.cable, |transform| {
            transform.scale.y = pose.cable_length;
            transform.translation.y = -pose.cable_length / 2.0;
        });
        targets.with_transform(self.hook, |transform| {
            transform.translation.y = pose.hook_y;
        });
        targets.set_visible(self.cargo, pose.cargo_visible);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn robot_arms_mirror_each_other() {
        let first = robot_pose(1.3, 0.0);
        let second = robot_pose(1.3, PI);
        assert!((first.lower_arm_roll + second.lower_arm_roll).abs() < 1e-5);
        assert!((first.gripper_roll + second.gripper_roll).abs() < 1e-5);
        // Elbow swings around its -0.3 rest angle.
        assert!((first.upper_arm_roll + second.upper_arm_roll + 0.6).abs() < 1e-5);
    }

    #[test]
    fn robot_pose_at_rest() {
        let pose = robot_pose(0.0, 0.0);
        assert_eq!(pose.lower_arm_roll, 0.0);
        assert!((pose.upper_arm_roll + 0.3).abs() < 1e-6);
    }

    #[test]
    fn tower_crane_trolley_stays_on_the_jib() {
        for i in 0..200 {
            let (yaw, trolley) = tower_crane_pose(i as f32 * 0.37);
            assert!(yaw.abs() <= 0.4 + 1e-6);
            assert!((2.0 - 1e-4..=22.0 + 1e-4).contains(&trolley));
        }
    }

    #[test]
    fn gantry_cable_and_hook_stay_linked() {
        for i in 0..400 {
            let pose = gantry_pose(i as f32 * 0.21);
            assert!((4.0 - 1e-4..=12.0 + 1e-4).contains(&pose.cable_length));
            assert!((pose.hook_y + pose.cable_length + 1.5).abs() < 1e-5);
            assert!(pose.trolley_x.abs() <= 10.0 + 1e-5);
        }
    }

    #[test]
    fn gantry_drops_cargo_on_the_low_swing() {
        // cycle = 1.5 pi puts the hook at its shortest cable with sin = -1.
        let t = 1.5 * PI / GANTRY_CYCLE_RATE;
        let pose = gantry_pose(t);
        assert!(!pose.cargo_visible);
        assert!((pose.cable_length - 4.0).abs() < 1e-3);
        assert!(gantry_pose(0.0).cargo_visible);
    }
}
