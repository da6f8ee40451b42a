use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use thiserror::Error;

use super::conveyor::ConveyorPackage;
use super::machinery::{GantryCrane, RobotArm, TowerCrane};
use super::marker::{BlinkingLight, OrbitingMarker};
use super::particles::ParticleStream;
use crate::engine::core::frame::SceneClock;

/// Stable index of a registered animated object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(usize);

impl AnimationHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AnimationFault {
    #[error("{0} produced a non-finite value")]
    NonFinite(&'static str),
}

/// Reject a frame's values before any of them reach the scene.
pub fn ensure_finite(what: &'static str, values: &[f32]) -> Result<(), AnimationFault> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(AnimationFault::NonFinite(what))
    }
}

/// Scene state an animated object may write. Missing entities or assets
/// turn the write into a no-op.
#[derive(SystemParam)]
pub struct AnimationTargets<'w, 's> {
    transforms: Query<'w, 's, &'static mut Transform>,
    visibility: Query<'w, 's, &'static mut Visibility>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    meshes: ResMut<'w, Assets<Mesh>>,
}

impl AnimationTargets<'_, '_> {
    pub fn with_transform(&mut self, entity: Entity, apply: impl FnOnce(&mut Transform)) {
        if let Ok(mut transform) = self.transforms.get_mut(entity) {
            apply(&mut transform);
        }
    }

    pub fn set_visible(&mut self, entity: Entity, visible: bool) {
        if let Ok(mut visibility) = self.visibility.get_mut(entity) {
            visibility.set_if_neq(if visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            });
        }
    }

    pub fn set_emissive(&mut self, material: &Handle<StandardMaterial>, emissive: LinearRgba) {
        if let Some(material) = self.materials.get_mut(material) {
            material.emissive = emissive;
        }
    }

    pub fn write_points(&mut self, mesh: &Handle<Mesh>, positions: &[Vec3]) {
        if let Some(mesh) = self.meshes.get_mut(mesh) {
            let points: Vec<[f32; 3]> = positions.iter().map(|p| p.to_array()).collect();
            mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, points);
        }
    }
}

/// Everything the per-frame dispatcher knows how to move.
#[derive(Debug)]
pub enum AnimatedObject {
    Smoke(ParticleStream),
    Atmosphere(ParticleStream),
    Package(ConveyorPackage),
    RobotArm(RobotArm),
    Crane(TowerCrane),
    Gantry(GantryCrane),
    Marker(OrbitingMarker),
    Blink(BlinkingLight),
}

impl AnimatedObject {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Smoke(_) => "smoke",
            Self::Atmosphere(_) => "atmosphere",
            Self::Package(_) => "package",
            Self::RobotArm(_) => "robot",
            Self::Crane(_) => "crane",
            Self::Gantry(_) => "gantry",
            Self::Marker(_) => "marker",
            Self::Blink(_) => "blink",
        }
    }

    pub fn update(
        &mut self,
        clock: &SceneClock,
        targets: &mut AnimationTargets,
    ) -> Result<(), AnimationFault> {
        let t = clock.elapsed;
        match self {
            Self::Smoke(stream) | Self::Atmosphere(stream) => stream.update(t, targets),
            Self::Package(package) => package.update(targets),
            Self::RobotArm(robot) => robot.update(t, targets),
            Self::Crane(crane) => crane.update(t, targets),
            Self::Gantry(gantry) => gantry.update(t, targets),
            Self::Marker(marker) => marker.update(t, targets),
            Self::Blink(light) => light.update(t, targets),
        }
    }
}

/// Filled once while the scene is built, iterated every frame.
#[derive(Resource, Debug, Default)]
pub struct AnimatedObjectRegistry {
    objects: Vec<AnimatedObject>,
    /// Objects whose fault has already been logged.
    reported: Vec<bool>,
}

impl AnimatedObjectRegistry {
    pub fn register(&mut self, object: AnimatedObject) -> AnimationHandle {
        self.objects.push(object);
        self.reported.push(false);
        AnimationHandle(self.objects.len() - 1)
    }

    pub fn get(&self, handle: AnimationHandle) -> Option<&AnimatedObject> {
        self.objects.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.objects.iter().filter(|o| o.kind() == kind).count()
    }
}

pub fn update_animated_objects(
    clock: Res<SceneClock>,
    mut registry: ResMut<AnimatedObjectRegistry>,
    mut targets: AnimationTargets,
) {
    let AnimatedObjectRegistry { objects, reported } = &mut *registry;
    for (index, object) in objects.iter_mut().enumerate() {
        if let Err(fault) = object.update(&clock, &mut targets) {
            if !reported[index] {
                warn!("Animated {} #{} skipped: {}", object.kind(), index, fault);
                reported[index] = true;
            }
        }
    }
}
