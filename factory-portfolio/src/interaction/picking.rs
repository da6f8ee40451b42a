use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::ray::{ray_hits_obb, ray_hits_sphere};
use crate::engine::core::frame::SceneCamera;
use crate::portfolio::catalogue::CategoryKey;

/// Root of a clickable scene marker.
#[derive(Component, Debug, Clone, Copy)]
pub struct InteractiveMarker {
    pub category: CategoryKey,
}

/// Pickable leaf, linked straight to its marker root.
#[derive(Component, Debug, Clone, Copy)]
pub struct MarkerPart {
    pub marker: Entity,
}

/// Hit shape of a pickable leaf, in the leaf's local frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum PickVolume {
    Sphere { radius: f32 },
    Obb { size: Vec3 },
}

impl PickVolume {
    pub fn hit(&self, origin: Vec3, dir: Vec3, xf: &GlobalTransform) -> Option<f32> {
        match *self {
            PickVolume::Sphere { radius } => {
                let (scale, _, centre) = xf.to_scale_rotation_translation();
                ray_hits_sphere(origin, dir, centre, radius * scale.max_element())
            }
            PickVolume::Obb { size } => ray_hits_obb(origin, dir, xf, size),
        }
    }
}

/// Marker owning the nearest part hit at t >= 0.
pub fn pick_nearest<'a>(
    origin: Vec3,
    dir: Vec3,
    parts: impl IntoIterator<Item = (&'a MarkerPart, &'a PickVolume, &'a GlobalTransform)>,
) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;
    for (part, volume, xf) in parts {
        let Some(t) = volume.hit(origin, dir, xf) else {
            continue;
        };
        if t >= 0.0 && best.is_none_or(|(_, best_t)| t < best_t) {
            best = Some((part.marker, t));
        }
    }
    best.map(|(marker, _)| marker)
}

/// Screen-space picking against every marker part.
#[derive(SystemParam)]
pub struct MarkerPicker<'w, 's> {
    cameras: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<SceneCamera>>,
    parts: Query<'w, 's, (&'static MarkerPart, &'static PickVolume, &'static GlobalTransform)>,
    markers: Query<'w, 's, &'static InteractiveMarker>,
}

impl MarkerPicker<'_, '_> {
    /// Category under a window position, in logical pixels.
    pub fn pick_at(&self, screen: Vec2) -> Option<CategoryKey> {
        let Ok((camera, cam_xf)) = self.cameras.single() else {
            return None;
        };
        let Ok(ray) = camera.viewport_to_world(cam_xf, screen) else {
            return None;
        };
        self.pick_ray(ray)
    }

    pub fn pick_ray(&self, ray: Ray3d) -> Option<CategoryKey> {
        let marker = pick_nearest(ray.origin, ray.direction.as_vec3(), self.parts.iter())?;
        self.markers.get(marker).ok().map(|marker| marker.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn spawn_marker(world: &mut World, category: CategoryKey, at: Vec3) -> Entity {
        let root = world.spawn(InteractiveMarker { category }).id();
        world.spawn((
            MarkerPart { marker: root },
            PickVolume::Sphere { radius: 1.2 },
            GlobalTransform::from(Transform::from_translation(at)),
        ));
        root
    }

    fn pick(world: &mut World, ray: Ray3d) -> Option<CategoryKey> {
        world
            .run_system_once(move |picker: MarkerPicker| picker.pick_ray(ray))
            .ok()
            .flatten()
    }

    #[test]
    fn ray_missing_every_part_picks_nothing() {
        let mut world = World::new();
        spawn_marker(&mut world, CategoryKey::Robots, Vec3::new(0.0, 12.0, -15.0));
        let ray = Ray3d::new(Vec3::new(50.0, 12.0, 50.0), Dir3::NEG_Z);
        assert_eq!(pick(&mut world, ray), None);
    }

    #[test]
    fn hit_resolves_to_the_marker_category() {
        let mut world = World::new();
        spawn_marker(&mut world, CategoryKey::Cranes, Vec3::new(65.0, 55.0, -15.0));
        let ray = Ray3d::new(Vec3::new(65.0, 55.0, 40.0), Dir3::NEG_Z);
        assert_eq!(pick(&mut world, ray), Some(CategoryKey::Cranes));
    }

    #[test]
    fn nearest_marker_wins() {
        let mut world = World::new();
        spawn_marker(&mut world, CategoryKey::Plc, Vec3::new(0.0, 0.0, -30.0));
        spawn_marker(&mut world, CategoryKey::Conveyors, Vec3::new(0.0, 0.0, -10.0));
        let ray = Ray3d::new(Vec3::ZERO, Dir3::NEG_Z);
        assert_eq!(pick(&mut world, ray), Some(CategoryKey::Conveyors));
    }

    #[test]
    fn ring_part_links_back_to_its_root() {
        let mut world = World::new();
        let root = world
            .spawn(InteractiveMarker {
                category: CategoryKey::Robots,
            })
            .id();
        world.spawn((
            MarkerPart { marker: root },
            PickVolume::Obb {
                size: Vec3::new(4.2, 4.2, 0.2),
            },
            GlobalTransform::from(
                Transform::from_xyz(0.0, 12.0, -15.0)
                    .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
            ),
        ));
        let ray = Ray3d::new(Vec3::new(1.8, 40.0, -15.0), Dir3::NEG_Y);
        assert_eq!(pick(&mut world, ray), Some(CategoryKey::Robots));
    }
}
