use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use constants::animation::MARKER_SATELLITE_COUNT;
use constants::palette::{ACCENT, PRIMARY, PRIMARY_LIGHT};
use constants::scene_layout::{
    MARKER_CORE_RADIUS, MARKER_RING_RADIUS, MARKER_RING_TUBE, MARKER_SATELLITE_SIZE,
};

use super::kit::SceneKit;
use crate::engine::animation::marker::{OrbitingMarker, ring_rotation, satellite_position};
use crate::engine::animation::registry::AnimatedObject;
use crate::interaction::picking::{InteractiveMarker, MarkerPart, PickVolume};
use crate::portfolio::catalogue::CategoryKey;

/// Spawn a clickable category marker at `base`, local to `parent` when
/// given. Every visible part is pickable and links back to the root.
pub fn spawn_marker(
    kit: &mut SceneKit,
    parent: Option<Entity>,
    base: Vec3,
    category: CategoryKey,
) -> Entity {
    let root = kit.group(parent, Transform::from_translation(base));
    kit.commands.entity(root).insert((
        InteractiveMarker { category },
        Name::new(format!("marker:{}", category.as_str())),
    ));

    let core_material = kit.glowing(PRIMARY, 0.8);
    let core = kit.solid(
        Some(root),
        Sphere::new(MARKER_CORE_RADIUS),
        &core_material,
        Transform::IDENTITY,
    );
    kit.commands.entity(core).insert((
        MarkerPart { marker: root },
        PickVolume::Sphere {
            radius: MARKER_CORE_RADIUS,
        },
    ));

    // Torus built in the XY plane so the rest tilt lays it flat.
    let ring_material = kit.glowing(PRIMARY_LIGHT, 0.5);
    let ring_mesh = Mesh::from(Torus::new(
        MARKER_RING_RADIUS - MARKER_RING_TUBE,
        MARKER_RING_RADIUS + MARKER_RING_TUBE,
    ))
    .rotated_by(Quat::from_rotation_x(FRAC_PI_2));
    let ring = kit.solid(
        Some(root),
        ring_mesh,
        &ring_material,
        Transform::from_rotation(ring_rotation(0.0)),
    );
    let span = 2.0 * (MARKER_RING_RADIUS + MARKER_RING_TUBE);
    kit.commands.entity(ring).insert((
        MarkerPart { marker: root },
        PickVolume::Obb {
            size: Vec3::new(span, span, 2.0 * MARKER_RING_TUBE),
        },
    ));

    let satellite_material = kit.glowing(ACCENT, 1.0);
    let satellites = (0..MARKER_SATELLITE_COUNT)
        .map(|index| {
            let satellite = kit.solid(
                Some(root),
                Sphere::new(MARKER_SATELLITE_SIZE),
                &satellite_material,
                Transform::from_translation(satellite_position(index, 0.0)),
            );
            kit.commands.entity(satellite).insert((
                MarkerPart { marker: root },
                PickVolume::Sphere {
                    radius: MARKER_SATELLITE_SIZE,
                },
            ));
            satellite
        })
        .collect();

    kit.register(AnimatedObject::Marker(OrbitingMarker {
        root,
        core,
        ring,
        satellites,
        base,
    }));
    root
}
