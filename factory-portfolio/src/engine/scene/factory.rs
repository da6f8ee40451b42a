use std::f32::consts::PI;

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::animation::{PACKAGE_COUNT, PACKAGE_HEIGHT};
use constants::palette::{
    ASPHALT, ATMOSPHERE, BLUE, CONCRETE, GLASS, GROUND, ORANGE, PACKAGE_COLOURS, RED, SMOKE,
    STEEL, STEEL_DARK, STEEL_LIGHT, YELLOW,
};
use constants::scene_layout::{
    CONTROL_CENTRE_BEACON, CONTROL_CENTRE_POSITION, CONVEYOR_WAYPOINTS, GANTRY_BEAM_HEIGHT,
    GANTRY_CRANE_POSITION, GANTRY_HOOK_REST, GROUND_SIZE, PLC_MARKER_OFFSET, ROBOT_POSITIONS,
    SMOKE_ORIGIN_HEIGHT, SMOKESTACK_HEIGHT, SMOKESTACKS, TOWER_CRANE_JIB_HEIGHT,
    TOWER_CRANE_POSITION,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::kit::SceneKit;
use super::markers::spawn_marker;
use crate::engine::animation::conveyor::{ConveyorPackage, conveyor_position};
use crate::engine::animation::machinery::{GantryCrane, RobotArm, TowerCrane};
use crate::engine::animation::marker::BlinkingLight;
use crate::engine::animation::particles::ParticleStream;
use crate::engine::animation::registry::AnimatedObject;
use crate::engine::core::colour::{hex_colour, hex_linear};
use crate::portfolio::catalogue::CategoryKey;

const PACKAGE_SEED: u64 = 0x9ac4;
const SMOKE_SEED: u64 = 0x5e0c;
const ATMOSPHERE_SEED: u64 = 0xa7e0;

const BELT_HEIGHT: f32 = 3.6;
const BELT_WIDTH: f32 = 3.0;

pub fn spawn_ground(kit: &mut SceneKit) {
    let grass = kit.material(GROUND, 0.0, 0.95);
    kit.solid(
        None,
        Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE),
        &grass,
        Transform::IDENTITY,
    );

    let floor = kit.material(CONCRETE, 0.1, 0.8);
    kit.solid(
        None,
        Cuboid::new(120.0, 0.2, 80.0),
        &floor,
        Transform::from_xyz(10.0, 0.1, 0.0),
    );

    let road = kit.material(ASPHALT, 0.0, 0.9);
    kit.solid(
        None,
        Cuboid::new(GROUND_SIZE, 0.05, 10.0),
        &road,
        Transform::from_xyz(0.0, 0.05, 52.0),
    );
}

/// Six-axis style arm: static pedestal, then lower arm, upper arm and
/// gripper chained so each joint inherits its parent's swing.
pub fn spawn_robot_arm(kit: &mut SceneKit, index: usize, (x, z): (f32, f32)) {
    let body = kit.material(if index % 2 == 0 { ORANGE } else { BLUE }, 0.4, 0.4);
    let steel = kit.material(STEEL_DARK, 0.8, 0.3);

    let root = kit.group(None, Transform::from_xyz(x, 0.0, z));
    kit.solid(Some(root), Cylinder::new(3.0, 0.5), &steel, Transform::from_xyz(0.0, 0.25, 0.0));
    kit.solid(Some(root), Cylinder::new(1.8, 1.5), &body, Transform::from_xyz(0.0, 1.25, 0.0));
    kit.solid(Some(root), Cuboid::new(2.4, 1.5, 2.4), &body, Transform::from_xyz(0.0, 2.75, 0.0));

    let lower_arm = kit.group(Some(root), Transform::from_xyz(0.0, 3.5, 0.0));
    kit.solid(Some(lower_arm), Sphere::new(0.9), &steel, Transform::IDENTITY);
    kit.solid(Some(lower_arm), Cuboid::new(1.0, 7.0, 1.0), &body, Transform::from_xyz(0.0, 3.5, 0.0));

    let upper_arm = kit.group(Some(lower_arm), Transform::from_xyz(0.0, 7.0, 0.0));
    kit.solid(Some(upper_arm), Sphere::new(0.8), &steel, Transform::IDENTITY);
    kit.solid(Some(upper_arm), Cuboid::new(0.8, 5.0, 0.8), &body, Transform::from_xyz(0.0, 2.5, 0.0));

    let gripper = kit.group(Some(upper_arm), Transform::from_xyz(0.0, 5.6, 0.0));
    kit.solid(Some(gripper), Cuboid::new(1.0, 0.4, 0.6), &steel, Transform::IDENTITY);
    for side in [-0.35, 0.35] {
        kit.solid(
            Some(gripper),
            Cuboid::new(0.2, 1.2, 0.4),
            &steel,
            Transform::from_xyz(side, 0.8, 0.0),
        );
    }

    kit.register(AnimatedObject::RobotArm(RobotArm {
        lower_arm,
        upper_arm,
        gripper,
        phase: index as f32 * PI,
    }));
}

pub fn spawn_tower_crane(kit: &mut SceneKit) {
    let paint = kit.material(YELLOW, 0.5, 0.4);
    let steel = kit.material(STEEL, 0.8, 0.3);
    let ballast = kit.material(CONCRETE, 0.0, 0.9);

    let root = kit.group(None, Transform::from_translation(TOWER_CRANE_POSITION));
    kit.solid(Some(root), Cuboid::new(6.0, 1.0, 6.0), &ballast, Transform::from_xyz(0.0, 0.5, 0.0));
    kit.solid(
        Some(root),
        Cuboid::new(2.0, TOWER_CRANE_JIB_HEIGHT, 2.0),
        &paint,
        Transform::from_xyz(0.0, TOWER_CRANE_JIB_HEIGHT / 2.0, 0.0),
    );

    let jib = kit.group(Some(root), Transform::from_xyz(0.0, TOWER_CRANE_JIB_HEIGHT, 0.0));
    kit.solid(Some(jib), Cuboid::new(3.0, 3.0, 3.0), &paint, Transform::from_xyz(0.0, -1.5, 2.5));
    kit.solid(Some(jib), Cuboid::new(40.0, 1.2, 1.2), &paint, Transform::from_xyz(10.0, 0.6, 0.0));
    kit.solid(Some(jib), Cuboid::new(4.0, 3.0, 3.0), &ballast, Transform::from_xyz(-8.0, -1.0, 0.0));

    let trolley = kit.group(Some(jib), Transform::from_xyz(18.0, 0.0, 0.0));
    kit.solid(Some(trolley), Cuboid::new(2.0, 1.0, 2.0), &steel, Transform::from_xyz(0.0, -0.5, 0.0));
    kit.solid(Some(trolley), Cylinder::new(0.05, 15.0), &steel, Transform::from_xyz(0.0, -8.5, 0.0));
    kit.solid(Some(trolley), Cuboid::new(1.0, 1.0, 1.0), &paint, Transform::from_xyz(0.0, -16.5, 0.0));

    kit.register(AnimatedObject::Crane(TowerCrane { jib, trolley }));
}

pub fn spawn_gantry_crane(kit: &mut SceneKit) {
    let paint = kit.material(ORANGE, 0.5, 0.4);
    let steel = kit.material(STEEL_DARK, 0.8, 0.3);
    let crate_paint = kit.material(BLUE, 0.2, 0.6);

    let root = kit.group(None, Transform::from_translation(GANTRY_CRANE_POSITION));
    for (x, z) in [(-14.0, -4.0), (-14.0, 4.0), (14.0, -4.0), (14.0, 4.0)] {
        kit.solid(
            Some(root),
            Cuboid::new(1.0, GANTRY_BEAM_HEIGHT, 1.0),
            &paint,
            Transform::from_xyz(x, GANTRY_BEAM_HEIGHT / 2.0, z),
        );
    }
    for z in [-4.0, 4.0] {
        kit.solid(
            Some(root),
            Cuboid::new(30.0, 1.2, 1.2),
            &paint,
            Transform::from_xyz(0.0, GANTRY_BEAM_HEIGHT, z),
        );
    }

    let trolley = kit.group(Some(root), Transform::from_xyz(0.0, GANTRY_BEAM_HEIGHT, 0.0));
    kit.solid(Some(trolley), Cuboid::new(2.5, 1.0, 9.0), &steel, Transform::IDENTITY);
    // Unit-height box; the animation scales it to the cable length.
    let cable = kit.solid(
        Some(trolley),
        Cuboid::new(0.15, 1.0, 0.15),
        &steel,
        Transform::from_xyz(0.0, -1.0, 0.0),
    );
    let hook = kit.group(Some(trolley), Transform::from_xyz(0.0, GANTRY_HOOK_REST, 0.0));
    kit.solid(Some(hook), Cuboid::new(1.2, 0.6, 1.2), &paint, Transform::IDENTITY);
    let cargo = kit.solid(
        Some(hook),
        Cuboid::new(3.0, 2.0, 3.0),
        &crate_paint,
        Transform::from_xyz(0.0, -2.5, 0.0),
    );

    kit.register(AnimatedObject::Gantry(GantryCrane {
        trolley,
        cable,
        hook,
        cargo,
    }));
}

/// Belt segments between consecutive loop corners plus the packages
/// riding them.
pub fn spawn_conveyors(kit: &mut SceneKit) {
    let belt = kit.material(ASPHALT, 0.2, 0.7);
    let frame = kit.material(STEEL, 0.8, 0.3);

    for (index, start) in CONVEYOR_WAYPOINTS.iter().enumerate() {
        let end = CONVEYOR_WAYPOINTS[(index + 1) % CONVEYOR_WAYPOINTS.len()];
        let run = end - *start;
        let centre = (*start + end) / 2.0;
        let yaw = Quat::from_rotation_y(-run.y.atan2(run.x));
        let length = run.length() + BELT_WIDTH;

        let segment = kit.group(
            None,
            Transform::from_xyz(centre.x, 0.0, centre.y).with_rotation(yaw),
        );
        kit.solid(
            Some(segment),
            Cuboid::new(length, 0.4, BELT_WIDTH),
            &belt,
            Transform::from_xyz(0.0, BELT_HEIGHT, 0.0),
        );
        kit.solid(
            Some(segment),
            Cuboid::new(length, BELT_HEIGHT - 0.2, BELT_WIDTH - 0.6),
            &frame,
            Transform::from_xyz(0.0, (BELT_HEIGHT - 0.2) / 2.0, 0.0),
        );
    }

    let paints: Vec<_> = PACKAGE_COLOURS
        .iter()
        .map(|hex| kit.material(*hex, 0.1, 0.7))
        .collect();
    let mut rng = SmallRng::seed_from_u64(PACKAGE_SEED);
    for index in 0..PACKAGE_COUNT {
        let size = rng.gen_range(1.2..2.0);
        let package = ConveyorPackage::new(Entity::PLACEHOLDER, index);
        let start = conveyor_position(package.progress);
        let entity = kit.solid(
            None,
            Cuboid::new(size, size * 0.8, size),
            &paints[index % paints.len()],
            Transform::from_xyz(start.x, PACKAGE_HEIGHT, start.y),
        );
        kit.register(AnimatedObject::Package(ConveyorPackage { entity, ..package }));
    }
}

/// Three-storey control building with a blinking antenna beacon. The PLC
/// marker hangs off the building root.
pub fn spawn_control_centre(kit: &mut SceneKit) {
    let base = kit.material(CONCRETE, 0.1, 0.8);
    let glass = kit.material(GLASS, 0.9, 0.1);
    let roof = kit.material(STEEL_LIGHT, 0.7, 0.3);
    let mast = kit.material(STEEL_DARK, 0.8, 0.3);

    let root = kit.group(None, Transform::from_translation(CONTROL_CENTRE_POSITION));
    kit.solid(Some(root), Cuboid::new(16.0, 6.0, 12.0), &base, Transform::from_xyz(0.0, 3.0, 0.0));
    kit.solid(Some(root), Cuboid::new(14.0, 5.0, 10.0), &glass, Transform::from_xyz(0.0, 8.5, 0.0));
    kit.solid(Some(root), Cuboid::new(12.0, 3.0, 8.0), &roof, Transform::from_xyz(0.0, 12.5, 0.0));
    kit.solid(
        Some(root),
        Cylinder::new(0.15, 3.5),
        &mast,
        Transform::from_translation(CONTROL_CENTRE_BEACON - Vec3::Y * 1.75),
    );

    let beacon_material = kit.glowing(RED, 1.0);
    let beacon = kit.solid(
        Some(root),
        Sphere::new(0.3),
        &beacon_material,
        Transform::from_translation(CONTROL_CENTRE_BEACON),
    );
    kit.register(AnimatedObject::Blink(BlinkingLight {
        entity: beacon,
        material: beacon_material,
        colour: hex_linear(RED),
    }));

    spawn_marker(kit, Some(root), PLC_MARKER_OFFSET, CategoryKey::Plc);
}

pub fn spawn_smokestacks(kit: &mut SceneKit) {
    let stack = kit.material(STEEL_DARK, 0.6, 0.5);
    let band = kit.material(RED, 0.3, 0.5);
    let smoke = particle_material(kit, SMOKE, 0.6);

    for (index, (x, z)) in SMOKESTACKS.iter().enumerate() {
        kit.solid(
            None,
            Cylinder::new(2.0, SMOKESTACK_HEIGHT),
            &stack,
            Transform::from_xyz(*x, SMOKESTACK_HEIGHT / 2.0, *z),
        );
        kit.solid(
            None,
            Cylinder::new(2.1, 1.5),
            &band,
            Transform::from_xyz(*x, SMOKESTACK_HEIGHT - 3.0, *z),
        );

        let origin = Transform::from_xyz(*x, SMOKE_ORIGIN_HEIGHT, *z);
        let entity = kit.group(None, origin);
        let mut stream = ParticleStream::smoke(entity, Handle::default(), SMOKE_SEED + index as u64);
        attach_particles(kit, &mut stream, &smoke);
        kit.register(AnimatedObject::Smoke(stream));
    }
}

pub fn spawn_atmosphere(kit: &mut SceneKit) {
    let dust = particle_material(kit, ATMOSPHERE, 0.4);
    let entity = kit.group(None, Transform::IDENTITY);
    let mut stream = ParticleStream::atmosphere(entity, Handle::default(), ATMOSPHERE_SEED);
    attach_particles(kit, &mut stream, &dust);
    kit.register(AnimatedObject::Atmosphere(stream));
}

fn particle_material(kit: &mut SceneKit, hex: u32, alpha: f32) -> Handle<StandardMaterial> {
    kit.materials.add(StandardMaterial {
        base_color: hex_colour(hex).with_alpha(alpha),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    })
}

/// Give the stream its point mesh and hang it on the stream's entity.
fn attach_particles(
    kit: &mut SceneKit,
    stream: &mut ParticleStream,
    material: &Handle<StandardMaterial>,
) {
    let mesh = kit.meshes.add(stream.build_mesh());
    stream.mesh = mesh.clone();
    // Points move every frame, so the spawn-time bounds go stale.
    kit.commands.entity(stream.entity).insert((
        Mesh3d(mesh),
        MeshMaterial3d(material.clone()),
        NoFrustumCulling,
    ));
}
