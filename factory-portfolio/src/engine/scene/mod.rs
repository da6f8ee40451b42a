//! Factory scene construction.
//!
//! Builds a simplified factory once at startup: machinery, conveyor
//! loop, smoke, lights, the category markers and the camera. Everything
//! that moves is registered with the animated-object registry here.

pub mod factory;
pub mod kit;
pub mod lights;
pub mod markers;

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use constants::camera::{FAR_PLANE, FIELD_OF_VIEW_DEGREES, HOME, NEAR_PLANE};
use constants::lighting::FOG_DENSITY;
use constants::scene_layout::{CONVEYORS_MARKER, CRANES_MARKER, ROBOTS_MARKER, ROBOT_POSITIONS};

use crate::engine::core::frame::SceneCamera;
use crate::engine::lighting::day_night::sky_colour;
use crate::engine::loading::progress::LoadingProgress;
use crate::portfolio::catalogue::CategoryKey;
use factory::{
    spawn_atmosphere, spawn_control_centre, spawn_conveyors, spawn_gantry_crane, spawn_ground,
    spawn_robot_arm, spawn_smokestacks, spawn_tower_crane,
};
use kit::SceneKit;
use lights::{spawn_directional_lights, spawn_lamps};
use markers::spawn_marker;

pub fn build_factory_scene(mut kit: SceneKit, mut progress: ResMut<LoadingProgress>) {
    spawn_ground(&mut kit);
    for (index, position) in ROBOT_POSITIONS.iter().enumerate() {
        spawn_robot_arm(&mut kit, index, *position);
    }
    spawn_tower_crane(&mut kit);
    spawn_gantry_crane(&mut kit);
    spawn_conveyors(&mut kit);
    spawn_control_centre(&mut kit);
    spawn_smokestacks(&mut kit);
    spawn_atmosphere(&mut kit);

    spawn_marker(&mut kit, None, ROBOTS_MARKER, CategoryKey::Robots);
    spawn_marker(&mut kit, None, CRANES_MARKER, CategoryKey::Cranes);
    spawn_marker(&mut kit, None, CONVEYORS_MARKER, CategoryKey::Conveyors);

    spawn_directional_lights(&mut kit);
    spawn_lamps(&mut kit);
    spawn_scene_camera(&mut kit.commands);

    info!("Factory scene built with {} animated objects", kit.registry.len());
    progress.scene_built = true;
}

fn spawn_scene_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(HOME.position).looking_at(HOME.look_at, Vec3::Y),
        DistanceFog {
            color: sky_colour(0.0),
            falloff: FogFalloff::Exponential {
                density: FOG_DENSITY,
            },
            ..default()
        },
        SceneCamera,
    ));
}
