use bevy::prelude::*;
use constants::lighting::{DIRECTIONAL_LIGHTS, LAMPS};
use constants::palette::{STEEL_DARK, WHITE};

use super::kit::SceneKit;
use crate::engine::core::colour::{hex_colour, hex_linear};
use crate::engine::lighting::day_night::{DayLight, NightBulb, NightLight};

const BULB_RADIUS: f32 = 0.4;

/// Sun and fill lights, lit for day.
pub fn spawn_directional_lights(kit: &mut SceneKit) {
    for reference in &DIRECTIONAL_LIGHTS {
        let day_light = DayLight {
            day: reference.day,
            night: reference.night,
        };
        let (x, y, z) = reference.position;
        kit.commands.spawn((
            DirectionalLight {
                color: hex_colour(reference.colour),
                illuminance: day_light.illuminance(0.0),
                shadows_enabled: reference.shadows,
                ..default()
            },
            Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
            day_light,
        ));
    }
}

/// Lamps start dark. Those with a visible bulb get a pole and a bulb
/// whose material is theirs alone.
pub fn spawn_lamps(kit: &mut SceneKit) {
    let pole = kit.material(STEEL_DARK, 0.8, 0.3);

    for lamp in &LAMPS {
        let (x, y, z) = lamp.position;
        kit.commands.spawn((
            PointLight {
                color: hex_colour(lamp.colour),
                intensity: 0.0,
                range: lamp.range,
                ..default()
            },
            Transform::from_xyz(x, y, z),
            NightLight { night: lamp.night },
        ));

        let Some(night_emissive) = lamp.bulb else {
            continue;
        };
        let pole_height = y - BULB_RADIUS;
        kit.solid(
            None,
            Cylinder::new(0.15, pole_height),
            &pole,
            Transform::from_xyz(x, pole_height / 2.0, z),
        );
        let material = kit.materials.add(StandardMaterial {
            base_color: hex_colour(WHITE),
            emissive: LinearRgba::BLACK,
            ..default()
        });
        let bulb = kit.solid(None, Sphere::new(BULB_RADIUS), &material, Transform::from_xyz(x, y, z));
        kit.commands.entity(bulb).insert(NightBulb {
            night_emissive,
            material,
            colour: hex_linear(lamp.colour),
        });
    }
}
