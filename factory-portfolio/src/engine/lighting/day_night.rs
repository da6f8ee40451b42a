use bevy::prelude::*;
use constants::lighting::{
    AMBIENT_BRIGHTNESS, AMBIENT_DAY_COLOUR, AMBIENT_NIGHT_COLOUR, DIRECTIONAL_LUX_PER_UNIT,
    POINT_LUMENS_PER_UNIT, SKY_DAY, SKY_NIGHT, TRANSITION_EPSILON, TRANSITION_STEP,
};

use crate::engine::core::colour::hex_linear;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Dark => "dark",
        }
    }
}

/// Eases a scalar between day (0) and night (1).
#[derive(Resource, Debug, Clone)]
pub struct DayNightController {
    transition: f32,
    target: f32,
    /// Set when the scene still shows a stale transition value.
    pending_apply: bool,
}

impl Default for DayNightController {
    fn default() -> Self {
        Self {
            transition: 0.0,
            target: 0.0,
            pending_apply: true,
        }
    }
}

impl DayNightController {
    pub fn transition(&self) -> f32 {
        self.transition
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_night(&self) -> bool {
        self.target >= 0.5
    }

    pub fn theme(&self) -> Theme {
        if self.is_night() { Theme::Dark } else { Theme::Day }
    }

    /// Flip the target and return the theme it now heads for.
    pub fn toggle(&mut self) -> Theme {
        self.target = if self.is_night() { 0.0 } else { 1.0 };
        self.theme()
    }

    /// Advance one frame. Returns true when the scene must be re-applied.
    pub fn tick(&mut self, step: f32) -> bool {
        let remaining = self.target - self.transition;
        if remaining.abs() > TRANSITION_EPSILON {
            self.transition += remaining * step;
            if (self.target - self.transition).abs() <= TRANSITION_EPSILON {
                self.transition = self.target;
            }
            self.pending_apply = true;
        } else if self.transition != self.target {
            self.transition = self.target;
            self.pending_apply = true;
        }
        std::mem::take(&mut self.pending_apply)
    }
}

/// Directional light blended between two intensities, in relative units.
#[derive(Component, Debug, Clone, Copy)]
pub struct DayLight {
    pub day: f32,
    pub night: f32,
}

impl DayLight {
    pub fn illuminance(&self, transition: f32) -> f32 {
        blend(self.day, self.night, transition) * DIRECTIONAL_LUX_PER_UNIT
    }
}

/// Point light that only shines after dark.
#[derive(Component, Debug, Clone, Copy)]
pub struct NightLight {
    pub night: f32,
}

impl NightLight {
    pub fn intensity(&self, transition: f32) -> f32 {
        self.night * transition * POINT_LUMENS_PER_UNIT
    }
}

/// Lamp bulb whose emissive glow follows the night lights.
#[derive(Component, Debug, Clone)]
pub struct NightBulb {
    pub night_emissive: f32,
    pub material: Handle<StandardMaterial>,
    pub colour: LinearRgba,
}

/// Weighted so both ends reproduce their reference exactly.
fn blend(day: f32, night: f32, transition: f32) -> f32 {
    day * (1.0 - transition) + night * transition
}

pub fn sky_colour(transition: f32) -> Color {
    Color::from(hex_linear(SKY_DAY).mix(&hex_linear(SKY_NIGHT), transition))
}

pub fn ambient_light(transition: f32) -> (Color, f32) {
    let colour = hex_linear(AMBIENT_DAY_COLOUR).mix(&hex_linear(AMBIENT_NIGHT_COLOUR), transition);
    let (day, night) = AMBIENT_BRIGHTNESS;
    (Color::from(colour), blend(day, night, transition))
}

#[allow(clippy::too_many_arguments)]
pub fn apply_day_night(
    mut controller: ResMut<DayNightController>,
    mut clear_colour: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
    mut fog: Query<&mut DistanceFog>,
    mut day_lights: Query<(&DayLight, &mut DirectionalLight)>,
    mut night_lights: Query<(&NightLight, &mut PointLight)>,
    bulbs: Query<&NightBulb>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !controller.tick(TRANSITION_STEP) {
        return;
    }
    let t = controller.transition();

    let sky = sky_colour(t);
    clear_colour.0 = sky;
    for mut fog in &mut fog {
        fog.color = sky;
    }

    let (colour, brightness) = ambient_light(t);
    ambient.color = colour;
    ambient.brightness = brightness;

    for (reference, mut light) in &mut day_lights {
        light.illuminance = reference.illuminance(t);
    }
    for (reference, mut light) in &mut night_lights {
        light.intensity = reference.intensity(t);
    }
    for bulb in &bulbs {
        if let Some(material) = materials.get_mut(&bulb.material) {
            let strength = bulb.night_emissive * t;
            material.emissive = LinearRgba::rgb(
                bulb.colour.red * strength,
                bulb.colour.green * strength,
                bulb.colour.blue * strength,
            );
        }
    }
}
