//! Day and night reference values. Intensities are already in Bevy units
//! (lux for directional, lumens for point lights, cd/m² for ambient).

/// Fraction of the remaining distance covered per frame.
pub const TRANSITION_STEP: f32 = 0.02;
/// Transition counts as settled inside this distance of its target.
pub const TRANSITION_EPSILON: f32 = 0.001;

pub const SKY_DAY: u32 = 0x6ca0dc;
pub const SKY_NIGHT: u32 = 0x0a0a1a;
/// Exponential fog density.
pub const FOG_DENSITY: f32 = 0.003;

pub const AMBIENT_DAY_COLOUR: u32 = 0x87ceeb;
pub const AMBIENT_NIGHT_COLOUR: u32 = 0x1a1a3a;
/// (day, night) ambient brightness.
pub const AMBIENT_BRIGHTNESS: (f32, f32) = (1000.0, 150.0);

/// Scale from relative reference intensities to lux.
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 4000.0;
/// Scale from relative reference intensities to lumens.
pub const POINT_LUMENS_PER_UNIT: f32 = 100_000.0;

pub struct DirectionalReference {
    pub colour: u32,
    pub position: (f32, f32, f32),
    pub day: f32,
    pub night: f32,
    pub shadows: bool,
}

/// Sun, secondary sun, sky fill, rim and front fill.
pub const DIRECTIONAL_LIGHTS: [DirectionalReference; 5] = [
    DirectionalReference {
        colour: 0xfffef5,
        position: (60.0, 100.0, 40.0),
        day: 2.5,
        night: 0.1,
        shadows: true,
    },
    DirectionalReference {
        colour: 0xfff8e8,
        position: (-30.0, 80.0, 60.0),
        day: 1.0,
        night: 0.05,
        shadows: false,
    },
    DirectionalReference {
        colour: 0xaaccff,
        position: (-40.0, 30.0, -40.0),
        day: 0.8,
        night: 0.1,
        shadows: false,
    },
    DirectionalReference {
        colour: 0xffffee,
        position: (0.0, 50.0, -80.0),
        day: 0.6,
        night: 0.05,
        shadows: false,
    },
    DirectionalReference {
        colour: 0xffffff,
        position: (0.0, 40.0, 100.0),
        day: 0.5,
        night: 0.05,
        shadows: false,
    },
];

pub struct LampReference {
    pub colour: u32,
    pub position: (f32, f32, f32),
    pub range: f32,
    pub night: f32,
    /// Emissive strength of the visible bulb, when the lamp has one.
    pub bulb: Option<f32>,
}

const FACTORY_LAMP: u32 = 0xffaa55;
const STREET_LAMP: u32 = 0xffeedd;

pub const LAMPS: [LampReference; 15] = [
    factory_lamp(-25.0, -15.0),
    factory_lamp(0.0, -15.0),
    factory_lamp(25.0, -15.0),
    factory_lamp(-25.0, 5.0),
    factory_lamp(0.0, 5.0),
    factory_lamp(25.0, 5.0),
    street_lamp(-55.0, 30.0),
    street_lamp(-55.0, -10.0),
    street_lamp(55.0, 30.0),
    street_lamp(55.0, -10.0),
    street_lamp(0.0, 45.0),
    street_lamp(-30.0, 45.0),
    street_lamp(30.0, 45.0),
    LampReference {
        colour: 0x4488ff,
        position: (35.0, 8.0, 30.0),
        range: 15.0,
        night: 2.0,
        bulb: None,
    },
    LampReference {
        colour: 0xff4444,
        position: (65.0, 55.0, -15.0),
        range: 20.0,
        night: 1.5,
        bulb: None,
    },
];

const fn factory_lamp(x: f32, z: f32) -> LampReference {
    LampReference {
        colour: FACTORY_LAMP,
        position: (x, 22.0, z),
        range: 30.0,
        night: 2.5,
        bulb: Some(2.0),
    }
}

const fn street_lamp(x: f32, z: f32) -> LampReference {
    LampReference {
        colour: STREET_LAMP,
        position: (x, 11.5, z),
        range: 25.0,
        night: 1.8,
        bulb: Some(1.5),
    }
}
