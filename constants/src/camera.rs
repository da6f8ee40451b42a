use bevy::math::Vec3;

/// Progress added to an active fly-to each frame.
pub const FLIGHT_STEP_PER_FRAME: f32 = 0.02;

pub const FIELD_OF_VIEW_DEGREES: f32 = 50.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 25.0;
pub const ORBIT_MAX_DISTANCE: f32 = 180.0;
/// Largest polar angle from straight up, keeps the camera above ground.
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 2.1;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.3;
/// Radians of rotate input per dragged pixel.
pub const ORBIT_DRAG_SENSITIVITY: f32 = 0.005;
/// Dolly scale per wheel line.
pub const ORBIT_ZOOM_STEP: f32 = 0.95;

/// Distance a zoom button moves the camera along its view direction.
pub const ZOOM_BUTTON_DISTANCE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub name: &'static str,
    pub position: Vec3,
    pub look_at: Vec3,
}

pub const HOME: Viewpoint = Viewpoint {
    name: "home",
    position: Vec3::new(80.0, 50.0, 80.0),
    look_at: Vec3::new(0.0, 8.0, 0.0),
};

/// Named camera stops for side navigation and "view in 3D".
pub const VIEWPOINTS: [Viewpoint; 5] = [
    Viewpoint {
        name: "robots",
        position: Vec3::new(0.0, 20.0, 10.0),
        look_at: Vec3::new(0.0, 5.0, -15.0),
    },
    Viewpoint {
        name: "cranes",
        position: Vec3::new(110.0, 55.0, 35.0),
        look_at: Vec3::new(65.0, 25.0, -15.0),
    },
    Viewpoint {
        name: "plc",
        position: Vec3::new(55.0, 20.0, 45.0),
        look_at: Vec3::new(35.0, 8.0, 25.0),
    },
    Viewpoint {
        name: "conveyors",
        position: Vec3::new(0.0, 25.0, 40.0),
        look_at: Vec3::new(0.0, 4.0, 5.0),
    },
    HOME,
];

pub fn viewpoint(name: &str) -> Option<&'static Viewpoint> {
    VIEWPOINTS.iter().find(|v| v.name == name)
}
