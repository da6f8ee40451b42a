use bevy::math::{Vec2, Vec3};

/// Conveyor loop corners in the XZ plane, travelled in order.
pub const CONVEYOR_WAYPOINTS: [Vec2; 4] = [
    Vec2::new(-25.0, 15.0),
    Vec2::new(25.0, 15.0),
    Vec2::new(25.0, -5.0),
    Vec2::new(-25.0, -5.0),
];

/// Robot cell positions (x, z); each arm is phase shifted by pi from the last.
pub const ROBOT_POSITIONS: [(f32, f32); 2] = [(-10.0, -15.0), (10.0, -15.0)];

pub const TOWER_CRANE_POSITION: Vec3 = Vec3::new(65.0, 0.0, -15.0);
pub const TOWER_CRANE_JIB_HEIGHT: f32 = 53.0;
pub const GANTRY_CRANE_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const GANTRY_BEAM_HEIGHT: f32 = 19.0;
/// Hook rest position below the trolley before the first frame.
pub const GANTRY_HOOK_REST: f32 = -2.5;
pub const CONTROL_CENTRE_POSITION: Vec3 = Vec3::new(35.0, 0.0, 25.0);
/// Blinking antenna tip, relative to the control centre.
pub const CONTROL_CENTRE_BEACON: Vec3 = Vec3::new(-4.0, 17.5, 0.0);

/// Smokestack bases (x, z).
pub const SMOKESTACKS: [(f32, f32); 2] = [(-35.0, -30.0), (35.0, -30.0)];
pub const SMOKESTACK_HEIGHT: f32 = 66.0;
/// Smoke emitter origin above each stack base.
pub const SMOKE_ORIGIN_HEIGHT: f32 = 68.0;

/// Interactive marker positions in world space.
pub const ROBOTS_MARKER: Vec3 = Vec3::new(0.0, 12.0, -15.0);
pub const CRANES_MARKER: Vec3 = Vec3::new(65.0, 55.0, -15.0);
/// Conveyor marker sits at the belt centre line.
pub const CONVEYORS_MARKER: Vec3 = Vec3::new(0.0, 8.0, 15.0);
/// Control centre marker, relative to the control centre.
pub const PLC_MARKER_OFFSET: Vec3 = Vec3::new(0.0, 15.0, 0.0);

pub const MARKER_CORE_RADIUS: f32 = 1.2;
pub const MARKER_RING_RADIUS: f32 = 2.0;
pub const MARKER_RING_TUBE: f32 = 0.1;
pub const MARKER_SATELLITE_SIZE: f32 = 0.15;

pub const GROUND_SIZE: f32 = 300.0;
