//! Per-frame animation constants. Frame-based rates are applied once per
//! rendered frame; time-based rates multiply elapsed seconds.

/// Smoke particles per smokestack.
pub const SMOKE_PARTICLE_COUNT: usize = 15;
/// Vertical rise per frame for smoke particles.
pub const SMOKE_RISE_PER_FRAME: f32 = 0.05;
/// Height above the emitter at which a smoke particle respawns.
pub const SMOKE_CEILING: f32 = 15.0;
/// Side length of the square footprint smoke respawns within.
pub const SMOKE_FOOTPRINT: f32 = 3.0;

/// Ambient floating particles across the site.
pub const ATMOSPHERE_PARTICLE_COUNT: usize = 200;
pub const ATMOSPHERE_RISE_PER_FRAME: f32 = 0.02;
pub const ATMOSPHERE_FLOOR: f32 = 5.0;
pub const ATMOSPHERE_CEILING: f32 = 65.0;
/// Side length of the square area atmosphere particles cover.
pub const ATMOSPHERE_FOOTPRINT: f32 = 200.0;
/// Yaw rate of the whole atmosphere cloud in rad/s.
pub const ATMOSPHERE_SPIN_RATE: f32 = 0.02;

/// Packages riding the conveyor loop.
pub const PACKAGE_COUNT: usize = 12;
/// Progress advanced per frame along the loop, in loop fractions.
pub const PACKAGE_STEP_PER_FRAME: f32 = 0.002;
/// Starting progress gap between consecutive packages.
pub const PACKAGE_PHASE_SPACING: f32 = 0.08;
/// Belt surface height packages sit on.
pub const PACKAGE_HEIGHT: f32 = 4.5;

/// (frequency rad/s, amplitude rad, offset rad) per robot joint.
pub const ROBOT_LOWER_ARM_SWING: (f32, f32, f32) = (0.8, 0.4, 0.0);
pub const ROBOT_UPPER_ARM_SWING: (f32, f32, f32) = (1.2, 0.6, -0.3);
pub const ROBOT_LOWER_ARM_TWIST: (f32, f32, f32) = (0.5, 0.8, 0.0);
pub const ROBOT_GRIPPER_WAG: (f32, f32, f32) = (2.0, 0.2, 0.0);

pub const CRANE_JIB_RATE: f32 = 0.15;
pub const CRANE_JIB_AMPLITUDE: f32 = 0.4;
pub const CRANE_TROLLEY_RATE: f32 = 0.3;
pub const CRANE_TROLLEY_CENTRE: f32 = 12.0;
pub const CRANE_TROLLEY_AMPLITUDE: f32 = 10.0;

pub const GANTRY_TROLLEY_RATE: f32 = 0.4;
pub const GANTRY_TROLLEY_AMPLITUDE: f32 = 10.0;
/// Rate of the slow pick/place cycle.
pub const GANTRY_CYCLE_RATE: f32 = 0.3;
pub const GANTRY_CABLE_MID: f32 = 8.0;
pub const GANTRY_CABLE_SWING: f32 = 4.0;
/// Hook hangs this far below the cable end.
pub const GANTRY_HOOK_OFFSET: f32 = 1.5;
/// Cargo hides while sin(cycle) is at or below this value.
pub const GANTRY_DROP_THRESHOLD: f32 = -0.3;

pub const MARKER_SPIN_RATE: f32 = 0.5;
pub const MARKER_CORE_RATE: f32 = 0.3;
pub const MARKER_RING_RATE: f32 = 0.2;
pub const MARKER_SATELLITE_COUNT: usize = 8;
pub const MARKER_SATELLITE_RADIUS: f32 = 2.5;
pub const MARKER_SATELLITE_ORBIT_RATE: f32 = 0.5;
pub const MARKER_SATELLITE_BOB_RATE: f32 = 2.0;
pub const MARKER_SATELLITE_BOB_AMPLITUDE: f32 = 0.5;
/// Satellites follow the core and ring as children, so their bob phase
/// starts at this child slot.
pub const MARKER_SATELLITE_SLOT_OFFSET: usize = 2;
pub const MARKER_BOB_RATE: f32 = 2.0;
/// Peak-to-base lift of the whole marker.
pub const MARKER_BOB_AMPLITUDE: f32 = 0.15;

pub const BLINK_RATE: f32 = 4.0;
pub const BLINK_BASE: f32 = 0.5;
pub const BLINK_SWING: f32 = 0.5;
