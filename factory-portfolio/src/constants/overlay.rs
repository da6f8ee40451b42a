/// Tooltip offset from the pointer in logical pixels.
pub const TOOLTIP_OFFSET: f32 = 15.0;

/// Seconds between FPS readout refreshes.
pub const FPS_REFRESH_INTERVAL: f32 = 1.0;

pub const READOUT_FONT_SIZE: f32 = 14.0;
pub const TOOLTIP_FONT_SIZE: f32 = 16.0;

/// Pointer travel in pixels above which a press counts as a drag, not a click.
pub const CLICK_DRAG_TOLERANCE: f32 = 5.0;
