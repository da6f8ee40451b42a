//! Runtime readouts and overlay notifications.

/// Frame rate notification and native FPS readout.
pub mod fps_tracking;

/// Camera position notification and native readout.
pub mod camera_readout;
