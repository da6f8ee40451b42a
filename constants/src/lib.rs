//! Shared tuning values for the factory portfolio scene.
//!
//! Kept in a separate crate so scene construction, animation and the
//! overlay bridge agree on one set of numbers.

pub mod animation;
pub mod camera;
pub mod lighting;
pub mod palette;
pub mod scene_layout;
