//! Startup loading milestones.
//!
//! The manifest and scene builder each flip one flag; the app moves to
//! `Running` once both are set.

/// Loading progress resource checked by the state transition.
pub mod progress;
