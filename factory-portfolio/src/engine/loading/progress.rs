use bevy::prelude::*;

/// Startup milestones gating the switch to `AppState::Running`.
#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub scene_built: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.manifest_loaded && self.scene_built
    }
}
