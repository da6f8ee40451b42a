use bevy::prelude::*;

/// Per-frame ordering. Input may enqueue UI transitions and flights that
/// the later sets consume in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Clock,
    Input,
    Animate,
    Lighting,
    Camera,
    Overlay,
}

/// Scene time as seen by animation and lighting.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneClock {
    /// Seconds since the scene started running.
    pub elapsed: f32,
    pub delta: f32,
    pub frame: u64,
}

impl SceneClock {
    pub fn advance(&mut self, delta: f32) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame += 1;
    }
}

/// Marks the single 3D camera the rig drives.
#[derive(Component, Debug, Default)]
pub struct SceneCamera;

pub fn advance_scene_clock(time: Res<Time>, mut clock: ResMut<SceneClock>) {
    clock.advance(time.delta_secs());
}

pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .configure_sets(
                Update,
                (
                    FrameSet::Clock,
                    FrameSet::Input,
                    FrameSet::Animate,
                    FrameSet::Lighting,
                    FrameSet::Camera,
                    FrameSet::Overlay,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                advance_scene_clock
                    .in_set(FrameSet::Clock)
                    .run_if(in_state(super::app_state::AppState::Running)),
            );
    }
}
