use bevy::prelude::*;

use crate::engine::animation::registry::AnimatedObjectRegistry;
use crate::engine::loading::progress::LoadingProgress;
use crate::portfolio::catalogue::{ProjectCatalogue, ProjectScope};
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Switch to `Running` once the manifest and the scene are both ready, and
/// tell the overlay it can drop its loading screen.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    catalogue: Res<ProjectCatalogue>,
    registry: Res<AnimatedObjectRegistry>,
    mut next_state: ResMut<NextState<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.is_complete() {
        return;
    }

    info!(
        "→ Scene ready ({} animated objects), transitioning to Running state",
        registry.len()
    );
    next_state.set(AppState::Running);
    rpc_interface.send_notification(
        "loading_complete",
        serde_json::json!({
            "project_count": catalogue.len(ProjectScope::All),
            "animated_objects": registry.len(),
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn state_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<LoadingProgress>()
            .init_resource::<ProjectCatalogue>()
            .init_resource::<AnimatedObjectRegistry>()
            .init_resource::<WebRpcInterface>()
            .add_systems(
                Update,
                transition_to_running.run_if(in_state(AppState::Loading)),
            );
        app
    }

    #[test]
    fn stays_loading_until_both_milestones() {
        let mut app = state_app();
        app.world_mut().resource_mut::<LoadingProgress>().manifest_loaded = true;
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<AppState>>().get(), AppState::Loading);
        assert_eq!(app.world().resource::<WebRpcInterface>().pending_notifications(), 0);
    }

    #[test]
    fn enters_running_once_and_notifies() {
        let mut app = state_app();
        {
            let mut progress = app.world_mut().resource_mut::<LoadingProgress>();
            progress.manifest_loaded = true;
            progress.scene_built = true;
        }
        app.update();
        app.update();
        app.update();

        assert_eq!(*app.world().resource::<State<AppState>>().get(), AppState::Running);
        let rpc = app.world().resource::<WebRpcInterface>();
        assert_eq!(rpc.pending_notifications(), 1);
        assert!(rpc.last_notification("loading_complete").is_some());
    }
}
