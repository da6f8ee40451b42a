use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::engine::animation::AnimationPlugin;
use crate::engine::camera::CameraRigPlugin;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::frame::{FramePlugin, FrameSet};
use crate::engine::core::window_config::create_window_config;
use crate::engine::lighting::DayNightPlugin;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::build_factory_scene;
use crate::engine::systems::camera_readout::camera_position_notification_system;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::interaction::InteractionPlugin;
use crate::portfolio::PortfolioPlugin;
use crate::portfolio::manifest::{ManifestLoader, load_manifest_system, start_loading};
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::UiPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::{
    camera_readout::camera_text_update_system, fps_tracking::fps_text_update_system,
};

const LOG_FILTER: &str = "wgpu=error,naga=warn,factory_portfolio=info";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(FramePlugin)
        .add_plugins(WebRpcPlugin)
        .add_plugins(PortfolioPlugin)
        .add_plugins(AnimationPlugin)
        .add_plugins(DayNightPlugin)
        .add_plugins(CameraRigPlugin)
        .add_plugins(InteractionPlugin)
        .add_plugins(UiPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>();

    // State-based system scheduling
    app.add_systems(Startup, (start_loading, build_factory_scene))
        .add_systems(
            Update,
            (load_manifest_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    app.add_systems(
        Update,
        (fps_notification_system, camera_position_notification_system)
            .in_set(FrameSet::Overlay)
            .run_if(in_state(AppState::Running)),
    );

    // Text readouts only exist on native builds; the web overlay draws its own.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            (fps_text_update_system, camera_text_update_system)
                .in_set(FrameSet::Overlay)
                .run_if(in_state(AppState::Running)),
        );
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
