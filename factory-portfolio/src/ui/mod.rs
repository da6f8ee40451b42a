//! Overlay state and commands.
//!
//! `UiCommand`s arrive from RPC, the keyboard and marker picks. The state
//! controller applies them in order, hands camera and lighting work to
//! their owners and publishes a full snapshot after each command.

pub mod commands;
pub mod keyboard;
pub mod overlay;

/// Panels, hero, project filter and modal state plus the command set.
pub mod state;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::core::frame::FrameSet;
use crate::interaction::hover::marker_click_system;
use crate::rpc::web_rpc::handle_rpc_messages;
use commands::handle_ui_commands;
use keyboard::{handle_debug_keyboard_shortcuts, handle_ui_keyboard_shortcuts};
use state::{UiCommand, UiState};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .add_event::<UiCommand>()
            .add_systems(
                Update,
                (
                    (handle_ui_keyboard_shortcuts, handle_debug_keyboard_shortcuts),
                    handle_ui_commands
                        .after(handle_rpc_messages)
                        .after(marker_click_system),
                )
                    .chain()
                    .in_set(FrameSet::Input)
                    .run_if(in_state(AppState::Running)),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(Startup, overlay::create_native_overlays)
                .add_systems(
                    Update,
                    overlay::tooltip_update_system
                        .in_set(FrameSet::Overlay)
                        .run_if(in_state(AppState::Running)),
                );
        }
    }
}
