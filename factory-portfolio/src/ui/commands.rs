use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};
use serde_json::json;

use super::state::{UiCommand, UiEffect, UiState};
use crate::engine::camera::navigator::CameraCommand;
use crate::engine::lighting::day_night::DayNightController;
use crate::portfolio::catalogue::ProjectCatalogue;
use crate::rpc::web_rpc::WebRpcInterface;

/// Apply queued UI commands, carry out their effects and publish the
/// resulting state after each one.
pub fn handle_ui_commands(
    mut ui_commands: EventReader<UiCommand>,
    mut ui_state: ResMut<UiState>,
    catalogue: Res<ProjectCatalogue>,
    mut camera_commands: EventWriter<CameraCommand>,
    mut day_night: ResMut<DayNightController>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    for command in ui_commands.read() {
        debug!("UI command: {:?}", command);
        for effect in ui_state.apply(command, &catalogue) {
            match effect {
                UiEffect::Camera(camera_command) => {
                    camera_commands.write(camera_command);
                }
                UiEffect::ToggleDayNight => {
                    let theme = day_night.toggle();
                    info!("Switching to {} theme", theme.as_str());
                    rpc_interface.send_notification("theme_changed", json!({ "theme": theme.as_str() }));
                }
                UiEffect::OpenExternalUrl(url) => {
                    info!("Opening external project {}", url);
                    rpc_interface.send_notification("open_external_url", json!({ "url": url }));
                }
                UiEffect::ToggleFullscreen => {
                    if let Ok(mut window) = windows.single_mut() {
                        window.mode = match window.mode {
                            WindowMode::Windowed => {
                                WindowMode::BorderlessFullscreen(MonitorSelection::Current)
                            }
                            _ => WindowMode::Windowed,
                        };
                    }
                }
            }
        }
        rpc_interface.send_notification("ui_state_changed", ui_state.to_json(&catalogue));
    }
}
