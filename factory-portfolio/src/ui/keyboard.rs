use bevy::prelude::*;

use super::state::UiCommand;

/// Modal and panel keys, mirrored by the overlay on every target.
pub fn handle_ui_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut ui_commands: EventWriter<UiCommand>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        ui_commands.write(UiCommand::Escape);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        ui_commands.write(UiCommand::PreviousProject);
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        ui_commands.write(UiCommand::NextProject);
    }
}

/// Debug shortcuts for the scene toggles (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_debug_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut ui_commands: EventWriter<UiCommand>,
) {
    if keyboard.just_pressed(KeyCode::KeyN) {
        ui_commands.write(UiCommand::ToggleDayNight);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        ui_commands.write(UiCommand::ToggleAutoRotate);
    }
}

/// Placeholder system for WASM builds where the overlay owns these toggles.
#[cfg(target_arch = "wasm32")]
pub fn handle_debug_keyboard_shortcuts() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_projects_and_escape_closes() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_event::<UiCommand>()
            .add_systems(Update, handle_ui_keyboard_shortcuts);

        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::ArrowRight);
            keyboard.press(KeyCode::Escape);
        }
        app.update();

        let events = app.world().resource::<Events<UiCommand>>();
        let sent: Vec<UiCommand> = events.get_cursor().read(events).cloned().collect();
        assert_eq!(sent, vec![UiCommand::Escape, UiCommand::NextProject]);
    }
}
