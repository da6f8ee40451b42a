use bevy::prelude::*;

use crate::engine::core::frame::SceneCamera;
use crate::rpc::web_rpc::WebRpcInterface;
#[cfg(not(target_arch = "wasm32"))]
use crate::ui::overlay::CameraPositionText;

/// Camera position rounded to whole units, as shown in the readout.
pub fn rounded_position(position: Vec3) -> IVec3 {
    position.round().as_ivec3()
}

pub fn format_position(position: IVec3) -> String {
    format!("X: {} Y: {} Z: {}", position.x, position.y, position.z)
}

/// Notify the overlay whenever the rounded camera position changes.
pub fn camera_position_notification_system(
    cameras: Query<&Transform, With<SceneCamera>>,
    mut last_sent: Local<Option<IVec3>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Ok(transform) = cameras.single() else {
        return;
    };
    let rounded = rounded_position(transform.translation);
    if *last_sent == Some(rounded) {
        return;
    }
    *last_sent = Some(rounded);
    rpc_interface.send_notification(
        "camera_position",
        serde_json::json!({ "x": rounded.x, "y": rounded.y, "z": rounded.z }),
    );
}

#[cfg(not(target_arch = "wasm32"))]
pub fn camera_text_update_system(
    cameras: Query<&Transform, With<SceneCamera>>,
    mut query: Query<&mut Text, With<CameraPositionText>>,
) {
    let Ok(transform) = cameras.single() else {
        return;
    };
    let label = format_position(rounded_position(transform.translation));
    for mut text in &mut query {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}
