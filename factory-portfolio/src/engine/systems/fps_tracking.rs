use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::constants::overlay::FPS_REFRESH_INTERVAL;
use crate::rpc::web_rpc::WebRpcInterface;
#[cfg(not(target_arch = "wasm32"))]
use crate::ui::overlay::FpsText;

/// Smoothed frame rate, or 0 before the first sample.
pub fn current_fps(diagnostics: &DiagnosticsStore) -> f32 {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0) as f32
}

/// Seconds-based refresh gate shared by the FPS notification and readout.
#[derive(Debug, Default)]
pub struct RefreshTimer {
    last_sent: Option<f32>,
}

impl RefreshTimer {
    pub fn ready(&mut self, now: f32, interval: f32) -> bool {
        match self.last_sent {
            Some(last) if now - last < interval => false,
            _ => {
                self.last_sent = Some(now);
                true
            }
        }
    }
}

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut timer: Local<RefreshTimer>,
    time: Res<Time>,
) {
    if !timer.ready(time.elapsed_secs(), FPS_REFRESH_INTERVAL) {
        return;
    }
    rpc_interface.send_notification(
        "fps_update",
        serde_json::json!({
            "fps": current_fps(&diagnostics).round()
        }),
    );
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut timer: Local<RefreshTimer>,
    time: Res<Time>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    if !timer.ready(time.elapsed_secs(), FPS_REFRESH_INTERVAL) {
        return;
    }
    let fps = current_fps(&diagnostics);
    for mut text in &mut query {
        text.0 = format!("FPS: {fps:.0}");
    }
}
