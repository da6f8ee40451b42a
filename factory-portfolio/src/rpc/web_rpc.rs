use crate::engine::core::frame::FrameSet;
use crate::engine::systems::fps_tracking::current_fps;
use crate::portfolio::catalogue::{CategoryKey, ProjectCatalogue, ProjectScope};
use crate::ui::state::{NavSection, UiCommand, ZoomDirection};
use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the overlay and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the overlay without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the overlay.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> usize {
        self.outgoing_notifications.len()
    }

    /// Params of the most recent queued notification named `method`.
    #[cfg(test)]
    pub fn last_notification(&self, method: &str) -> Option<serde_json::Value> {
        self.outgoing_notifications
            .iter()
            .rev()
            .find(|notification| notification.method == method)
            .map(|notification| notification.params.clone())
    }

    #[cfg(test)]
    fn last_response(&self) -> Option<&RpcResponse> {
        self.outgoing_responses.last()
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages)
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, send_outgoing_messages.in_set(FrameSet::Overlay));

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Attempt JSON parsing to validate RPC format before queuing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the overlay.
#[derive(Event)]
pub struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    // Write events using the non-deprecated method.
    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

pub fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    catalogue: Res<ProjectCatalogue>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut ui_commands: EventWriter<UiCommand>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) =
                    handle_rpc_request(&request, &diagnostics, &catalogue, &mut ui_commands)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Ignoring malformed RPC message: {}", parse_error);
            }
        }
    }
}

/// Handle individual RPC request. Requests without an ID are still
/// executed but never answered.
fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    catalogue: &ProjectCatalogue,
    ui_commands: &mut EventWriter<UiCommand>,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_fps" => Ok(serde_json::json!({ "fps": current_fps(diagnostics) })),
        "get_projects" => Ok(catalogue.to_json()),
        method => match parse_ui_command(method, &request.params) {
            Some(Ok(command)) => {
                debug!("UI command from RPC: {:?}", command);
                ui_commands.write(command);
                Ok(serde_json::json!({ "success": true }))
            }
            Some(Err(error)) => Err(error),
            None => {
                warn!("Unknown RPC method: {}", request.method);
                let id = request.id.clone()?;
                return Some(create_error_response(
                    id,
                    -32601,
                    "Method not found",
                    Some(serde_json::json!({"method": request.method})),
                ));
            }
        },
    };

    let id = request.id.clone()?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Map an overlay method onto a UI command. `None` means the method is
/// not a UI command at all.
fn parse_ui_command(
    method: &str,
    params: &serde_json::Value,
) -> Option<Result<UiCommand, RpcError>> {
    let command = match method {
        "navigate" => string_param(params, "section").and_then(|section| {
            NavSection::from_string(&section)
                .map(UiCommand::Navigate)
                .ok_or_else(|| RpcError::invalid_params(&format!("Unknown section: {section}")))
        }),
        "explore_scene" => Ok(UiCommand::ExploreScene),
        "close_panels" => Ok(UiCommand::ClosePanels),
        "set_project_filter" => string_param(params, "filter").and_then(|filter| {
            ProjectScope::from_string(&filter)
                .map(UiCommand::SetFilter)
                .ok_or_else(|| RpcError::invalid_params(&format!("Unknown filter: {filter}")))
        }),
        "open_project" => {
            #[derive(serde::Deserialize)]
            struct OpenProjectParams {
                index: usize,
            }
            serde_json::from_value::<OpenProjectParams>(params.clone())
                .map(|parsed| UiCommand::OpenProject(parsed.index))
                .map_err(|_| RpcError::invalid_params("Expected 'index' parameter"))
        }
        "open_category" => string_param(params, "category").and_then(|category| {
            CategoryKey::from_string(&category)
                .map(UiCommand::OpenCategory)
                .ok_or_else(|| RpcError::invalid_params(&format!("Unknown category: {category}")))
        }),
        "previous_project" => Ok(UiCommand::PreviousProject),
        "next_project" => Ok(UiCommand::NextProject),
        "close_modal" => Ok(UiCommand::CloseModal),
        "view_project" => Ok(UiCommand::ViewProject),
        "fly_to_section" => string_param(params, "section").map(UiCommand::FlyToSection),
        "toggle_day_night" => Ok(UiCommand::ToggleDayNight),
        "toggle_auto_rotate" => Ok(UiCommand::ToggleAutoRotate),
        "zoom" => string_param(params, "direction").and_then(|direction| {
            ZoomDirection::from_string(&direction)
                .map(UiCommand::Zoom)
                .ok_or_else(|| RpcError::invalid_params("Expected direction 'in' or 'out'"))
        }),
        "reset_view" => Ok(UiCommand::ResetView),
        "toggle_fullscreen" => Ok(UiCommand::ToggleFullscreen),
        "toggle_mobile_menu" => Ok(UiCommand::ToggleMobileMenu),
        "escape" => Ok(UiCommand::Escape),
        _ => return None,
    };
    Some(command)
}

fn string_param(params: &serde_json::Value, name: &str) -> Result<String, RpcError> {
    params
        .get(name)
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .ok_or_else(|| RpcError::invalid_params(&format!("Expected '{name}' parameter")))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the overlay.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window (the overlay).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::catalogue::tests::project;

    fn rpc_app() -> App {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .init_resource::<DiagnosticsStore>()
            .insert_resource(ProjectCatalogue::new(vec![project("arm", CategoryKey::Robots)]))
            .add_event::<IncomingRpcMessage>()
            .add_event::<UiCommand>()
            .add_systems(Update, handle_rpc_messages);
        app
    }

    fn send(app: &mut App, message: serde_json::Value) {
        app.world_mut().send_event(IncomingRpcMessage {
            content: message.to_string(),
        });
        app.update();
    }

    fn sent_commands(app: &App) -> Vec<UiCommand> {
        let events = app.world().resource::<Events<UiCommand>>();
        events.get_cursor().read(events).cloned().collect()
    }

    #[test]
    fn ui_methods_become_commands() {
        let mut app = rpc_app();
        send(
            &mut app,
            serde_json::json!({"jsonrpc": "2.0", "method": "open_category",
                "params": {"category": "cranes"}, "id": 1}),
        );
        assert_eq!(sent_commands(&app), vec![UiCommand::OpenCategory(CategoryKey::Cranes)]);

        let rpc = app.world().resource::<WebRpcInterface>();
        let response = rpc.last_response().expect("response");
        assert_eq!(response.id, Some(serde_json::json!(1)));
        assert!(response.error.is_none());
    }

    #[test]
    fn notifications_execute_without_reply() {
        let mut app = rpc_app();
        send(
            &mut app,
            serde_json::json!({"jsonrpc": "2.0", "method": "zoom", "params": {"direction": "in"}}),
        );
        assert_eq!(sent_commands(&app), vec![UiCommand::Zoom(ZoomDirection::In)]);
        assert!(app.world().resource::<WebRpcInterface>().last_response().is_none());
    }

    #[test]
    fn bad_params_report_invalid_params() {
        let mut app = rpc_app();
        send(
            &mut app,
            serde_json::json!({"jsonrpc": "2.0", "method": "navigate",
                "params": {"section": "basement"}, "id": 7}),
        );
        assert!(sent_commands(&app).is_empty());
        let rpc = app.world().resource::<WebRpcInterface>();
        let code = rpc.last_response().and_then(|r| r.error.as_ref()).map(|e| e.code);
        assert_eq!(code, Some(-32602));
    }

    #[test]
    fn unknown_method_is_not_found() {
        let mut app = rpc_app();
        send(&mut app, serde_json::json!({"jsonrpc": "2.0", "method": "teleport", "id": 3}));
        let rpc = app.world().resource::<WebRpcInterface>();
        let code = rpc.last_response().and_then(|r| r.error.as_ref()).map(|e| e.code);
        assert_eq!(code, Some(-32601));
    }

    #[test]
    fn get_projects_returns_catalogue() {
        let mut app = rpc_app();
        send(&mut app, serde_json::json!({"jsonrpc": "2.0", "method": "get_projects", "id": 2}));
        let rpc = app.world().resource::<WebRpcInterface>();
        let result = rpc.last_response().and_then(|r| r.result.clone()).unwrap_or_default();
        assert_eq!(result["projects"][0]["title"], "arm");
        assert_eq!(result["external_count"], 0);
    }
}
