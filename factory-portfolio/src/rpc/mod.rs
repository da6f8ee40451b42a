//! JSON-RPC 2.0 communication layer for the web overlay.
//!
//! Implements bidirectional messaging between the Bevy engine and the HTML
//! overlay via iframe postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! Overlay (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Queue UiCommand
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        ├─ Notification (no ID) ───────────────> ├─ Queue UiCommand
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Sending Notifications from Bevy
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({ "data": "value" }));
//! }
//! ```
//!
//! ## Error Handling
//!
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//!
//! ## Incoming Methods
//!
//! ### Navigation and panels
//! - `navigate` `{section}`: home, overview, projects, skills or contact
//! - `explore_scene`, `close_panels`, `toggle_mobile_menu`, `escape`
//! - `fly_to_section` `{section}`: robots, cranes, plc, conveyors or home
//!
//! ### Projects
//! - `set_project_filter` `{filter}`: all or a category key
//! - `open_project` `{index}`, `open_category` `{category}`
//! - `previous_project`, `next_project`, `close_modal`, `view_project`
//! - `get_projects`: full project list and external count
//!
//! ### Scene
//! - `toggle_day_night`, `toggle_auto_rotate`, `reset_view`, `toggle_fullscreen`
//! - `zoom` `{direction}`: in or out
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Outgoing Notifications
//!
//! `ui_state_changed`, `projects_updated`, `hover_changed`, `fps_update`,
//! `camera_position`, `theme_changed`, `open_external_url`, `loading_complete`.

/// JSON-RPC 2.0 bidirectional communication system for the overlay.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
