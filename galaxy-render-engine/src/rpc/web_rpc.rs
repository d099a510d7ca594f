use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::galaxy::lifecycle::Galaxy;
use crate::engine::galaxy::systems::{GalaxyRegenerated, RegenerateGalaxy};
use crate::engine::systems::fps_tracking::smoothed_fps;
use crate::tuning::controls::{TuningSource, TuningValue, commit_tuning_value, controls_for};

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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
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

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication with the debug panel.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the panel without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the panel.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
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
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    notify_galaxy_regenerated,
                    send_outgoing_messages,
                )
                    .chain(),
            );

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
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, RPC listener not registered");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the panel.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
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

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut galaxy: Option<ResMut<Galaxy>>,
    mut regenerate: EventWriter<RegenerateGalaxy>,
) {
    let fps = smoothed_fps(&diagnostics).unwrap_or(0.0) as f32;

    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                let galaxy = galaxy.as_deref_mut();
                if let Some(response) = handle_rpc_request(&request, fps, galaxy, &mut regenerate)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("RPC parse error: {}", parse_error);
                rpc_interface.queue_response(RpcResponse {
                    jsonrpc: "2.0".to_string(),
                    result: None,
                    error: Some(RpcError::parse_error(&parse_error.to_string())),
                    id: None,
                });
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(
    request: &RpcRequest,
    fps: f32,
    galaxy: Option<&mut Galaxy>,
    regenerate: &mut EventWriter<RegenerateGalaxy>,
) -> Option<RpcResponse> {
    // Notifications carry no id. They are still executed, but never answered.
    let id = request.id.clone();

    let result = match request.method.as_str() {
        "get_tuning_controls" => handle_get_tuning_controls(galaxy),
        "set_tuning_value" => handle_set_tuning_value(&request.params, galaxy, regenerate),
        "regenerate_galaxy" => handle_regenerate_galaxy(galaxy, regenerate),
        "get_fps" => Ok(serde_json::json!({ "fps": fps })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return id.map(|id| {
                create_error_response(
                    id,
                    -32601,
                    "Method not found",
                    Some(serde_json::json!({"method": request.method})),
                )
            });
        }
    };

    let id = id?;
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

fn handle_get_tuning_controls(galaxy: Option<&mut Galaxy>) -> Result<serde_json::Value, RpcError> {
    let galaxy = galaxy.ok_or_else(|| RpcError::internal_error("Galaxy not ready"))?;
    serde_json::to_value(controls_for(&galaxy.parameters))
        .map_err(|e| RpcError::internal_error(&e.to_string()))
}

/// Apply one panel edit. Numeric values are clamped into the control's bounds.
fn handle_set_tuning_value(
    params: &serde_json::Value,
    galaxy: Option<&mut Galaxy>,
    regenerate: &mut EventWriter<RegenerateGalaxy>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct SetTuningValueParams {
        name: String,
        value: TuningValue,
    }

    let tuning_params = serde_json::from_value::<SetTuningValueParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'name' and 'value' parameters"))?;

    let galaxy = galaxy.ok_or_else(|| RpcError::internal_error("Galaxy not ready"))?;

    let applied = commit_tuning_value(
        &mut galaxy.parameters,
        &tuning_params.name,
        &tuning_params.value,
        TuningSource::Rpc,
        regenerate,
    )
    .map_err(|e| RpcError::invalid_params(&e.to_string()))?;

    Ok(serde_json::json!({
        "success": true,
        "name": tuning_params.name,
        "value": applied
    }))
}

fn handle_regenerate_galaxy(
    galaxy: Option<&mut Galaxy>,
    regenerate: &mut EventWriter<RegenerateGalaxy>,
) -> Result<serde_json::Value, RpcError> {
    if galaxy.is_none() {
        return Err(RpcError::internal_error("Galaxy not ready"));
    }
    regenerate.write(RegenerateGalaxy);
    Ok(serde_json::json!({ "success": true }))
}

/// Tell the panel about every completed rebuild and the values it used.
fn notify_galaxy_regenerated(
    mut regenerated: EventReader<GalaxyRegenerated>,
    galaxy: Option<Res<Galaxy>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(GalaxyRegenerated(report)) = regenerated.read().last().copied() else {
        return;
    };

    rpc_interface.send_notification(
        "galaxy_regenerated",
        serde_json::json!({
            "point_count": report.point_count,
            "generation": report.generation
        }),
    );

    if let Some(galaxy) = galaxy {
        rpc_interface.send_notification(
            "tuning_controls_changed",
            serde_json::json!({ "controls": controls_for(&galaxy.parameters) }),
        );
    }
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

/// Send queued notifications and responses to the panel.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
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
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn parse_error(message: &str) -> Self {
        Self {
            code: -32700,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
