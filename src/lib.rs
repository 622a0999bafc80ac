use wasm_bindgen::prelude::*;

mod canvas;
mod components;
mod constants;
mod dom_utils;
mod macros;
mod messages;
mod models;
mod reducers;
mod state;
mod toast;
mod update;

#[cfg(test)]
mod graph_prop_test;

// Main entry point for the WASM application
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Right-click anywhere that is not a node opens the background menu.
    // Node-level menus come in through `open_node_menu` below, called by the
    // rendering layer with the node id it hit-tested.
    let on_contextmenu = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };
        components::context_menu::open_background_menu(
            &document,
            event.client_x() as f64,
            event.client_y() as f64,
        );
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("contextmenu", on_contextmenu.as_ref().unchecked_ref())?;
    on_contextmenu.forget();

    Ok(())
}

/// Register the rendering layer's change callback.  It receives a JSON
/// string `{"nodes":[...],"edges":[...]}` after every structural mutation,
/// plus one immediate call with the current graph.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn on_graph_change(callback: js_sys::Function) {
    state::set_render_sink(std::rc::Rc::new(canvas::sink::JsCallbackSink::new(callback)));
}

/// Apply a structural operation (`add`/`update`/`replace`/`sync`/`remove`)
/// to the node collection.  `payload_json` is a JSON array of nodes.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn apply_nodes(op: &str, payload_json: &str) -> Result<(), JsValue> {
    let op = messages::GraphOp::parse(op)
        .ok_or_else(|| JsValue::from_str(&format!("unknown graph op: {}", op)))?;
    let payload: Vec<models::Node> = serde_json::from_str(payload_json)
        .map_err(|e| JsValue::from_str(&format!("bad node payload: {}", e)))?;
    state::dispatch_global_message(messages::Message::Nodes { op, payload });
    Ok(())
}

/// Apply a structural operation to the edge collection.  `payload_json` is a
/// JSON array of edges.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn apply_edges(op: &str, payload_json: &str) -> Result<(), JsValue> {
    let op = messages::GraphOp::parse(op)
        .ok_or_else(|| JsValue::from_str(&format!("unknown graph op: {}", op)))?;
    let payload: Vec<models::Edge> = serde_json::from_str(payload_json)
        .map_err(|e| JsValue::from_str(&format!("bad edge payload: {}", e)))?;
    state::dispatch_global_message(messages::Message::Edges { op, payload });
    Ok(())
}

/// Viewport update pushed in by the rendering layer on pan/zoom.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_viewport(x: f64, y: f64, zoom: f64) {
    state::dispatch_global_message(messages::Message::SetViewport { x, y, zoom });
}

/// Connection gesture completed between two nodes.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn connect_nodes(source: &str, target: &str) {
    state::dispatch_global_message(messages::Message::ConnectNodes {
        source: source.to_string(),
        target: target.to_string(),
        label: None,
    });
}

/// Make one node the sole selection; pass `None` to clear it.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn select_node(node_id: Option<String>) {
    state::dispatch_global_message(messages::Message::SelectNode { node_id });
}

/// Mousedown on a node body: start a move drag.  The window listeners take
/// it from here until mouseup or Escape.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_node_drag(node_id: &str) {
    state::dispatch_global_message(messages::Message::StartDrag {
        node_id: node_id.to_string(),
        mode: models::DragMode::Move,
    });
}

/// Right-click on a node: open its context menu at the pointer.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn open_node_menu(node_id: &str, client_x: f64, client_y: f64) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    components::context_menu::open_node_menu(&document, node_id, client_x, client_y);
}

/// Attach the four corner resize handles to a rendered node container.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn attach_resize_handles(container_id: &str, node_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {}", container_id)))?;
    components::node_resizer::attach(&document, &container, node_id)
}
