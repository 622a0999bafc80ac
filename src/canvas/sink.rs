//! Rendering-layer contract.
//!
//! The core never draws anything itself.  After every structural mutation it
//! hands the new node/edge snapshots to whatever [`RenderSink`] the host
//! registered; the rendering layer owns panning, zooming and the visual
//! representation of nodes and edges.

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::models::{Edge, Node};

/// Receives the full ordered collections after each completed mutation.
/// Snapshots are value copies - a sink holding on to a previous snapshot
/// observes stable data.
pub trait RenderSink {
    fn graph_changed(&self, nodes: &[Node], edges: &[Edge]);
}

#[derive(Serialize)]
struct Snapshot<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
}

/// Bridges snapshots across the wasm boundary: serialises the graph to JSON
/// and invokes a JS callback with the string.  The external rendering layer
/// parses it and re-renders.
pub struct JsCallbackSink {
    on_change: js_sys::Function,
}

impl JsCallbackSink {
    pub fn new(on_change: js_sys::Function) -> Self {
        Self { on_change }
    }
}

impl RenderSink for JsCallbackSink {
    fn graph_changed(&self, nodes: &[Node], edges: &[Edge]) {
        match serde_json::to_string(&Snapshot { nodes, edges }) {
            Ok(json) => {
                let _ = self
                    .on_change
                    .call1(&JsValue::NULL, &JsValue::from_str(&json));
            }
            Err(e) => {
                crate::console_warn!("Failed to serialize graph snapshot: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeType, Position};

    #[test]
    fn snapshot_serialises_both_collections() {
        let node = Node::new(NodeType::Note, Position::new(1.0, 2.0));
        let edge = Edge::connect("a", "b", Some("ok".to_string()));
        let json = serde_json::to_string(&Snapshot {
            nodes: &[node.clone()],
            edges: &[edge],
        })
        .unwrap();
        assert!(json.contains(&node.id));
        assert!(json.contains("\"a-b\""));
    }
}
