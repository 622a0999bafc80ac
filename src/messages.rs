// src/messages.rs
//
// The events that can occur in the designer.  Expand as needed.
//
use crate::models::{DragMode, Edge, Node, NodeType};

/// Which structural mutation a [`Message::Nodes`]/[`Message::Edges`] batch
/// applies.  See the reducer modules for the exact semantics of each.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GraphOp {
    /// Append the payload (nodes additionally deselect everything first;
    /// edges merge on id collision instead of duplicating).
    Add,
    /// Merge payload entries over existing entries matched by id; payload
    /// entries with no match are dropped (reconciliation, not upsert).
    Update,
    /// Wholesale replacement - used by the rendering layer to commit a full
    /// recomputed list after a gesture.
    Replace,
    /// Upsert-with-pruning: the result's id set equals the payload's.
    Sync,
    /// Drop entries whose id appears in the payload.
    Remove,
}

impl GraphOp {
    /// Parse the operation name used on the wasm surface.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "add" => Some(GraphOp::Add),
            "update" => Some(GraphOp::Update),
            "replace" => Some(GraphOp::Replace),
            "sync" => Some(GraphOp::Sync),
            "remove" => Some(GraphOp::Remove),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Raw graph mutations (the Graph State Store surface)
    Nodes { op: GraphOp, payload: Vec<Node> },
    Edges { op: GraphOp, payload: Vec<Edge> },

    // Gestures
    /// Context-menu "add node": place a new node of `node_type` so its box
    /// is centred under the screen point, mapped through the viewport.
    AddNodeAtPointer {
        node_type: NodeType,
        client_x: f64,
        client_y: f64,
        label: Option<String>,
    },
    /// Connection gesture between two anchor points.
    ConnectNodes {
        source: String,
        target: String,
        label: Option<String>,
    },
    /// Remove a node and, explicitly, its incident edges.
    RemoveNode { node_id: String },
    /// Make `node_id` the sole selected node (None clears selection).
    SelectNode { node_id: Option<String> },

    // Viewport (pushed in by the rendering layer, read-only to the core)
    SetViewport { x: f64, y: f64, zoom: f64 },

    // Drag state machine
    StartDrag { node_id: String, mode: DragMode },
    UpdateDrag { movement_x: f64, movement_y: f64 },
    StopDrag,
    CancelDrag,
}

/// Commands represent side effects that should be executed after state
/// updates.  This separates pure state changes from effects like listener
/// wiring and render notifications.
pub enum Command {
    /// Chain another message to be processed
    SendMessage(Message),

    /// Execute a UI update function after state changes
    UpdateUI(Box<dyn FnOnce() + 'static>),

    /// Push the node/edge snapshot to the registered render sink
    Render,

    /// Represents no side effect
    NoOp,
}

impl Command {
    /// Helper to create a SendMessage command
    #[allow(dead_code)]
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    /// Helper to create a NoOp command
    #[allow(dead_code)]
    pub fn none() -> Self {
        Command::NoOp
    }

    /// Helper to create an UpdateUI command
    pub fn update_ui<F>(f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Command::UpdateUI(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_op_names_round_trip() {
        assert_eq!(GraphOp::parse("add"), Some(GraphOp::Add));
        assert_eq!(GraphOp::parse("update"), Some(GraphOp::Update));
        assert_eq!(GraphOp::parse("replace"), Some(GraphOp::Replace));
        assert_eq!(GraphOp::parse("sync"), Some(GraphOp::Sync));
        assert_eq!(GraphOp::parse("remove"), Some(GraphOp::Remove));
        assert_eq!(GraphOp::parse("Add"), None, "names are case-sensitive");
    }
}
