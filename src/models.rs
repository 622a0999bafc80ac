use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH};

/// The closed set of node kinds the designer can place.
///
/// `Terminal` is reserved for future workflow endings; the UI never creates
/// one today but the wire format already knows about it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum NodeType {
    Trigger,
    Action,
    Note,
    Terminal,
}

impl NodeType {
    /// Default box size used before the user resizes a node.
    pub fn default_size(&self) -> (f64, f64) {
        (DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT)
    }

    /// Canvas-space correction applied when placing a node at the pointer so
    /// the box is centred under the cursor instead of hanging off its
    /// top-left anchor.  Half the default box, negated.
    pub fn anchor_offset(&self) -> (f64, f64) {
        let (w, h) = self.default_size();
        (-(w / 2.0), -(h / 2.0))
    }
}

/// A point in canvas (world) space, or screen space where noted.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Free-form node payload.
///
/// `content` is the opaque rich-text blob owned by the external note widget;
/// the core only carries it.  `width`/`height` are the dimensions committed
/// by a completed resize gesture - absent until the user resizes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: Option<String>,
    pub content: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Node represents a placed workflow element on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub node_type: NodeType,
    /// Canvas-space top-left anchor.
    pub position: Position,
    pub data: NodeData,
    pub selected: bool,
}

impl Node {
    /// Create a node with a fresh random id.  The id is stable for the
    /// node's lifetime.
    pub fn new(node_type: NodeType, position: Position) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            node_type,
            position,
            data: NodeData::default(),
            selected: false,
        }
    }

    /// Effective width: committed resize dimension or the type default.
    pub fn width(&self) -> f64 {
        self.data.width.unwrap_or(self.node_type.default_size().0)
    }

    /// Effective height: committed resize dimension or the type default.
    pub fn height(&self) -> f64 {
        self.data.height.unwrap_or(self.node_type.default_size().1)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub label: Option<String>,
}

/// Edge represents a directed connection between two nodes' anchor points.
/// `source`/`target` are weak id references - an edge never keeps its
/// endpoints alive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub data: EdgeData,
}

impl Edge {
    /// Build the edge a connect gesture produces.  The id is derived from
    /// the endpoint pair, so reconnecting the same pair collides on purpose
    /// and the edge reducer merges instead of appending.
    pub fn connect(source: &str, target: &str, label: Option<String>) -> Self {
        Self {
            id: format!("{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            data: EdgeData { label },
        }
    }
}

/// Pan offset and zoom factor describing how canvas space maps to screen
/// space.  Owned by the rendering layer; the core only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, zoom: 1.0 }
    }
}

/// Which corner handle a resize drag was grabbed by.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandleCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandleCorner {
    pub const ALL: [HandleCorner; 4] = [
        HandleCorner::TopLeft,
        HandleCorner::TopRight,
        HandleCorner::BottomLeft,
        HandleCorner::BottomRight,
    ];
}

/// What an active drag is doing to its node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DragMode {
    Move,
    Resize(HandleCorner),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_derives_id_from_endpoints() {
        let edge = Edge::connect("n1", "n2", None);
        assert_eq!(edge.id, "n1-n2");
        assert_eq!(edge.source, "n1");
        assert_eq!(edge.target, "n2");
    }

    #[test]
    fn fresh_nodes_get_distinct_ids() {
        let a = Node::new(NodeType::Trigger, Position::default());
        let b = Node::new(NodeType::Trigger, Position::default());
        assert_ne!(a.id, b.id);
        assert!(!a.selected);
    }

    #[test]
    fn anchor_offset_is_half_the_default_box() {
        assert_eq!(NodeType::Action.anchor_offset(), (-160.0, -25.0));
    }
}
