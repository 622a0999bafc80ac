//! Canvas gesture reducer: node placement from the context menu, node
//! removal with its incident edges, viewport updates pushed in by the
//! rendering layer, and the drag/resize state machine.
//!
//! Drag listener wiring is a side effect, so the transitions only *request*
//! it through commands: entering `Dragging` queues an install, returning to
//! `Idle` queues a teardown.  The listeners themselves live in
//! `components::drag_controller`.

use crate::canvas::transform;
use crate::constants::{MIN_NODE_HEIGHT, MIN_NODE_WIDTH};
use crate::messages::{Command, GraphOp, Message};
use crate::models::{DragMode, Edge, HandleCorner, Node, Position};
use crate::reducers::{edges, nodes};
use crate::state::{AppState, DragContext};

/// One step of a corner resize, in canvas space.  `shift_x`/`shift_y` move
/// the node's top-left anchor when a top/left handle is dragged; both stay
/// zero when the clamp at the minimum size absorbs the motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeStep {
    pub width: f64,
    pub height: f64,
    pub shift_x: f64,
    pub shift_y: f64,
}

/// Pure resize math for a single pointer-move delta.
pub fn resize_step(corner: HandleCorner, width: f64, height: f64, dx: f64, dy: f64) -> ResizeStep {
    let grow_right = matches!(corner, HandleCorner::TopRight | HandleCorner::BottomRight);
    let grow_down = matches!(corner, HandleCorner::BottomLeft | HandleCorner::BottomRight);

    let new_width = if grow_right {
        (width + dx).max(MIN_NODE_WIDTH)
    } else {
        (width - dx).max(MIN_NODE_WIDTH)
    };
    let new_height = if grow_down {
        (height + dy).max(MIN_NODE_HEIGHT)
    } else {
        (height - dy).max(MIN_NODE_HEIGHT)
    };

    ResizeStep {
        width: new_width,
        height: new_height,
        // Left/top handles drag the anchor by exactly the amount the box
        // shrank, so the opposite edge stays pinned.
        shift_x: if grow_right { 0.0 } else { width - new_width },
        shift_y: if grow_down { 0.0 } else { height - new_height },
    }
}

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::AddNodeAtPointer { node_type, client_x, client_y, label } => {
            let screen = Position::new(*client_x, *client_y);
            let position = transform::place_at_pointer(*node_type, screen, &state.viewport);
            let mut node = Node::new(*node_type, position);
            node.data.label = label.clone();
            node.selected = true; // ADD deselects the rest, making this the sole selection
            crate::console_log!(
                "Placing {:?} node {} at ({}, {})",
                node.node_type,
                node.id,
                position.x,
                position.y
            );
            state.nodes = nodes::apply(&state.nodes, GraphOp::Add, &[node]);
            cmds.push(Command::Render);
            true
        }
        Message::RemoveNode { node_id } => {
            let doomed: Vec<Node> = state
                .nodes
                .iter()
                .filter(|n| &n.id == node_id)
                .cloned()
                .collect();
            if doomed.is_empty() {
                return true; // unknown id: no-op, not an error
            }
            state.nodes = nodes::apply(&state.nodes, GraphOp::Remove, &doomed);

            // Incident edges go too - as an explicit removal, never as a
            // hidden side effect of the store itself.
            let incident: Vec<Edge> = state
                .edges
                .iter()
                .filter(|e| &e.source == node_id || &e.target == node_id)
                .cloned()
                .collect();
            if !incident.is_empty() {
                state.edges = edges::apply(&state.edges, GraphOp::Remove, &incident);
            }
            cmds.push(Command::Render);
            true
        }
        Message::SetViewport { x, y, zoom } => {
            state.viewport.x = *x;
            state.viewport.y = *y;
            state.viewport.zoom = *zoom;
            true
        }
        Message::StartDrag { node_id, mode } => {
            // A drag on a node that vanished between render and mousedown is
            // simply ignored.
            if let Some(node) = state.nodes.iter().find(|n| &n.id == node_id) {
                state.drag = Some(DragContext {
                    node_id: node_id.clone(),
                    mode: *mode,
                    origin: node.position,
                    width: node.width(),
                    height: node.height(),
                });
                cmds.push(Command::update_ui(
                    crate::components::drag_controller::enter_dragging,
                ));
            }
            true
        }
        Message::UpdateDrag { movement_x, movement_y } => {
            // Moves can race the teardown after mouseup; a stray event after
            // the drag ended is a no-op.
            let Some(drag) = state.drag.clone() else {
                return true;
            };
            let zoom = transform::effective_zoom(state.viewport.zoom);
            let dx = movement_x / zoom;
            let dy = movement_y / zoom;

            let Some(node) = state.nodes.iter().find(|n| n.id == drag.node_id) else {
                // Entity removed mid-drag: the merge rule makes any further
                // update a no-op, nothing to special-case.
                return true;
            };

            match drag.mode {
                DragMode::Move => {
                    let mut moved = node.clone();
                    moved.position.x += dx;
                    moved.position.y += dy;
                    state.nodes = nodes::apply(&state.nodes, GraphOp::Update, &[moved]);
                }
                DragMode::Resize(corner) => {
                    let step = resize_step(corner, drag.width, drag.height, dx, dy);
                    if step.shift_x != 0.0 || step.shift_y != 0.0 {
                        let mut shifted = node.clone();
                        shifted.position.x += step.shift_x;
                        shifted.position.y += step.shift_y;
                        state.nodes = nodes::apply(&state.nodes, GraphOp::Update, &[shifted]);
                    }
                    // Dimensions stay ephemeral until the drag completes.
                    if let Some(active) = state.drag.as_mut() {
                        active.width = step.width;
                        active.height = step.height;
                    }
                }
            }
            cmds.push(Command::Render);
            true
        }
        Message::StopDrag => {
            if let Some(drag) = state.drag.take() {
                if let DragMode::Resize(_) = drag.mode {
                    // Commit the final dimensions into the node's data.
                    if let Some(node) = state.nodes.iter().find(|n| n.id == drag.node_id) {
                        let mut resized = node.clone();
                        resized.data.width = Some(drag.width);
                        resized.data.height = Some(drag.height);
                        state.nodes = nodes::apply(&state.nodes, GraphOp::Update, &[resized]);
                    }
                }
                cmds.push(Command::update_ui(
                    crate::components::drag_controller::exit_dragging,
                ));
                cmds.push(Command::Render);
            }
            true
        }
        Message::CancelDrag => {
            if let Some(drag) = state.drag.take() {
                // Escape restores the pre-drag position; dimensions were
                // never committed, so there is nothing to roll back there.
                if let Some(node) = state.nodes.iter().find(|n| n.id == drag.node_id) {
                    let mut restored = node.clone();
                    restored.position = drag.origin;
                    state.nodes = nodes::apply(&state.nodes, GraphOp::Update, &[restored]);
                }
                cmds.push(Command::update_ui(
                    crate::components::drag_controller::exit_dragging,
                ));
                cmds.push(Command::Render);
            }
            true
        }
        _ => false,
    }
}
