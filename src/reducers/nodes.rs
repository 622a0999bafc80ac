//! Node-collection reducer.
//!
//! All mutations of the node list flow through [`apply`]; nothing else in
//! the crate touches `state.nodes` directly.  Every operation rebuilds the
//! collection, so a snapshot handed to the render sink stays stable.

use crate::messages::{Command, GraphOp, Message};
use crate::models::Node;
use crate::state::AppState;

/// Apply one structural operation to the node list, returning the new list.
pub fn apply(state: &[Node], op: GraphOp, payload: &[Node]) -> Vec<Node> {
    match op {
        GraphOp::Add => add(state, payload),
        GraphOp::Update => super::merge_by_id(state, payload),
        GraphOp::Replace => payload.to_vec(),
        GraphOp::Sync => super::sync_by_id(state, payload),
        GraphOp::Remove => super::remove_by_id(state, payload),
    }
}

/// ADD: clear the `selected` flag on every pre-existing node, then append
/// the payload.  A payload node carrying `selected: true` therefore becomes
/// the sole selected node.
fn add(state: &[Node], payload: &[Node]) -> Vec<Node> {
    let mut next: Vec<Node> = state
        .iter()
        .cloned()
        .map(|mut node| {
            node.selected = false;
            node
        })
        .collect();
    next.extend(payload.iter().cloned());
    next
}

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::Nodes { op, payload } => {
            state.nodes = apply(&state.nodes, *op, payload);
            cmds.push(Command::Render);
            true
        }
        Message::SelectNode { node_id } => {
            let payload: Vec<Node> = state
                .nodes
                .iter()
                .cloned()
                .map(|mut node| {
                    node.selected = node_id.as_deref() == Some(node.id.as_str());
                    node
                })
                .collect();
            state.nodes = apply(&state.nodes, GraphOp::Update, &payload);
            cmds.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeType, Position};

    fn node(id: &str) -> Node {
        Node {
            id: id.to_string(),
            ..Node::new(NodeType::Action, Position::default())
        }
    }

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn add_appends_and_deselects_existing() {
        let mut existing = node("a");
        existing.selected = true;
        let mut incoming = node("b");
        incoming.selected = true;

        let next = apply(&[existing], GraphOp::Add, &[incoming]);
        assert_eq!(ids(&next), vec!["a", "b"]);
        assert!(!next[0].selected, "previous selection cleared");
        assert!(next[1].selected, "payload node is the sole selection");
    }

    #[test]
    fn update_merges_matched_and_drops_unmatched() {
        let state = vec![node("a"), node("b")];
        let mut moved = node("b");
        moved.position = Position::new(9.0, 9.0);
        let ghost = node("zzz"); // no match -> silently dropped

        let next = apply(&state, GraphOp::Update, &[moved, ghost]);
        assert_eq!(ids(&next), vec!["a", "b"]);
        assert_eq!(next[1].position, Position::new(9.0, 9.0));
    }

    #[test]
    fn update_with_duplicate_payload_ids_last_wins() {
        let state = vec![node("a")];
        let mut first = node("a");
        first.position = Position::new(1.0, 1.0);
        let mut second = node("a");
        second.position = Position::new(2.0, 2.0);

        let next = apply(&state, GraphOp::Update, &[first, second]);
        assert_eq!(next[0].position, Position::new(2.0, 2.0));
    }

    #[test]
    fn replace_is_wholesale() {
        let state = vec![node("a"), node("b")];
        let next = apply(&state, GraphOp::Replace, &[node("c")]);
        assert_eq!(ids(&next), vec!["c"]);
    }

    #[test]
    fn sync_result_ids_equal_payload_ids() {
        let state = vec![node("a"), node("b"), node("c")];
        let mut kept = node("b");
        kept.position = Position::new(4.0, 4.0);
        let fresh = node("d");

        let next = apply(&state, GraphOp::Sync, &[kept, fresh]);
        assert_eq!(ids(&next), vec!["b", "d"]);
        assert_eq!(next[0].position, Position::new(4.0, 4.0));
    }

    #[test]
    fn sync_with_empty_payload_deletes_everything() {
        let state = vec![node("a"), node("b")];
        assert!(apply(&state, GraphOp::Sync, &[]).is_empty());
    }

    #[test]
    fn remove_filters_by_id_only() {
        let state = vec![node("a"), node("b")];
        let mut marker = node("a");
        marker.position = Position::new(123.0, 456.0); // ignored
        let next = apply(&state, GraphOp::Remove, &[marker]);
        assert_eq!(ids(&next), vec!["b"]);
    }

    #[test]
    fn remove_everything_yields_empty_list() {
        let state = vec![node("a"), node("b"), node("c")];
        let next = apply(&state, GraphOp::Remove, &state.clone());
        assert!(next.is_empty());
    }

    #[test]
    fn empty_payload_is_noop_for_add_update_remove() {
        let state = vec![node("a")];
        assert_eq!(ids(&apply(&state, GraphOp::Add, &[])), vec!["a"]);
        assert_eq!(ids(&apply(&state, GraphOp::Update, &[])), vec!["a"]);
        assert_eq!(ids(&apply(&state, GraphOp::Remove, &[])), vec!["a"]);
    }

    #[test]
    fn select_node_makes_a_sole_selection() {
        let mut app = AppState::new();
        app.nodes = vec![node("a"), node("b")];
        app.nodes[0].selected = true;

        let mut cmds = Vec::new();
        let consumed = update(
            &mut app,
            &Message::SelectNode { node_id: Some("b".to_string()) },
            &mut cmds,
        );
        assert!(consumed);
        assert!(!app.nodes[0].selected);
        assert!(app.nodes[1].selected);
    }
}
