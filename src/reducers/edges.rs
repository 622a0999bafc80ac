//! Edge-collection reducer, mirroring the node reducer's id-matching rules.
//!
//! The one domain difference is ADD: edge ids are derived from the endpoint
//! pair, so a repeated connect gesture produces a colliding id.  ADD merges
//! on collision instead of appending, which keeps the id-uniqueness
//! invariant without asking every caller to pre-check.

use crate::messages::{Command, GraphOp, Message};
use crate::models::Edge;
use crate::state::AppState;

/// Apply one structural operation to the edge list, returning the new list.
pub fn apply(state: &[Edge], op: GraphOp, payload: &[Edge]) -> Vec<Edge> {
    match op {
        GraphOp::Add => add(state, payload),
        GraphOp::Update => super::merge_by_id(state, payload),
        GraphOp::Replace => payload.to_vec(),
        GraphOp::Sync => super::sync_by_id(state, payload),
        GraphOp::Remove => super::remove_by_id(state, payload),
    }
}

/// ADD with collision merging: a payload edge whose id already exists
/// replaces the existing entry in place; everything else is appended.
fn add(state: &[Edge], payload: &[Edge]) -> Vec<Edge> {
    let mut next = state.to_vec();
    for edge in payload {
        match next.iter_mut().find(|existing| existing.id == edge.id) {
            Some(existing) => *existing = edge.clone(),
            None => next.push(edge.clone()),
        }
    }
    next
}

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::Edges { op, payload } => {
            state.edges = apply(&state.edges, *op, payload);
            cmds.push(Command::Render);
            true
        }
        Message::ConnectNodes { source, target, label } => {
            let edge = Edge::connect(source, target, label.clone());
            if state.edges.iter().any(|existing| existing.id == edge.id) {
                crate::console_log!("Connect gesture on already-connected pair {}", edge.id);
                crate::toast::info("These nodes are already connected");
            }
            state.edges = add(&state.edges, &[edge]);
            cmds.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str) -> Edge {
        Edge::connect(source, target, None)
    }

    fn ids(edges: &[Edge]) -> Vec<&str> {
        edges.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn add_appends_new_pairs() {
        let state = vec![edge("a", "b")];
        let next = apply(&state, GraphOp::Add, &[edge("b", "c")]);
        assert_eq!(ids(&next), vec!["a-b", "b-c"]);
    }

    #[test]
    fn add_merges_on_id_collision_instead_of_duplicating() {
        let state = vec![edge("n1", "n2")];
        let relabelled = Edge::connect("n1", "n2", Some("retry".to_string()));

        let next = apply(&state, GraphOp::Add, &[relabelled]);
        assert_eq!(next.len(), 1, "no duplicate-id entry");
        assert_eq!(next[0].data.label.as_deref(), Some("retry"));
    }

    #[test]
    fn connect_gesture_is_idempotent_on_the_same_pair() {
        let mut app = AppState::new();
        let mut cmds = Vec::new();
        let connect = Message::ConnectNodes {
            source: "n1".to_string(),
            target: "n2".to_string(),
            label: None,
        };

        assert!(update(&mut app, &connect, &mut cmds));
        assert!(update(&mut app, &connect, &mut cmds));
        assert_eq!(ids(&app.edges), vec!["n1-n2"]);
    }

    #[test]
    fn sync_prunes_edges_absent_from_payload() {
        let state = vec![edge("a", "b"), edge("b", "c")];
        let next = apply(&state, GraphOp::Sync, &[edge("b", "c"), edge("c", "d")]);
        assert_eq!(ids(&next), vec!["b-c", "c-d"]);
    }

    #[test]
    fn removing_an_edge_leaves_its_endpoints_alone() {
        let mut app = AppState::new();
        app.edges = vec![edge("a", "b")];
        app.nodes = vec![
            crate::models::Node::new(crate::models::NodeType::Trigger, Default::default()),
        ];

        let mut cmds = Vec::new();
        update(
            &mut app,
            &Message::Edges { op: GraphOp::Remove, payload: vec![edge("a", "b")] },
            &mut cmds,
        );
        assert!(app.edges.is_empty());
        assert_eq!(app.nodes.len(), 1, "nodes are never destroyed by edge removal");
    }
}
