//! Property tests for the graph store's collection operations and the
//! coordinate mapping, run on the host target.

#![cfg(test)]

use std::collections::HashSet;

use proptest::prelude::*;

use crate::canvas::transform::{canvas_position, screen_position};
use crate::messages::GraphOp;
use crate::models::{Edge, Node, NodeType, Position, Viewport};
use crate::reducers::{edges, nodes};

/// Strategy producing a list of nodes with pairwise-distinct ids.
fn node_list_strategy(max: usize) -> impl Strategy<Value = Vec<Node>> {
    prop::collection::hash_set("[a-z]{1,6}", 0..max).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Node {
                id,
                ..Node::new(NodeType::Action, Position::default())
            })
            .collect()
    })
}

fn id_set(nodes: &[Node]) -> HashSet<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

#[test]
fn update_never_changes_length_or_id_order() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let strategy = (node_list_strategy(16), node_list_strategy(16));

    runner
        .run(&strategy, |(state, payload)| {
            let next = nodes::apply(&state, GraphOp::Update, &payload);
            assert_eq!(next.len(), state.len());
            let before: Vec<&str> = state.iter().map(|n| n.id.as_str()).collect();
            let after: Vec<&str> = next.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(before, after);
            // Idempotent: applying the same payload again changes nothing.
            assert_eq!(nodes::apply(&next, GraphOp::Update, &payload), next);
            Ok(())
        })
        .expect("property test failed");
}

#[test]
fn sync_result_id_set_equals_payload_id_set() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let strategy = (node_list_strategy(16), node_list_strategy(16));

    runner
        .run(&strategy, |(state, payload)| {
            let next = nodes::apply(&state, GraphOp::Sync, &payload);
            assert_eq!(id_set(&next), id_set(&payload));
            Ok(())
        })
        .expect("property test failed");
}

#[test]
fn removing_every_id_always_empties_the_store() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let strategy = node_list_strategy(16);

    runner
        .run(&strategy, |state| {
            let next = nodes::apply(&state, GraphOp::Remove, &state);
            assert!(next.is_empty());
            Ok(())
        })
        .expect("property test failed");
}

#[test]
fn edge_add_preserves_id_uniqueness() {
    let mut runner = proptest::test_runner::TestRunner::default();
    // Endpoint ids from a tiny alphabet so collisions are common.
    let endpoint = "[ab]{1,2}";
    let strategy = prop::collection::vec((endpoint, endpoint), 0..24);

    runner
        .run(&strategy, |pairs| {
            let mut state: Vec<Edge> = Vec::new();
            for (source, target) in &pairs {
                state = edges::apply(&state, GraphOp::Add, &[Edge::connect(source, target, None)]);
            }
            let ids: HashSet<&str> = state.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids.len(), state.len(), "duplicate edge id after ADD");
            Ok(())
        })
        .expect("property test failed");
}

#[test]
fn screen_canvas_round_trip_is_lossless_for_sane_zooms() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let strategy = (
        -5_000.0f64..5_000.0,
        -5_000.0f64..5_000.0,
        -2_000.0f64..2_000.0,
        -2_000.0f64..2_000.0,
        0.1f64..10.0,
    );

    runner
        .run(&strategy, |(sx, sy, vx, vy, zoom)| {
            let viewport = Viewport { x: vx, y: vy, zoom };
            let screen = Position::new(sx, sy);
            let back = screen_position(canvas_position(screen, &viewport), &viewport);
            assert!((back.x - screen.x).abs() < 1e-6);
            assert!((back.y - screen.y).abs() < 1e-6);
            Ok(())
        })
        .expect("property test failed");
}
