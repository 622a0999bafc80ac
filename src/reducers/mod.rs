//! Domain reducers.  Each one handles a slice of the message space; the
//! root `update.rs` delegates to them in order and stops at the first one
//! that consumes the message.
//!
//! The collection operations shared by the node and edge stores live here so
//! the two reducers cannot drift apart on id-matching semantics.

pub mod canvas;
pub mod edges;
pub mod nodes;

use std::collections::{HashMap, HashSet};

use crate::models::{Edge, Node};

/// Anything stored in an id-keyed ordered collection.
pub(crate) trait Keyed: Clone {
    fn key(&self) -> &str;
}

impl Keyed for Node {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Edge {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Last-wins lookup of a payload by id, so duplicate payload ids resolve to
/// the final occurrence.
fn by_id<T: Keyed>(payload: &[T]) -> HashMap<&str, &T> {
    payload.iter().map(|entry| (entry.key(), entry)).collect()
}

/// UPDATE: replace existing entries with their payload counterpart, matched
/// by id.  Entries only present in the payload are dropped; entries only
/// present in the state pass through untouched.  Never changes length or
/// order.
pub(crate) fn merge_by_id<T: Keyed>(state: &[T], payload: &[T]) -> Vec<T> {
    let updates = by_id(payload);
    state
        .iter()
        .map(|entry| match updates.get(entry.key()) {
            Some(updated) => (*updated).clone(),
            None => entry.clone(),
        })
        .collect()
}

/// SYNC: upsert-with-pruning.  Existing entries found in the payload are
/// merged in place, existing entries absent from the payload are dropped,
/// and payload entries new to the state are appended in payload order.  The
/// result's id set is exactly the payload's id set.
pub(crate) fn sync_by_id<T: Keyed>(state: &[T], payload: &[T]) -> Vec<T> {
    let updates = by_id(payload);
    let existing: HashSet<&str> = state.iter().map(Keyed::key).collect();

    let mut next: Vec<T> = state
        .iter()
        .filter_map(|entry| updates.get(entry.key()).map(|updated| (*updated).clone()))
        .collect();

    let mut appended: HashSet<&str> = HashSet::new();
    for entry in payload {
        if !existing.contains(entry.key()) && appended.insert(entry.key()) {
            if let Some(updated) = updates.get(entry.key()) {
                next.push((*updated).clone());
            }
        }
    }
    next
}

/// REMOVE: drop entries whose id appears in the payload.  Payload fields
/// other than the id are ignored.
pub(crate) fn remove_by_id<T: Keyed>(state: &[T], payload: &[T]) -> Vec<T> {
    let doomed: HashSet<&str> = payload.iter().map(Keyed::key).collect();
    state
        .iter()
        .filter(|entry| !doomed.contains(entry.key()))
        .cloned()
        .collect()
}
