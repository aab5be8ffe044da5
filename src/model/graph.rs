use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::id::IdGenerator;

pub type NodeId = u64;

/// A 2D layout coordinate.
pub type Position = (f64, f64);

/// Per-node attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeAttrs {
    pub state: u8,
    pub position: Position,
}

/// Undirected simple graph with per-node state and layout position.
///
/// Neighbor lists are kept sorted and BTreeMaps give deterministic
/// iteration, so a seeded RNG reproduces the same run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    nodes: BTreeMap<NodeId, NodeAttrs>,
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
    #[serde(skip)]
    id_gen: IdGenerator,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the next monotonic id.
    pub fn add_node(&mut self, attrs: NodeAttrs) -> NodeId {
        let id = self.id_gen.next_id();
        self.nodes.insert(id, attrs);
        self.adjacency.insert(id, Vec::new());
        id
    }

    /// The id the next [`add_node`](Self::add_node) call will allocate.
    pub fn next_node_id(&self) -> NodeId {
        self.id_gen.peek()
    }

    /// Add an undirected edge. Returns `false` if it already existed.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        if a == b || !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return Err(SimError::InvalidEdge { a, b });
        }
        let a_neighbors = self.adjacency.entry(a).or_default();
        let Err(pos) = a_neighbors.binary_search(&b) else {
            return Ok(false);
        };
        a_neighbors.insert(pos, b);

        let b_neighbors = self.adjacency.entry(b).or_default();
        if let Err(pos) = b_neighbors.binary_search(&a) {
            b_neighbors.insert(pos, a);
        }
        Ok(true)
    }

    /// Remove an undirected edge. Returns `false` if it did not exist.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        let removed = match self.adjacency.get_mut(&a) {
            Some(list) => match list.binary_search(&b) {
                Ok(pos) => {
                    list.remove(pos);
                    true
                }
                Err(_) => false,
            },
            None => false,
        };
        if removed {
            if let Some(list) = self.adjacency.get_mut(&b) {
                if let Ok(pos) = list.binary_search(&a) {
                    list.remove(pos);
                }
            }
        }
        removed
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.binary_search(&b).is_ok())
    }

    /// Sorted neighbors of a node; empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn mean_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / self.nodes.len() as f64
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeAttrs)> {
        self.nodes.iter().map(|(&id, attrs)| (id, attrs))
    }

    /// Each edge once, as `(smaller, larger)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(&a, neighbors)| {
            neighbors.iter().filter(move |&&b| a < b).map(move |&b| (a, b))
        })
    }

    pub fn attrs(&self, id: NodeId) -> Option<&NodeAttrs> {
        self.nodes.get(&id)
    }

    pub fn state(&self, id: NodeId) -> Option<u8> {
        self.nodes.get(&id).map(|a| a.state)
    }

    pub fn set_state(&mut self, id: NodeId, state: u8) {
        if let Some(attrs) = self.nodes.get_mut(&id) {
            attrs.state = state;
        }
    }

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.nodes.get(&id).map(|a| a.position)
    }

    pub fn set_position(&mut self, id: NodeId, position: Position) {
        if let Some(attrs) = self.nodes.get_mut(&id) {
            attrs.position = position;
        }
    }

    /// How many neighbors of `id` are in `state`.
    pub fn count_neighbors_in_state(&self, id: NodeId, state: u8) -> usize {
        self.neighbors(id)
            .iter()
            .filter(|&&n| self.state(n) == Some(state))
            .count()
    }

    /// Fraction of nodes in `state`.
    pub fn state_fraction(&self, state: u8) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        let matching = self.nodes.values().filter(|a| a.state == state).count();
        matching as f64 / self.nodes.len() as f64
    }

    /// True when every node holds the same state (vacuously true when empty).
    pub fn is_homogeneous(&self) -> bool {
        let mut states = self.nodes.values().map(|a| a.state);
        match states.next() {
            Some(first) => states.all(|s| s == first),
            None => true,
        }
    }
}
