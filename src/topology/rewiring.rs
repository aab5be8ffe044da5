use rand::Rng;
use rand::RngCore;

use crate::error::Result;
use crate::model::graph::{Graph, NodeId};

/// What a rewiring attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewiring {
    /// `node` lost its edge to `dropped` and gained one to `added`.
    Rewired {
        node: NodeId,
        dropped: NodeId,
        added: NodeId,
    },
    /// The chosen node had no edges; nothing changed.
    Isolated { node: NodeId },
    /// No node outside the chosen node's neighborhood was available; nothing changed.
    NoTarget { node: NodeId },
    EmptyGraph,
}

/// Move one random edge of a random node to a random non-neighbor.
///
/// Draws, in order: the node, the neighbor whose edge is dropped, and the new
/// endpoint, picked uniformly from every node except `node` itself and the
/// neighbors it keeps after the drop. The graph is only mutated when a new
/// endpoint exists.
pub fn rewire_random_node(graph: &mut Graph, rng: &mut dyn RngCore) -> Result<Rewiring> {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    if ids.is_empty() {
        return Ok(Rewiring::EmptyGraph);
    }
    let node = ids[rng.random_range(0..ids.len())];
    let neighbors = graph.neighbors(node).to_vec();
    if neighbors.is_empty() {
        return Ok(Rewiring::Isolated { node });
    }
    let dropped = neighbors[rng.random_range(0..neighbors.len())];

    let pool: Vec<NodeId> = ids
        .into_iter()
        .filter(|&id| id != node && (id == dropped || neighbors.binary_search(&id).is_err()))
        .collect();
    if pool.is_empty() {
        return Ok(Rewiring::NoTarget { node });
    }
    let added = pool[rng.random_range(0..pool.len())];

    graph.remove_edge(node, dropped);
    graph.add_edge(node, added)?;
    Ok(Rewiring::Rewired {
        node,
        dropped,
        added,
    })
}
