use rand::Rng;
use rand::RngCore;

use crate::error::Result;
use crate::model::graph::{Graph, NodeAttrs, NodeId};

/// Outcome of one preferential-attachment growth event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub newcomer: NodeId,
    /// Distinct existing nodes the newcomer was linked to, in selection order.
    pub targets: Vec<NodeId>,
}

/// Pick an index into `pool` with probability proportional to each node's degree.
///
/// Degree-zero nodes are never picked unless every candidate has degree zero,
/// in which case the pick is uniform. Returns `None` for an empty pool.
pub fn preferential_select(graph: &Graph, pool: &[NodeId], rng: &mut dyn RngCore) -> Option<usize> {
    if pool.is_empty() {
        return None;
    }
    let total: usize = pool.iter().map(|&id| graph.degree(id)).sum();
    if total == 0 {
        return Some(rng.random_range(0..pool.len()));
    }
    let roll = rng.random_range(0..total);
    let mut cumulative = 0;
    for (i, &id) in pool.iter().enumerate() {
        cumulative += graph.degree(id);
        if roll < cumulative {
            return Some(i);
        }
    }
    None
}

/// Add a node (id `max + 1`, placed at the origin) linked to `m` distinct
/// existing nodes chosen by degree-weighted sampling without replacement.
///
/// Each chosen node leaves the candidate pool before the next draw. With
/// fewer than `m` existing nodes the newcomer links to all of them.
pub fn attach_newcomer(graph: &mut Graph, m: usize, rng: &mut dyn RngCore) -> Result<Attachment> {
    let mut pool: Vec<NodeId> = graph.node_ids().collect();
    let mut targets = Vec::with_capacity(m.min(pool.len()));
    while targets.len() < m {
        let Some(i) = preferential_select(graph, &pool, rng) else {
            break;
        };
        targets.push(pool.remove(i));
    }
    if targets.len() < m {
        tracing::warn!(
            wanted = m,
            available = targets.len(),
            "not enough nodes for preferential attachment"
        );
    }

    let newcomer = graph.add_node(NodeAttrs {
        state: 0,
        position: (0.0, 0.0),
    });
    for &target in &targets {
        graph.add_edge(newcomer, target)?;
    }
    Ok(Attachment { newcomer, targets })
}
