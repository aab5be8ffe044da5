use rand::Rng;
use rand::RngCore;

use super::graph::{Graph, NodeAttrs, NodeId};
use crate::error::{Result, SimError};

/// Zachary's karate club: 34 members, 78 friendships (0-indexed).
#[rustfmt::skip]
const KARATE_EDGES: [(NodeId, NodeId); 78] = [
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8),
    (0, 10), (0, 11), (0, 12), (0, 13), (0, 17), (0, 19), (0, 21), (0, 31),
    (1, 2), (1, 3), (1, 7), (1, 13), (1, 17), (1, 19), (1, 21), (1, 30),
    (2, 3), (2, 7), (2, 8), (2, 9), (2, 13), (2, 27), (2, 28), (2, 32),
    (3, 7), (3, 12), (3, 13),
    (4, 6), (4, 10),
    (5, 6), (5, 10), (5, 16),
    (6, 16),
    (8, 30), (8, 32), (8, 33),
    (9, 33),
    (13, 33),
    (14, 32), (14, 33),
    (15, 32), (15, 33),
    (18, 32), (18, 33),
    (19, 33),
    (20, 32), (20, 33),
    (22, 32), (22, 33),
    (23, 25), (23, 27), (23, 29), (23, 32), (23, 33),
    (24, 25), (24, 27), (24, 31),
    (25, 31),
    (26, 29), (26, 33),
    (27, 33),
    (28, 31), (28, 33),
    (29, 32), (29, 33),
    (30, 32), (30, 33),
    (31, 32), (31, 33),
    (32, 33),
];

const KARATE_MEMBERS: usize = 34;

fn with_nodes(n: usize) -> Graph {
    let mut graph = Graph::new();
    for _ in 0..n {
        graph.add_node(NodeAttrs::default());
    }
    graph
}

/// Every pair of the `n` nodes connected.
pub fn complete_graph(n: usize) -> Result<Graph> {
    let mut graph = with_nodes(n);
    for a in 0..n as NodeId {
        for b in (a + 1)..n as NodeId {
            graph.add_edge(a, b)?;
        }
    }
    Ok(graph)
}

/// G(n, p): each of the `n(n-1)/2` possible edges present independently with probability `p`.
pub fn erdos_renyi(n: usize, p: f64, rng: &mut dyn RngCore) -> Result<Graph> {
    let mut graph = with_nodes(n);
    for a in 0..n as NodeId {
        for b in (a + 1)..n as NodeId {
            if rng.random_range(0.0..1.0) < p {
                graph.add_edge(a, b)?;
            }
        }
    }
    Ok(graph)
}

/// Non-periodic `side × side` square lattice; node `(row, col)` has id `row * side + col`.
pub fn lattice(side: usize) -> Result<Graph> {
    let nodes = side.checked_mul(side).ok_or(SimError::InvalidDimensions {
        width: side,
        height: side,
    })?;
    let mut graph = with_nodes(nodes);
    let id = |row: usize, col: usize| (row * side + col) as NodeId;
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                graph.add_edge(id(row, col), id(row, col + 1))?;
            }
            if row + 1 < side {
                graph.add_edge(id(row, col), id(row + 1, col))?;
            }
        }
    }
    Ok(graph)
}

pub fn karate_club() -> Result<Graph> {
    let mut graph = with_nodes(KARATE_MEMBERS);
    for &(a, b) in &KARATE_EDGES {
        graph.add_edge(a, b)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn complete_graph_has_all_pairs() {
        let g = complete_graph(5).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 10);
        assert!(g.node_ids().all(|id| g.degree(id) == 4));
    }

    #[test]
    fn erdos_renyi_extremes() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(erdos_renyi(20, 0.0, &mut rng).unwrap().edge_count(), 0);
        assert_eq!(erdos_renyi(20, 1.0, &mut rng).unwrap().edge_count(), 190);
    }

    #[test]
    fn lattice_degrees() {
        let g = lattice(6).unwrap();
        assert_eq!(g.node_count(), 36);
        // 2 * side * (side - 1)
        assert_eq!(g.edge_count(), 60);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.degree(1), 3);
        assert_eq!(g.degree(7), 4);
    }

    #[test]
    fn lattice_side_overflow_rejected() {
        assert!(matches!(
            lattice(1 << 40),
            Err(SimError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn karate_club_shape() {
        let g = karate_club().unwrap();
        assert_eq!(g.node_count(), 34);
        assert_eq!(g.edge_count(), 78);
        assert_eq!(g.degree(0), 16);
        assert_eq!(g.degree(33), 17);
        assert!(g.node_ids().all(|id| g.degree(id) > 0));
    }
}
