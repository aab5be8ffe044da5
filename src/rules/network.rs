use rand::Rng;
use rand::RngCore;

use super::chance;
use crate::model::graph::{Graph, NodeId};

pub const SUSCEPTIBLE: u8 = 0;
pub const INFECTED: u8 = 1;

/// SIS transition for one node.
///
/// A susceptible node draws once per infected neighbor and every draw
/// overwrites the pending next state, so the last draw decides. A node with
/// no infected neighbors stays susceptible. An infected node recovers with
/// probability `p_r`.
pub fn sis(
    current: u8,
    infected_neighbors: usize,
    p_i: f64,
    p_r: f64,
    rng: &mut dyn RngCore,
) -> u8 {
    if current == SUSCEPTIBLE {
        let mut next = SUSCEPTIBLE;
        for _ in 0..infected_neighbors {
            next = if chance(rng, p_i) { INFECTED } else { SUSCEPTIBLE };
        }
        next
    } else if chance(rng, p_r) {
        SUSCEPTIBLE
    } else {
        INFECTED
    }
}

/// One synchronous SIS pass: reads `current`, writes states into `next`.
///
/// `next` must have the same nodes as `current`; the caller swaps the two
/// once the pass is done.
pub fn sis_step(current: &Graph, next: &mut Graph, p_i: f64, p_r: f64, rng: &mut dyn RngCore) {
    for (id, attrs) in current.nodes() {
        let infected = current.count_neighbors_in_state(id, INFECTED);
        next.set_state(id, sis(attrs.state, infected, p_i, p_r, rng));
    }
}

/// A listener/speaker pair chosen by [`voter_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoterExchange {
    pub listener: NodeId,
    pub speaker: NodeId,
}

/// Pick a random listener and one of its neighbors at random, and copy the
/// speaker's state onto the listener.
///
/// Returns `None` without touching the graph when the graph is empty or the
/// listener has no neighbors.
pub fn voter_step(graph: &mut Graph, rng: &mut dyn RngCore) -> Option<VoterExchange> {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    if ids.is_empty() {
        return None;
    }
    let listener = ids[rng.random_range(0..ids.len())];
    let neighbors = graph.neighbors(listener);
    if neighbors.is_empty() {
        return None;
    }
    let speaker = neighbors[rng.random_range(0..neighbors.len())];
    let state = graph.state(speaker)?;
    graph.set_state(listener, state);
    Some(VoterExchange { listener, speaker })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generators::complete_graph;
    use crate::model::graph::NodeAttrs;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn susceptible_without_infected_neighbors_stays_susceptible() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..100 {
            assert_eq!(sis(SUSCEPTIBLE, 0, 1.0, 1.0, &mut rng), SUSCEPTIBLE);
        }
    }

    #[test]
    fn certain_draws_decide_infection() {
        let mut rng = SmallRng::seed_from_u64(5);
        assert_eq!(sis(SUSCEPTIBLE, 3, 1.0, 0.0, &mut rng), INFECTED);
        assert_eq!(sis(SUSCEPTIBLE, 3, 0.0, 0.0, &mut rng), SUSCEPTIBLE);
    }

    #[test]
    fn last_draw_decides_with_several_infected_neighbors() {
        // Two infected neighbors at p_i = 0.5: infected half the time,
        // not 1 - 0.5^2 as it would be if any success stuck.
        let mut rng = SmallRng::seed_from_u64(12);
        let trials = 100_000;
        let infected = (0..trials)
            .filter(|_| sis(SUSCEPTIBLE, 2, 0.5, 0.0, &mut rng) == INFECTED)
            .count();
        let share = infected as f64 / trials as f64;
        assert!((share - 0.5).abs() < 0.01, "infected share {share}");
    }

    #[test]
    fn recovery_follows_p_r() {
        let mut rng = SmallRng::seed_from_u64(5);
        assert_eq!(sis(INFECTED, 0, 0.0, 1.0, &mut rng), SUSCEPTIBLE);
        assert_eq!(sis(INFECTED, 4, 1.0, 0.0, &mut rng), INFECTED);
    }

    #[test]
    fn sis_step_reads_only_the_current_graph() {
        // Path 0 - 1 - 2 with only node 0 infected and certain infection,
        // no recovery. Node 2 must stay susceptible: node 1 only becomes
        // infected in the next buffer.
        let mut current = Graph::new();
        for _ in 0..3 {
            current.add_node(NodeAttrs::default());
        }
        current.add_edge(0, 1).unwrap();
        current.add_edge(1, 2).unwrap();
        current.set_state(0, INFECTED);
        let mut next = current.clone();

        let mut rng = SmallRng::seed_from_u64(9);
        sis_step(&current, &mut next, 1.0, 0.0, &mut rng);
        assert_eq!(next.state(0), Some(INFECTED));
        assert_eq!(next.state(1), Some(INFECTED));
        assert_eq!(next.state(2), Some(SUSCEPTIBLE));
        assert_eq!(current.state(1), Some(SUSCEPTIBLE));
    }

    #[test]
    fn voter_copies_speaker_state() {
        let mut g = complete_graph(2).unwrap();
        g.set_state(0, 1);
        let mut rng = SmallRng::seed_from_u64(2);
        let exchange = voter_step(&mut g, &mut rng).unwrap();
        assert_ne!(exchange.listener, exchange.speaker);
        assert!(g.has_edge(exchange.listener, exchange.speaker));
        assert!(g.is_homogeneous());
    }

    #[test]
    fn isolated_listener_is_a_noop() {
        let mut g = Graph::new();
        g.add_node(NodeAttrs { state: 1, ..NodeAttrs::default() });
        let mut rng = SmallRng::seed_from_u64(2);
        assert_eq!(voter_step(&mut g, &mut rng), None);
        assert_eq!(g.state(0), Some(1));
        assert_eq!(voter_step(&mut Graph::new(), &mut rng), None);
    }
}
