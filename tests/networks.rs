mod common;

use common::{current_graph, initialized};
use netcell::model::generators::{complete_graph, lattice};
use netcell::model::graph::NodeAttrs;
use netcell::sim::epidemic::{SisConfig, SisModel};
use netcell::sim::growth::{GrowthConfig, GrowthModel};
use netcell::sim::rewiring::{RewiringConfig, RewiringModel};
use netcell::sim::voter::VoterModel;
use netcell::{Graph, MetricKind, SimError, StepOutcome};

#[test]
fn sis_without_infected_nodes_stays_susceptible() {
    let network = lattice(5).unwrap();
    let config = SisConfig {
        infection_prob: 1.0,
        recovery_prob: 1.0,
        ..SisConfig::default()
    };
    let mut sim = initialized(Box::new(SisModel::with_network(config, network)), 3);
    for _ in 0..20 {
        sim.update().unwrap();
        sim.observe().unwrap();
    }
    assert!(sim
        .metrics()
        .series(MetricKind::InfectedFraction)
        .all(|(_, fraction)| fraction == 0.0));
}

#[test]
fn voter_unanimous_start_stops_after_first_update() {
    let mut network = complete_graph(6).unwrap();
    for id in 0..6 {
        network.set_state(id, 0);
    }
    let mut sim = initialized(Box::new(VoterModel::with_network(network)), 11);
    let outcome = sim.update().unwrap();
    assert_eq!(outcome, StepOutcome::Converged { step: 1 });
    assert!(!outcome.should_continue());
    assert_eq!(sim.update(), Err(SimError::ConvergedStateMutation));
}

#[test]
fn growth_newcomers_bring_exactly_m_distinct_edges() {
    let config = GrowthConfig {
        growth_period: 1,
        edges_per_node: 4,
        ..GrowthConfig::default()
    };
    let mut sim = initialized(Box::new(GrowthModel::new(config)), 21);
    for step in 0..10 {
        sim.update().unwrap();
        let graph = current_graph(&mut sim);
        let newcomer = 5 + step;
        assert_eq!(graph.degree(newcomer), 4);
        let mut targets = graph.neighbors(newcomer).to_vec();
        targets.dedup();
        assert_eq!(targets.len(), 4);
        assert!(targets.iter().all(|&t| t < newcomer));
    }
}

#[test]
fn rewiring_skips_isolated_nodes() {
    let mut network = Graph::new();
    network.add_node(NodeAttrs::default());
    let config = RewiringConfig {
        rewire_period: 1,
        ..RewiringConfig::default()
    };
    let mut sim = initialized(Box::new(RewiringModel::with_network(config, network)), 2);
    sim.update().unwrap();
    let graph = current_graph(&mut sim);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}
