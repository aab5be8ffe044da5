use super::context::TickContext;
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::generators::erdos_renyi;
use crate::model::layout::fresh_layout;
use crate::model::{Graph, MetricKind, Parameters};
use crate::rules::chance;
use crate::rules::network::{INFECTED, SUSCEPTIBLE, sis_step};

/// Spring-layout rounds run once when the network is built.
const INITIAL_LAYOUT_ITERATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct SisConfig {
    pub nodes: usize,
    /// Erdős–Rényi connection probability.
    pub edge_prob: f64,
    pub infection_prob: f64,
    pub recovery_prob: f64,
    /// Probability that a node starts infected.
    pub init_infected: f64,
}

impl Default for SisConfig {
    fn default() -> Self {
        Self {
            nodes: 100,
            edge_prob: 0.1,
            infection_prob: 0.5,
            recovery_prob: 0.5,
            init_infected: 0.5,
        }
    }
}

config_parameters!(SisConfig {
    nodes: Size,
    edge_prob: Probability,
    infection_prob: Probability,
    recovery_prob: Probability,
    init_infected: Probability,
});

/// Susceptible-infected-susceptible epidemic on a random network.
///
/// Keeps two graphs with the same topology and layout. Each tick reads
/// states from `current`, writes them into `next`, then swaps the two.
#[derive(Debug, Default)]
pub struct SisModel {
    config: SisConfig,
    /// Fixed starting network; an Erdős–Rényi graph is drawn when absent.
    network: Option<Graph>,
    current: Option<Graph>,
    next: Option<Graph>,
}

impl SisModel {
    pub fn new(config: SisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Run on `network` with its node states as given. States are not
    /// re-seeded by `initialize`, and `nodes`, `edge_prob` and
    /// `init_infected` are fixed.
    pub fn with_network(config: SisConfig, network: Graph) -> Self {
        Self {
            config,
            network: Some(network),
            ..Self::default()
        }
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.current.as_ref()
    }
}

impl Model for SisModel {
    fn name(&self) -> &str {
        "sis"
    }

    fn parameters(&self) -> &dyn Parameters {
        &self.config
    }

    fn parameters_mut(&mut self) -> &mut dyn Parameters {
        &mut self.config
    }

    fn fixed_parameters(&self) -> &'static [&'static str] {
        match self.network {
            Some(_) => &["nodes", "edge_prob", "init_infected"],
            None => &[],
        }
    }

    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()> {
        let graph = match &self.network {
            Some(network) => network.clone(),
            None => {
                let mut graph = erdos_renyi(self.config.nodes, self.config.edge_prob, ctx.rng)?;
                fresh_layout(&mut graph, INITIAL_LAYOUT_ITERATIONS, ctx.rng);
                let ids: Vec<_> = graph.node_ids().collect();
                for id in ids {
                    let state = if chance(ctx.rng, self.config.init_infected) {
                        INFECTED
                    } else {
                        SUSCEPTIBLE
                    };
                    graph.set_state(id, state);
                }
                graph
            }
        };
        self.next = Some(graph.clone());
        self.current = Some(graph);
        Ok(())
    }

    fn view(&self) -> Option<View<'_>> {
        self.current.as_ref().map(View::Graph)
    }

    fn measure(&self) -> Vec<(MetricKind, f64)> {
        self.current
            .as_ref()
            .map(|g| vec![(MetricKind::InfectedFraction, g.state_fraction(INFECTED))])
            .unwrap_or_default()
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome> {
        let (Some(current), Some(next)) = (self.current.as_mut(), self.next.as_mut()) else {
            return Err(SimError::Uninitialized);
        };
        sis_step(
            current,
            next,
            self.config.infection_prob,
            self.config.recovery_prob,
            ctx.rng,
        );
        std::mem::swap(current, next);
        Ok(StepOutcome::Continue)
    }
}
