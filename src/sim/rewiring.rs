use super::context::TickContext;
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::generators::lattice;
use crate::model::layout::{fresh_layout, spring_layout};
use crate::model::{Graph, MetricKind, Parameters};
use crate::topology::{Rewiring, rewire_random_node};

const INITIAL_LAYOUT_ITERATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct RewiringConfig {
    /// Side of the square lattice the network starts as.
    pub side: usize,
    /// One edge is rewired every `rewire_period` ticks.
    pub rewire_period: usize,
    pub layout_iterations: usize,
}

impl Default for RewiringConfig {
    fn default() -> Self {
        Self {
            side: 6,
            rewire_period: 20,
            layout_iterations: 5,
        }
    }
}

config_parameters!(RewiringConfig {
    side: Size,
    rewire_period: Size,
    layout_iterations: Count,
});

/// Rumour-style network drift: a lattice whose edges are slowly moved to
/// random non-neighbors.
#[derive(Debug, Default)]
pub struct RewiringModel {
    config: RewiringConfig,
    network: Option<Graph>,
    graph: Option<Graph>,
}

impl RewiringModel {
    pub fn new(config: RewiringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start every run from `network` and its existing layout. `side` is then
    /// fixed.
    pub fn with_network(config: RewiringConfig, network: Graph) -> Self {
        Self {
            config,
            network: Some(network),
            graph: None,
        }
    }
}

impl Model for RewiringModel {
    fn name(&self) -> &str {
        "rewiring"
    }

    fn parameters(&self) -> &dyn Parameters {
        &self.config
    }

    fn parameters_mut(&mut self) -> &mut dyn Parameters {
        &mut self.config
    }

    fn fixed_parameters(&self) -> &'static [&'static str] {
        match self.network {
            Some(_) => &["side"],
            None => &[],
        }
    }

    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()> {
        let graph = match &self.network {
            Some(network) => network.clone(),
            None => {
                let mut graph = lattice(self.config.side)?;
                fresh_layout(&mut graph, INITIAL_LAYOUT_ITERATIONS, ctx.rng);
                graph
            }
        };
        self.graph = Some(graph);
        Ok(())
    }

    fn view(&self) -> Option<View<'_>> {
        self.graph.as_ref().map(View::Graph)
    }

    fn measure(&self) -> Vec<(MetricKind, f64)> {
        let Some(graph) = &self.graph else {
            return Vec::new();
        };
        vec![
            (MetricKind::EdgeCount, graph.edge_count() as f64),
            (MetricKind::MeanDegree, graph.mean_degree()),
        ]
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome> {
        let graph = self.graph.as_mut().ok_or(SimError::Uninitialized)?;
        if ctx.tick % self.config.rewire_period as u64 == 0 {
            match rewire_random_node(graph, ctx.rng)? {
                Rewiring::Rewired {
                    node,
                    dropped,
                    added,
                } => tracing::debug!(tick = ctx.tick, node, dropped, added, "edge rewired"),
                skipped => tracing::debug!(tick = ctx.tick, ?skipped, "rewiring skipped"),
            }
        }
        spring_layout(graph, self.config.layout_iterations);
        Ok(StepOutcome::Continue)
    }
}
