use super::context::TickContext;
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::generators::complete_graph;
use crate::model::layout::{fresh_layout, spring_layout};
use crate::model::{Graph, MetricKind, Parameters};
use crate::topology::attach_newcomer;

const INITIAL_LAYOUT_ITERATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    /// Size of the seed complete graph.
    pub initial_nodes: usize,
    /// Edges each newcomer brings.
    pub edges_per_node: usize,
    /// A newcomer joins every `growth_period` ticks.
    pub growth_period: usize,
    /// Spring-layout rounds per tick.
    pub layout_iterations: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            initial_nodes: 5,
            edges_per_node: 5,
            growth_period: 20,
            layout_iterations: 5,
        }
    }
}

config_parameters!(GrowthConfig {
    initial_nodes: Size,
    edges_per_node: Count,
    growth_period: Size,
    layout_iterations: Count,
});

/// Barabási–Albert style growth by preferential attachment.
#[derive(Debug, Default)]
pub struct GrowthModel {
    config: GrowthConfig,
    graph: Option<Graph>,
}

impl GrowthModel {
    pub fn new(config: GrowthConfig) -> Self {
        Self {
            config,
            graph: None,
        }
    }
}

impl Model for GrowthModel {
    fn name(&self) -> &str {
        "preferential_attachment"
    }

    fn parameters(&self) -> &dyn Parameters {
        &self.config
    }

    fn parameters_mut(&mut self) -> &mut dyn Parameters {
        &mut self.config
    }

    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()> {
        let mut graph = complete_graph(self.config.initial_nodes)?;
        fresh_layout(&mut graph, INITIAL_LAYOUT_ITERATIONS, ctx.rng);
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
            (MetricKind::NodeCount, graph.node_count() as f64),
            (MetricKind::EdgeCount, graph.edge_count() as f64),
            (MetricKind::MeanDegree, graph.mean_degree()),
        ]
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome> {
        let graph = self.graph.as_mut().ok_or(SimError::Uninitialized)?;
        if ctx.tick % self.config.growth_period as u64 == 0 {
            let attachment = attach_newcomer(graph, self.config.edges_per_node, ctx.rng)?;
            tracing::debug!(
                tick = ctx.tick,
                newcomer = attachment.newcomer,
                targets = ?attachment.targets,
                "network grew"
            );
        }
        spring_layout(graph, self.config.layout_iterations);
        Ok(StepOutcome::Continue)
    }
}
