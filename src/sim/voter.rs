use super::context::TickContext;
use super::runner::{SimConfig, Simulation};
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::generators::karate_club;
use crate::model::layout::fresh_layout;
use crate::model::{Graph, MetricKind, Parameters};
use crate::rules::chance;
use crate::rules::network::voter_step;

const INITIAL_LAYOUT_ITERATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct VoterConfig {
    /// Probability that a member starts with opinion 1.
    pub init_prob: f64,
}

impl Default for VoterConfig {
    fn default() -> Self {
        Self { init_prob: 0.5 }
    }
}

config_parameters!(VoterConfig {
    init_prob: Probability,
});

/// Voter model on the karate club network. Runs until every member holds
/// the same opinion.
#[derive(Debug, Default)]
pub struct VoterModel {
    config: VoterConfig,
    /// Fixed starting network with its opinions; the karate club when absent.
    network: Option<Graph>,
    graph: Option<Graph>,
}

impl VoterModel {
    pub fn new(config: VoterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start every run from `network` and its opinions. `init_prob` is then
    /// fixed.
    pub fn with_network(network: Graph) -> Self {
        Self {
            network: Some(network),
            ..Self::default()
        }
    }
}

impl Model for VoterModel {
    fn name(&self) -> &str {
        "voter"
    }

    fn parameters(&self) -> &dyn Parameters {
        &self.config
    }

    fn parameters_mut(&mut self) -> &mut dyn Parameters {
        &mut self.config
    }

    fn fixed_parameters(&self) -> &'static [&'static str] {
        match self.network {
            Some(_) => &["init_prob"],
            None => &[],
        }
    }

    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()> {
        let graph = match &self.network {
            Some(network) => network.clone(),
            None => {
                let mut graph = karate_club()?;
                fresh_layout(&mut graph, INITIAL_LAYOUT_ITERATIONS, ctx.rng);
                let ids: Vec<_> = graph.node_ids().collect();
                for id in ids {
                    let opinion = u8::from(chance(ctx.rng, self.config.init_prob));
                    graph.set_state(id, opinion);
                }
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
        let share = graph.state_fraction(1);
        vec![
            (MetricKind::StateOneShare, share),
            (MetricKind::Homogeneity, share.max(1.0 - share)),
        ]
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome> {
        let graph = self.graph.as_mut().ok_or(SimError::Uninitialized)?;
        if voter_step(graph, ctx.rng).is_none() {
            tracing::trace!(tick = ctx.tick, "listener had no neighbors");
        }
        if graph.is_homogeneous() {
            tracing::info!(step = ctx.tick, "homogeneity reached");
            return Ok(StepOutcome::Converged { step: ctx.tick });
        }
        Ok(StepOutcome::Continue)
    }
}

/// Run the voter model to consensus `runs` times from fresh random opinions,
/// recording the step each run converged at (`None` if it had not after
/// `max_steps` updates).
pub fn experiment(runs: usize, seed: u64, max_steps: u64) -> Result<Vec<Option<u64>>> {
    let mut sim = Simulation::new(Box::new(VoterModel::default()), SimConfig::new(seed));
    let mut record = Vec::with_capacity(runs);
    for _ in 0..runs {
        sim.initialize()?;
        record.push(sim.run_until_converged(max_steps)?);
    }
    Ok(record)
}
