use serde::Serialize;

use super::context::TickContext;
use crate::error::Result;
use crate::model::{Graph, Grid, MetricKind, Parameters};

/// What a tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepOutcome {
    Continue,
    /// Terminal: every node agrees. `step` is the tick at which it first happened.
    Converged { step: u64 },
}

impl StepOutcome {
    /// The driver's "keep calling update" flag.
    pub fn should_continue(&self) -> bool {
        matches!(self, StepOutcome::Continue)
    }
}

/// Read-only view of a model's current state.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "state", rename_all = "snake_case")]
pub enum View<'a> {
    Grid(&'a Grid),
    Graph(&'a Graph),
}

/// One simulation variant: initial-state builder, transition and metrics.
///
/// Object-safe so models can be stored as `Box<dyn Model>`.
pub trait Model {
    fn name(&self) -> &str;

    fn parameters(&self) -> &dyn Parameters;

    fn parameters_mut(&mut self) -> &mut dyn Parameters;

    /// Parameters that `initialize` ignores because the starting state was
    /// supplied up front. Setting one is an error.
    fn fixed_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    /// Build fresh state from the current parameters, replacing any previous state.
    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()>;

    /// Current state, `None` before the first `initialize`.
    fn view(&self) -> Option<View<'_>>;

    /// Scalar summaries of the current state.
    fn measure(&self) -> Vec<(MetricKind, f64)>;

    /// Advance exactly one tick.
    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome>;
}
