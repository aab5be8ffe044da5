use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use super::context::TickContext;
use super::kind::ModelKind;
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::MetricsSeries;

/// Configuration for a simulation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Seed for the instance's random source. The same seed and the same
    /// sequence of calls always reproduce the same run.
    pub seed: u64,
}

impl SimConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

/// Lifecycle of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Uninitialized,
    Ready,
    Running,
    /// Terminal; `update` is rejected from here on.
    Converged,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    pub model: &'a str,
    pub tick: u64,
    pub phase: Phase,
    pub state: View<'a>,
    pub metrics: &'a MetricsSeries,
}

/// Owns a model, its random source, tick counter, queued parameter changes
/// and metrics, and enforces the `initialize → observe/update` lifecycle.
pub struct Simulation {
    model: Box<dyn Model>,
    rng: SmallRng,
    phase: Phase,
    tick: u64,
    metrics: MetricsSeries,
    pending: Vec<(String, f64)>,
}

impl Simulation {
    pub fn new(model: Box<dyn Model>, config: SimConfig) -> Self {
        Self {
            model,
            rng: SmallRng::seed_from_u64(config.seed),
            phase: Phase::Uninitialized,
            tick: 0,
            metrics: MetricsSeries::new(),
            pending: Vec::new(),
        }
    }

    /// A simulation of `kind` with its default parameters.
    pub fn of_kind(kind: ModelKind, config: SimConfig) -> Self {
        Self::new(kind.build(), config)
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks completed since the last `initialize`.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn metrics(&self) -> &MetricsSeries {
        &self.metrics
    }

    /// The parameter's current value; queued changes are not reflected until applied.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.model.parameters().get(name)
    }

    /// Validate a parameter change and queue it for the next `update` (or
    /// `initialize`). Returns the accepted value. Parameters the model has
    /// fixed are rejected.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<f64> {
        let value = self.model.parameters().check(name, value)?;
        if self.model.fixed_parameters().iter().any(|&fixed| fixed == name) {
            return Err(SimError::FixedParameter(name.to_string()));
        }
        tracing::debug!(model = self.model.name(), name, value, "parameter change queued");
        self.pending.push((name.to_string(), value));
        Ok(value)
    }

    fn apply_pending(&mut self) {
        let params = self.model.parameters_mut();
        for (name, value) in self.pending.drain(..) {
            params.assign(&name, value);
        }
    }

    /// Build fresh state, discarding any previous state and metrics.
    pub fn initialize(&mut self) -> Result<()> {
        self.apply_pending();
        self.model.parameters().validate()?;
        let mut ctx = TickContext {
            rng: &mut self.rng,
            tick: 0,
        };
        self.model.initialize(&mut ctx)?;
        self.tick = 0;
        self.metrics = MetricsSeries::new();
        self.phase = Phase::Ready;
        tracing::info!(model = self.model.name(), "simulation initialized");
        Ok(())
    }

    /// Record the current metrics and return the frame to draw.
    ///
    /// Does not touch simulation state.
    pub fn observe(&mut self) -> Result<Frame<'_>> {
        if self.phase == Phase::Uninitialized {
            return Err(SimError::Uninitialized);
        }
        self.metrics.record(self.tick, self.model.measure());
        let state = self.model.view().ok_or(SimError::Uninitialized)?;
        Ok(Frame {
            model: self.model.name(),
            tick: self.tick,
            phase: self.phase,
            state,
            metrics: &self.metrics,
        })
    }

    /// Advance exactly one tick. Queued parameter changes are applied first.
    pub fn update(&mut self) -> Result<StepOutcome> {
        match self.phase {
            Phase::Uninitialized => return Err(SimError::Uninitialized),
            Phase::Converged => return Err(SimError::ConvergedStateMutation),
            Phase::Ready | Phase::Running => {}
        }
        self.apply_pending();

        let tick = self.tick + 1;
        let mut ctx = TickContext {
            rng: &mut self.rng,
            tick,
        };
        let outcome = self.model.update(&mut ctx)?;
        self.tick = tick;
        self.phase = match outcome {
            StepOutcome::Continue => Phase::Running,
            StepOutcome::Converged { .. } => Phase::Converged,
        };
        Ok(outcome)
    }

    /// Call `update` until the model converges or `max_ticks` more ticks have
    /// run. Returns the convergence step, if reached.
    pub fn run_until_converged(&mut self, max_ticks: u64) -> Result<Option<u64>> {
        for _ in 0..max_ticks {
            if let StepOutcome::Converged { step } = self.update()? {
                return Ok(Some(step));
            }
        }
        Ok(None)
    }
}
