use super::context::TickContext;
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::{Grid, MetricKind, Parameters};
use crate::rules::cellular::{CALM, CellRule, DEFAULT_PANIC_THRESHOLD, PANICKED};
use crate::rules::chance;

#[derive(Debug, Clone, PartialEq)]
pub struct PanicConfig {
    pub side: usize,
    /// Probability that a cell starts panicked.
    pub init_prob: f64,
    /// Panicked cells in the 3×3 block needed for a cell to panic.
    pub threshold: usize,
}

impl Default for PanicConfig {
    fn default() -> Self {
        Self {
            side: 100,
            init_prob: 0.1,
            threshold: DEFAULT_PANIC_THRESHOLD,
        }
    }
}

config_parameters!(PanicConfig {
    side: Size,
    init_prob: Probability,
    threshold: Count,
});

/// Threshold-driven spread of panic through a crowd.
#[derive(Debug, Default)]
pub struct PanicModel {
    config: PanicConfig,
    grid: Option<Grid>,
}

impl PanicModel {
    pub fn new(config: PanicConfig) -> Self {
        Self { config, grid: None }
    }
}

impl Model for PanicModel {
    fn name(&self) -> &str {
        "panic"
    }

    fn parameters(&self) -> &dyn Parameters {
        &self.config
    }

    fn parameters_mut(&mut self) -> &mut dyn Parameters {
        &mut self.config
    }

    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()> {
        let p = self.config.init_prob;
        let grid = Grid::random(self.config.side, self.config.side, ctx.rng, |rng| {
            if chance(rng, p) { PANICKED } else { CALM }
        })?;
        self.grid = Some(grid);
        Ok(())
    }

    fn view(&self) -> Option<View<'_>> {
        self.grid.as_ref().map(View::Grid)
    }

    fn measure(&self) -> Vec<(MetricKind, f64)> {
        self.grid
            .as_ref()
            .map(|g| vec![(MetricKind::PanicDensity, g.density(PANICKED))])
            .unwrap_or_default()
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome> {
        let grid = self.grid.as_mut().ok_or(SimError::Uninitialized)?;
        let rule = CellRule::Panic {
            threshold: self.config.threshold,
        };
        rule.apply(grid, ctx.rng);
        Ok(StepOutcome::Continue)
    }
}
