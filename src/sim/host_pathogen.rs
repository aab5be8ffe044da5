use super::context::TickContext;
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::{Grid, MetricKind, Parameters};
use crate::rules::cellular::{CellRule, HEALTHY, INFECTED};
use crate::rules::chance;

#[derive(Debug, Clone, PartialEq)]
pub struct HostPathogenConfig {
    pub width: usize,
    pub height: usize,
    /// Probability that a cell starts infected; every other cell starts healthy.
    pub init_prob: f64,
    /// Per-infected-neighbor chance that a healthy cell is infected.
    pub infection_rate: f64,
    /// Per-healthy-neighbor chance that an empty cell regrows.
    pub regrowth_rate: f64,
}

impl Default for HostPathogenConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            init_prob: 0.01,
            infection_rate: 0.85,
            regrowth_rate: 0.15,
        }
    }
}

config_parameters!(HostPathogenConfig {
    width: Size,
    height: Size,
    init_prob: Probability,
    infection_rate: Probability,
    regrowth_rate: Probability,
});

/// Three-state host/pathogen cycle: empty, healthy, infected.
#[derive(Debug, Default)]
pub struct HostPathogenModel {
    config: HostPathogenConfig,
    grid: Option<Grid>,
}

impl HostPathogenModel {
    pub fn new(config: HostPathogenConfig) -> Self {
        Self { config, grid: None }
    }

    fn rule(&self) -> CellRule {
        CellRule::HostPathogen {
            infection_rate: self.config.infection_rate,
            regrowth_rate: self.config.regrowth_rate,
        }
    }
}

impl Model for HostPathogenModel {
    fn name(&self) -> &str {
        "host_pathogen"
    }

    fn parameters(&self) -> &dyn Parameters {
        &self.config
    }

    fn parameters_mut(&mut self) -> &mut dyn Parameters {
        &mut self.config
    }

    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()> {
        let p = self.config.init_prob;
        let grid = Grid::random(self.config.width, self.config.height, ctx.rng, |rng| {
            if chance(rng, p) { INFECTED } else { HEALTHY }
        })?;
        self.grid = Some(grid);
        Ok(())
    }

    fn view(&self) -> Option<View<'_>> {
        self.grid.as_ref().map(View::Grid)
    }

    fn measure(&self) -> Vec<(MetricKind, f64)> {
        let Some(grid) = &self.grid else {
            return Vec::new();
        };
        vec![
            (MetricKind::HealthyDensity, grid.density(HEALTHY)),
            (MetricKind::InfectedDensity, grid.density(INFECTED)),
        ]
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome> {
        let rule = self.rule();
        let grid = self.grid.as_mut().ok_or(SimError::Uninitialized)?;
        rule.apply(grid, ctx.rng);
        Ok(StepOutcome::Continue)
    }
}
