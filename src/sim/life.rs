use super::context::TickContext;
use super::system::{Model, StepOutcome, View};
use crate::error::{Result, SimError};
use crate::model::{Grid, MetricKind, Parameters};
use crate::rules::cellular::{ALIVE, CellRule, DEAD};
use crate::rules::chance;

/// Parameters of the life-like automaton.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// Side of the square grid.
    pub side: usize,
    /// Probability that a cell starts alive.
    pub init_prob: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            side: 100,
            init_prob: 0.6,
        }
    }
}

config_parameters!(LifeConfig {
    side: Size,
    init_prob: Probability,
});

/// Game of Life on a toroidal square grid.
#[derive(Debug, Default)]
pub struct LifeModel {
    config: LifeConfig,
    /// Fixed starting pattern; random when absent.
    pattern: Option<Grid>,
    grid: Option<Grid>,
}

impl LifeModel {
    pub fn new(config: LifeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start every run from `pattern` instead of a random fill. `side` and
    /// `init_prob` are then fixed and cannot be set.
    pub fn with_pattern(pattern: Grid) -> Self {
        Self {
            config: LifeConfig {
                side: pattern.width(),
                ..LifeConfig::default()
            },
            pattern: Some(pattern),
            grid: None,
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
}

impl Model for LifeModel {
    fn name(&self) -> &str {
        "life"
    }

    fn parameters(&self) -> &dyn Parameters {
        &self.config
    }

    fn parameters_mut(&mut self) -> &mut dyn Parameters {
        &mut self.config
    }

    fn fixed_parameters(&self) -> &'static [&'static str] {
        match self.pattern {
            Some(_) => &["side", "init_prob"],
            None => &[],
        }
    }

    fn initialize(&mut self, ctx: &mut TickContext) -> Result<()> {
        let grid = match &self.pattern {
            Some(pattern) => pattern.clone(),
            None => {
                let p = self.config.init_prob;
                Grid::random(self.config.side, self.config.side, ctx.rng, |rng| {
                    if chance(rng, p) { ALIVE } else { DEAD }
                })?
            }
        };
        self.grid = Some(grid);
        Ok(())
    }

    fn view(&self) -> Option<View<'_>> {
        self.grid.as_ref().map(View::Grid)
    }

    fn measure(&self) -> Vec<(MetricKind, f64)> {
        self.grid
            .as_ref()
            .map(|g| vec![(MetricKind::AliveDensity, g.density(ALIVE))])
            .unwrap_or_default()
    }

    fn update(&mut self, ctx: &mut TickContext) -> Result<StepOutcome> {
        let grid = self.grid.as_mut().ok_or(SimError::Uninitialized)?;
        CellRule::Life.apply(grid, ctx.rng);
        Ok(StepOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimConfig, Simulation};

    #[test]
    fn random_fill_respects_side_and_extremes() {
        let mut sim = Simulation::new(
            Box::new(LifeModel::new(LifeConfig {
                side: 8,
                init_prob: 1.0,
            })),
            SimConfig::new(1),
        );
        sim.initialize().unwrap();
        let frame = sim.observe().unwrap();
        let View::Grid(grid) = frame.state else {
            panic!("life should expose a grid");
        };
        assert_eq!((grid.width(), grid.height()), (8, 8));
        assert_eq!(grid.density(ALIVE), 1.0);
    }

    #[test]
    fn pattern_fixes_side_and_init_prob() {
        let pattern = Grid::new(4, 4, DEAD).unwrap();
        let mut sim = Simulation::new(Box::new(LifeModel::with_pattern(pattern)), SimConfig::new(0));
        assert_eq!(
            sim.set_parameter("side", 10.0),
            Err(SimError::FixedParameter("side".to_string()))
        );
        assert!(sim.set_parameter("init_prob", 0.5).is_err());
        sim.initialize().unwrap();
        assert_eq!(sim.parameter("side"), Some(4.0));

        let mut random = Simulation::new(Box::new(LifeModel::default()), SimConfig::new(0));
        assert_eq!(random.set_parameter("side", 10.0), Ok(10.0));
    }

    #[test]
    fn alive_density_recorded_per_observe() {
        let mut pattern = Grid::new(5, 5, DEAD).unwrap();
        pattern.set(1, 2, ALIVE);
        pattern.set(2, 2, ALIVE);
        pattern.set(3, 2, ALIVE);
        let mut sim = Simulation::new(Box::new(LifeModel::with_pattern(pattern)), SimConfig::new(0));
        sim.initialize().unwrap();
        sim.observe().unwrap();
        sim.update().unwrap();
        sim.observe().unwrap();
        let densities: Vec<f64> = sim
            .metrics()
            .series(MetricKind::AliveDensity)
            .map(|(_, v)| v)
            .collect();
        // A blinker keeps three live cells.
        assert_eq!(densities, vec![3.0 / 25.0, 3.0 / 25.0]);
    }
}
