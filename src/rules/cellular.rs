use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::chance;
use crate::model::grid::{Grid, Neighborhood};

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

pub const CALM: u8 = 0;
pub const PANICKED: u8 = 1;

pub const EMPTY: u8 = 0;
pub const HEALTHY: u8 = 1;
pub const INFECTED: u8 = 2;

/// Panicked cells in the 3×3 block (self included) needed to panic.
pub const DEFAULT_PANIC_THRESHOLD: usize = 4;

/// Grid transition rules. Each is applied synchronously to every cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CellRule {
    /// Conway's B3/S23 on the 8-cell Moore neighborhood.
    Life,
    /// Panic iff at least `threshold` cells of the 3×3 block are panicked.
    Panic { threshold: usize },
    /// Empty → healthy (regrowth), healthy → infected, infected → empty.
    HostPathogen {
        infection_rate: f64,
        regrowth_rate: f64,
    },
}

impl CellRule {
    /// Which block the rule aggregates over.
    pub fn neighborhood(&self) -> Neighborhood {
        match self {
            CellRule::Life => Neighborhood::Moore,
            CellRule::Panic { .. } | CellRule::HostPathogen { .. } => Neighborhood::MooreWithCenter,
        }
    }

    /// Next value of the cell at `(x, y)`, reading only `grid`.
    pub fn next_state(&self, grid: &Grid, x: usize, y: usize, rng: &mut dyn RngCore) -> u8 {
        let hood = self.neighborhood();
        let current = grid.get(x as isize, y as isize);
        match *self {
            CellRule::Life => life(current, grid.neighbor_count(x, y, ALIVE, hood)),
            CellRule::Panic { threshold } => {
                panic_threshold(grid.neighbor_count(x, y, PANICKED, hood), threshold)
            }
            CellRule::HostPathogen {
                infection_rate,
                regrowth_rate,
            } => {
                let trigger = match current {
                    EMPTY => HEALTHY,
                    HEALTHY => INFECTED,
                    _ => EMPTY,
                };
                let matches = grid.neighbor_count(x, y, trigger, hood);
                host_pathogen(current, matches, infection_rate, regrowth_rate, rng)
            }
        }
    }

    /// Advance `grid` one tick.
    pub fn apply(&self, grid: &mut Grid, rng: &mut dyn RngCore) {
        grid.step(|g, x, y| self.next_state(g, x, y, rng));
    }
}

/// B3/S23. Equivalent to "3 live cells in the 3×3 block when dead, 3 or 4 when
/// alive" counted with the center, so any cell with exactly 3 live neighbors lives.
pub fn life(current: u8, live_neighbors: usize) -> u8 {
    match (current, live_neighbors) {
        (DEAD, 3) => ALIVE,
        (ALIVE, 2 | 3) => ALIVE,
        _ => DEAD,
    }
}

pub fn panic_threshold(panicked_in_block: usize, threshold: usize) -> u8 {
    if panicked_in_block >= threshold {
        PANICKED
    } else {
        CALM
    }
}

/// Host-pathogen transition given how many cells of the 3×3 block match the
/// state that would trigger a change (healthy for empty cells, infected for
/// healthy cells).
///
/// Every match consumes one draw and every success sets the changed state, so
/// the last success wins. There is no short-circuit on the first success.
pub fn host_pathogen(
    current: u8,
    matches: usize,
    infection_rate: f64,
    regrowth_rate: f64,
    rng: &mut dyn RngCore,
) -> u8 {
    let (rate, changed) = match current {
        EMPTY => (regrowth_rate, HEALTHY),
        HEALTHY => (infection_rate, INFECTED),
        _ => return EMPTY,
    };
    let mut state = current;
    for _ in 0..matches {
        if chance(rng, rate) {
            state = changed;
        }
    }
    state
}
