#![allow(dead_code)]

use netcell::model::Grid;
use netcell::sim::{Model, SimConfig, Simulation};
use netcell::View;

/// Grid of `width × height` dead cells with the listed `(x, y)` cells set to 1.
pub fn grid_with(width: usize, height: usize, live: &[(isize, isize)]) -> Grid {
    let mut grid = Grid::new(width, height, 0).unwrap();
    for &(x, y) in live {
        grid.set(x, y, 1);
    }
    grid
}

/// Coordinates of every cell equal to `value`, row by row.
pub fn cells_equal_to(grid: &Grid, value: u8) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x as isize, y as isize) == value {
                out.push((x, y));
            }
        }
    }
    out
}

pub fn initialized(model: Box<dyn Model>, seed: u64) -> Simulation {
    let mut sim = Simulation::new(model, SimConfig::new(seed));
    sim.initialize().unwrap();
    sim
}

/// Clone of the grid currently shown by `sim`.
pub fn current_grid(sim: &mut Simulation) -> Grid {
    match sim.observe().unwrap().state {
        View::Grid(grid) => grid.clone(),
        View::Graph(_) => panic!("expected a grid model"),
    }
}

/// Clone of the graph currently shown by `sim`.
pub fn current_graph(sim: &mut Simulation) -> netcell::Graph {
    match sim.observe().unwrap().state {
        View::Graph(graph) => graph.clone(),
        View::Grid(_) => panic!("expected a graph model"),
    }
}
