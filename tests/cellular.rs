mod common;

use common::{cells_equal_to, current_grid, grid_with, initialized};
use netcell::model::Grid;
use netcell::rules::CellRule;
use netcell::sim::life::LifeModel;
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;

#[test]
fn blinker_flips_between_horizontal_and_vertical() {
    let start = grid_with(4, 4, &[(0, 1), (1, 1), (2, 1)]);
    let mut sim = initialized(Box::new(LifeModel::with_pattern(start.clone())), 0);

    sim.update().unwrap();
    let grid = current_grid(&mut sim);
    assert_eq!(cells_equal_to(&grid, 1), vec![(1, 0), (1, 1), (1, 2)]);

    sim.update().unwrap();
    assert_eq!(current_grid(&mut sim), start);
}

/// Life computed cell by cell from an untouched copy of the grid.
fn reference_life(grid: &Grid) -> Vec<u8> {
    let (w, h) = (grid.width() as isize, grid.height() as isize);
    let mut out = Vec::with_capacity(grid.cells().len());
    for y in 0..h {
        for x in 0..w {
            let mut live = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) {
                        let nx = (x + dx + w) % w;
                        let ny = (y + dy + h) % h;
                        live += grid.cells()[(ny * w + nx) as usize] as usize;
                    }
                }
            }
            let alive = grid.cells()[(y * w + x) as usize] == 1;
            out.push(u8::from(live == 3 || (alive && live == 2)));
        }
    }
    out
}

#[test]
fn synchronous_update_matches_reference_on_random_grids() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut grid =
        Grid::random(13, 9, &mut rng, |r| u8::from(r.random_range(0.0..1.0) < 0.4)).unwrap();
    for _ in 0..10 {
        let expected = reference_life(&grid);
        CellRule::Life.apply(&mut grid, &mut rng);
        assert_eq!(grid.cells(), expected.as_slice());
    }
}

#[test]
fn corner_cell_sees_the_opposite_corners() {
    // Three live cells around (0, 0) only through wraparound.
    let grid = grid_with(5, 5, &[(4, 4), (4, 0), (0, 4)]);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(CellRule::Life.next_state(&grid, 0, 0, &mut rng), 1);
}
