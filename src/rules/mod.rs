pub mod cellular;
pub mod network;

use rand::Rng;
use rand::RngCore;

pub use cellular::CellRule;

/// One fresh uniform draw compared against `p`.
pub(crate) fn chance(rng: &mut dyn RngCore, p: f64) -> bool {
    let roll: f64 = rng.random_range(0.0..1.0);
    roll < p
}
