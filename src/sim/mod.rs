mod context;
mod kind;
mod runner;
mod system;

pub mod epidemic;
pub mod growth;
pub mod host_pathogen;
pub mod life;
pub mod panic;
pub mod rewiring;
pub mod voter;

pub use context::TickContext;
pub use kind::ModelKind;
pub use runner::{Frame, Phase, SimConfig, Simulation};
pub use system::{Model, StepOutcome, View};
