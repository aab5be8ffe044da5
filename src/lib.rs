pub mod error;
pub mod id;
#[macro_use]
pub mod model;
pub mod rules;
pub mod sim;
pub mod topology;

pub use error::{Result, SimError};
pub use id::IdGenerator;
pub use model::{Graph, Grid, MetricKind, MetricsSeries, NodeId};
pub use sim::{Frame, Model, ModelKind, Phase, SimConfig, Simulation, StepOutcome, View};
