#[macro_use]
mod macros;

pub mod generators;
pub mod graph;
pub mod grid;
pub mod layout;
pub mod metrics;
pub mod params;

pub use graph::{Graph, NodeAttrs, NodeId, Position};
pub use grid::{Grid, Neighborhood};
pub use metrics::{MetricKind, MetricSample, MetricsSeries};
pub use params::{Domain, ParamSpec, ParamValue, Parameters};
