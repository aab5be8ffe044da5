use thiserror::Error;

use crate::model::graph::NodeId;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced at the simulation boundary.
///
/// Randomness failures are not modeled; every variant here is caller misuse
/// or an out-of-domain value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid value {value} for parameter `{name}`: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    #[error("parameter `{0}` is fixed by the model's starting state")]
    FixedParameter(String),

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid edge ({a}, {b}): self-loop or unknown endpoint")]
    InvalidEdge { a: NodeId, b: NodeId },

    #[error("update called after consensus was reached")]
    ConvergedStateMutation,

    #[error("simulation has not been initialized")]
    Uninitialized,
}
