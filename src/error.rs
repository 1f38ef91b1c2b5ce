//! Errors raised while parsing metric selectors and validating construction input.
//!
//! Lookups of unknown labels and out-of-range ID's are not errors.
//! They are reported by `false`, `None` or empty paths instead.
use crate::graph::Metric;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A metric selector other than `time` or `cost`.
    #[error("unknown metric `{0}`, expected `time` or `cost`")]
    UnknownMetric(String),

    /// A negative, infinite or NaN edge weight.
    #[error("invalid {metric} weight: {value}")]
    InvalidWeight { metric: Metric, value: f64 },

    /// A route record referring to a vertex that does not exist.
    #[error("vertex index {index} is out of range of {size} vertices")]
    VertexOutOfRange { index: usize, size: usize },

    /// The same label listed twice in a construction batch.
    #[error("duplicated vertex `{0}`")]
    DuplicateVertex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
