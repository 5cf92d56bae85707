//! Error types

use thiserror::Error;

/// Errors returned by the aggregation and matching layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("at least one comparison algorithm must be selected")]
    NoAlgorithmSelected,

    #[error("unknown comparison algorithm: '{0}'")]
    UnknownAlgorithm(String),
}

pub type Result<T, E = SimilarityError> = std::result::Result<T, E>;
