//! # Errors reported by the solver
use thiserror::Error;

/// Errors that can occur while solving an integer program.
///
/// A relaxation without feasible points at some node of the search tree is not an error: that
/// branch is simply dropped. Only when no branch produces an integer point at all does the caller
/// get to hear about it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IlpError {
    /// There is no integer point satisfying all constraints.
    #[error("problem has no integer feasible solution")]
    InfeasibleProblem,

    /// The continuous relaxation of the problem is unbounded.
    #[error("continuous relaxation of the problem is unbounded")]
    UnboundedRelaxation,

    /// Dimensions of the provided data don't match.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// The search was aborted after processing the configured number of nodes.
    #[error("node limit of {0} reached")]
    NodeLimit(u64),
}

/// Result type of the solver entry points.
pub type IlpResult<T> = Result<T, IlpError>;
