//! Error types for the pipeline crate.

use crate::sequence::TraversalState;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors caused by misusing a fault-tolerant sequence.
///
/// Failures raised by transforms are never reported through this type; they
/// are captured in the [`FailureLog`](crate::FailureLog) instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    /// `current()` was queried while no element is available.
    #[error("no current element: traversal is {state}")]
    NoCurrent {
        /// State of the traversal when the query was made.
        state: TraversalState,
    },
}

impl PipelineError {
    /// Creates a no-current-element error.
    pub fn no_current(state: TraversalState) -> Self {
        Self::NoCurrent { state }
    }
}
