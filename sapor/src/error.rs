//! Graph node execution errors.

use thiserror::Error;

/// Error returned by a graph node when a step fails.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. a provider could not be read).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
