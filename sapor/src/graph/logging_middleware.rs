//! Middleware that logs node enter/exit around each node.run call.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::{NodeFuture, NodeMiddleware};

/// Logs node enter/exit through `tracing`; only the node id and outcome are recorded.
pub struct LoggingNodeMiddleware<S, U> {
    _phantom: std::marker::PhantomData<fn(S) -> U>,
}

impl<S, U> Default for LoggingNodeMiddleware<S, U> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

#[async_trait]
impl<S, U> NodeMiddleware<S, U> for LoggingNodeMiddleware<S, U>
where
    S: Clone + Send + Sync + Debug + 'static,
    U: Send + 'static,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: Box<dyn FnOnce(S) -> NodeFuture<U> + Send>,
    ) -> Result<U, AgentError> {
        tracing::info!(node = node_id, "enter node");
        let result = inner(state).await;
        match &result {
            Ok(_) => tracing::info!(node = node_id, "exit node"),
            Err(e) => tracing::warn!(node = node_id, error = %e, "exit node with error"),
        }
        result
    }
}
