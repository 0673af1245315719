//! Node middleware: wrap node.run with external async logic (around pattern).
//!
//! Set via `StateGraph::with_middleware`.

use async_trait::async_trait;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use crate::error::AgentError;

/// Boxed future returned by the wrapped node call.
pub type NodeFuture<U> = Pin<Box<dyn Future<Output = Result<U, AgentError>> + Send>>;

/// Async middleware that wraps each node call.
#[async_trait]
pub trait NodeMiddleware<S, U>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
    U: Send + 'static,
{
    /// - `node_id`: current node id
    /// - `state`: state passed to the node
    /// - `inner`: the actual node.run; must be called to execute the node
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: Box<dyn FnOnce(S) -> NodeFuture<U> + Send>,
    ) -> Result<U, AgentError>;
}
