//! Graph node trait: one stage in a StateGraph.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

/// One step in a graph: state in, partial update out.
///
/// The node never mutates shared state itself; the compiled graph hands its
/// output to the graph's [`StateUpdater`](crate::channels::StateUpdater).
#[async_trait]
pub trait Node<S, U>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
    U: Send + 'static,
{
    /// Node id (e.g. `"parse_request"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// Reads `state` and returns the fields this node owns.
    async fn run(&self, state: S) -> Result<U, AgentError>;
}
