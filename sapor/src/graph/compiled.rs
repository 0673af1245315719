//! Compiled state graph: immutable, runs its stages in order.
//!
//! Built by `StateGraph::compile`. Holds the ordered stage list derived from the
//! edges; `invoke` threads one state through every stage and merges each
//! stage's update with the graph's state updater.

use std::fmt::Debug;
use std::sync::Arc;

use crate::channels::BoxedStateUpdater;
use crate::error::AgentError;

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state, log_state_update,
};
use super::node::Node;
use super::node_middleware::{NodeFuture, NodeMiddleware};

/// Executable graph: ordered stages plus merge strategy.
pub struct CompiledStateGraph<S, U> {
    /// (node id, node) in execution order.
    pub(super) stages: Vec<(String, Arc<dyn Node<S, U>>)>,
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S, U>>>,
    pub(super) state_updater: BoxedStateUpdater<S, U>,
}

impl<S, U> Clone for CompiledStateGraph<S, U> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
            middleware: self.middleware.clone(),
            state_updater: self.state_updater.clone(),
        }
    }
}

impl<S, U> CompiledStateGraph<S, U>
where
    S: Clone + Send + Sync + Debug + 'static,
    U: Send + 'static,
{
    /// Node ids in execution order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.stages.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Runs every stage from START to END and returns the final state.
    ///
    /// Stops at the first node error; the state merged so far is discarded.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        log_graph_start();
        let mut state = state;
        for (node_id, node) in &self.stages {
            log_node_start(node_id);
            log_node_state(node_id, &state);

            let update = match self.run_node(node_id, node.clone(), state.clone()).await {
                Ok(update) => update,
                Err(e) => {
                    log_graph_error(&e);
                    return Err(e);
                }
            };
            log_node_complete(node_id);

            self.state_updater.apply_update(&mut state, update);
            log_state_update(node_id);
        }
        log_graph_complete();
        Ok(state)
    }

    async fn run_node(
        &self,
        node_id: &str,
        node: Arc<dyn Node<S, U>>,
        state: S,
    ) -> Result<U, AgentError> {
        match &self.middleware {
            Some(middleware) => {
                let inner: Box<dyn FnOnce(S) -> NodeFuture<U> + Send> =
                    Box::new(move |s: S| -> NodeFuture<U> {
                        Box::pin(async move { node.run(s).await })
                    });
                middleware.around_run(node_id, state, inner).await
            }
            None => node.run(state).await,
        }
    }
}
