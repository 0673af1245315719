//! State graph: nodes + linear edges, compile and invoke.
//!
//! Build a [`StateGraph`] with `add_node` / `add_edge` (using [`START`] and [`END`]),
//! attach a [`StateUpdater`](crate::channels::StateUpdater), then `compile` and
//! `invoke` with an initial state. Nodes return partial updates; the updater
//! merges them into the shared state after every step.

mod compile_error;
mod compiled;
mod logging;
mod logging_middleware;
mod node;
mod node_middleware;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state, log_state_update,
};
pub use logging_middleware::LoggingNodeMiddleware;
pub use node::Node;
pub use node_middleware::{NodeFuture, NodeMiddleware};
pub use state_graph::{StateGraph, END, START};
