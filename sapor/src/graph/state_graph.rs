//! State graph builder: nodes + explicit edges (from → to).
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, attach a state updater, then
//! `compile` to get a `CompiledStateGraph`.
//!
//! Only single linear chains are accepted: one edge out of START, at most one
//! outgoing edge per node, no cycles, and every node reachable.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::channels::BoxedStateUpdater;

use super::compile_error::CompilationError;
use super::compiled::CompiledStateGraph;
use super::node::Node;
use super::node_middleware::NodeMiddleware;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph over state `S` whose nodes return updates `U`.
pub struct StateGraph<S, U> {
    nodes: HashMap<String, Arc<dyn Node<S, U>>>,
    /// Edges (from_id, to_id).
    edges: Vec<(String, String)>,
    middleware: Option<Arc<dyn NodeMiddleware<S, U>>>,
    state_updater: Option<BoxedStateUpdater<S, U>>,
}

impl<S, U> Default for StateGraph<S, U>
where
    S: Clone + Send + Sync + Debug + 'static,
    U: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, U> StateGraph<S, U>
where
    S: Clone + Send + Sync + Debug + 'static,
    U: Send + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            middleware: None,
            state_updater: None,
        }
    }

    /// Attaches node middleware; every node call in the compiled graph goes through it.
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<S, U>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    /// Sets how node updates are merged into state. Required before `compile`.
    pub fn with_state_updater(self, updater: BoxedStateUpdater<S, U>) -> Self {
        Self {
            state_updater: Some(updater),
            ..self
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S, U>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`. Use `START` / `END` for entry and exit.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Validates the chain and builds the executable graph.
    pub fn compile(self) -> Result<CompiledStateGraph<S, U>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        let start_edges: Vec<&String> = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t)
            .collect();
        let first = match start_edges.as_slice() {
            [] => return Err(CompilationError::MissingStart),
            [first] => (*first).clone(),
            _ => {
                return Err(CompilationError::InvalidChain(
                    "multiple edges from START (branch)".into(),
                ))
            }
        };

        if !self.edges.iter().any(|(_, t)| t == END) {
            return Err(CompilationError::MissingEnd);
        }

        let mut next: HashMap<&str, &str> = HashMap::new();
        for (from, to) in self.edges.iter().filter(|(f, _)| f != START) {
            if next.insert(from.as_str(), to.as_str()).is_some() {
                return Err(CompilationError::InvalidChain(format!(
                    "duplicate from (branch): {}",
                    from
                )));
            }
        }

        let mut order = vec![first.clone()];
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(first.as_str());
        let mut current = first.as_str();
        loop {
            let to = match next.get(current) {
                Some(to) => *to,
                None => {
                    return Err(CompilationError::InvalidChain(format!(
                        "node has no outgoing edge: {}",
                        current
                    )))
                }
            };
            if to == END {
                break;
            }
            if !visited.insert(to) {
                return Err(CompilationError::InvalidChain("cycle detected".into()));
            }
            order.push(to.to_string());
            current = to;
        }

        if let Some(orphan) = self.nodes.keys().find(|id| !visited.contains(id.as_str())) {
            return Err(CompilationError::InvalidChain(format!(
                "node not reachable from START: {}",
                orphan
            )));
        }

        let state_updater = self
            .state_updater
            .ok_or(CompilationError::MissingStateUpdater)?;

        let mut nodes = self.nodes;
        let stages = order
            .into_iter()
            .filter_map(|id| nodes.remove(&id).map(|node| (id, node)))
            .collect();

        Ok(CompiledStateGraph {
            stages,
            middleware: self.middleware,
            state_updater,
        })
    }
}
