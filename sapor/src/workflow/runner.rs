//! Assembles the planner stages into a compiled graph and runs it.

use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::{
    CompilationError, CompiledStateGraph, LoggingNodeMiddleware, Node, StateGraph, END, START,
};

use super::nodes::{
    FindDealsNode, GeneratePlanNode, ParseRequestNode, QueryCandidatesNode, DEFAULT_BUDGET,
};
use super::providers::{
    CandidateProvider, DealProvider, StaticCandidateProvider, StaticDealProvider,
};
use super::state::{PlannerStage, WorkflowState, WorkflowUpdate, WorkflowUpdater};

/// Knobs for building a [`PlannerWorkflow`].
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Budget assigned by the parse stage.
    pub default_budget: f64,
    /// Wrap every stage in [`LoggingNodeMiddleware`].
    pub log_nodes: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            default_budget: DEFAULT_BUDGET,
            log_nodes: false,
        }
    }
}

/// The linear ParseRequest → FindDeals → QueryCandidates → GeneratePlan pipeline.
pub struct PlannerWorkflow {
    graph: CompiledStateGraph<WorkflowState, WorkflowUpdate>,
}

impl PlannerWorkflow {
    pub fn new(
        deals: Arc<dyn DealProvider>,
        candidates: Arc<dyn CandidateProvider>,
    ) -> Result<Self, CompilationError> {
        Self::with_options(deals, candidates, WorkflowOptions::default())
    }

    pub fn with_options(
        deals: Arc<dyn DealProvider>,
        candidates: Arc<dyn CandidateProvider>,
        options: WorkflowOptions,
    ) -> Result<Self, CompilationError> {
        let mut graph = StateGraph::<WorkflowState, WorkflowUpdate>::new()
            .with_state_updater(Arc::new(WorkflowUpdater));
        if options.log_nodes {
            graph = graph.with_middleware(Arc::new(
                LoggingNodeMiddleware::<WorkflowState, WorkflowUpdate>::default(),
            ));
        }

        let mut prev = START;
        for stage in PlannerStage::sequence() {
            let node: Arc<dyn Node<WorkflowState, WorkflowUpdate>> = match stage {
                PlannerStage::ParseRequest => Arc::new(ParseRequestNode::new(options.default_budget)),
                PlannerStage::FindDeals => Arc::new(FindDealsNode::new(deals.clone())),
                PlannerStage::QueryCandidates => {
                    Arc::new(QueryCandidatesNode::new(candidates.clone()))
                }
                PlannerStage::GeneratePlan => Arc::new(GeneratePlanNode),
                PlannerStage::End => continue,
            };
            let id = node.id().to_string();
            graph.add_node(id.clone(), node);
            graph.add_edge(prev, id);
            prev = stage.node_id().unwrap_or(END);
        }
        graph.add_edge(prev, END);

        Ok(Self {
            graph: graph.compile()?,
        })
    }

    /// Runs every stage on a fresh state seeded with `query` and returns the final state.
    pub async fn run(&self, query: &str) -> Result<WorkflowState, AgentError> {
        self.graph.invoke(WorkflowState::from_query(query)).await
    }

    /// Workflow over the built-in deal and candidate lists.
    pub fn builtin() -> Result<Self, CompilationError> {
        Self::new(
            Arc::new(StaticDealProvider::default()),
            Arc::new(StaticCandidateProvider::default()),
        )
    }

    /// Node ids in execution order.
    pub fn stages(&self) -> Vec<&str> {
        self.graph.node_ids()
    }
}
