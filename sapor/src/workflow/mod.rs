//! Budget-aware planner workflow: parse request, find deals, query home
//! candidates, then generate a plan.

mod nodes;
mod providers;
mod runner;
mod state;

pub use nodes::{
    parse_plan_constraints, select_plan, FindDealsNode, GeneratePlanNode, ParseRequestNode,
    QueryCandidatesNode, DEFAULT_BUDGET,
};
pub use providers::{
    CandidateProvider, DealProvider, StaticCandidateProvider, StaticDealProvider,
};
pub use runner::{PlannerWorkflow, WorkflowOptions};
pub use state::{
    Candidate, Deal, FinalPlan, Mood, PlanConstraints, PlannedMeal, PlannerStage, WorkflowState,
    WorkflowUpdate, WorkflowUpdater,
};
