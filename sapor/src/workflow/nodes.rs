//! Stage nodes of the planner workflow.
//!
//! Each node reads [`WorkflowState`] and returns only the fields it owns as a
//! [`WorkflowUpdate`]. Providers are called synchronously; nothing here awaits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::message::Message;

use super::providers::{CandidateProvider, DealProvider};
use super::state::{
    Candidate, Deal, FinalPlan, Mood, PlanConstraints, PlannedMeal, PlannerStage, WorkflowState,
    WorkflowUpdate,
};

/// Budget used when the request does not state one.
pub const DEFAULT_BUDGET: f64 = 15.0;

const PLAN_RECOMMENDATION: &str = "Mix of home and eating out";

fn stage_id(stage: PlannerStage) -> &'static str {
    stage.node_id().unwrap_or("end")
}

/// Derives coarse constraints from the latest message.
pub struct ParseRequestNode {
    default_budget: f64,
}

impl ParseRequestNode {
    pub fn new(default_budget: f64) -> Self {
        Self { default_budget }
    }
}

impl Default for ParseRequestNode {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

/// Keyword parse of a request into [`PlanConstraints`].
pub fn parse_plan_constraints(request: &str, default_budget: f64) -> PlanConstraints {
    let lower = request.to_lowercase();
    let mut diet = Vec::new();
    if lower.contains("vegetarian") {
        diet.push("vegetarian".to_string());
    }
    let mood = if lower.contains("happy") {
        Mood::Happy
    } else {
        Mood::Neutral
    };
    PlanConstraints {
        budget: default_budget,
        mood,
        location: "unknown".to_string(),
        diet,
    }
}

#[async_trait]
impl Node<WorkflowState, WorkflowUpdate> for ParseRequestNode {
    fn id(&self) -> &str {
        stage_id(PlannerStage::ParseRequest)
    }

    async fn run(&self, state: WorkflowState) -> Result<WorkflowUpdate, AgentError> {
        let request = state.messages.last().map(Message::content).unwrap_or("");
        let constraints = parse_plan_constraints(request, self.default_budget);
        tracing::debug!(?constraints, "Parsed request");
        Ok(WorkflowUpdate {
            constraints: Some(constraints),
            ..Default::default()
        })
    }
}

/// Loads deals from the deal provider unchanged.
pub struct FindDealsNode {
    provider: Arc<dyn DealProvider>,
}

impl FindDealsNode {
    pub fn new(provider: Arc<dyn DealProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Node<WorkflowState, WorkflowUpdate> for FindDealsNode {
    fn id(&self) -> &str {
        stage_id(PlannerStage::FindDeals)
    }

    async fn run(&self, _state: WorkflowState) -> Result<WorkflowUpdate, AgentError> {
        let deals = self.provider.deals();
        tracing::debug!(count = deals.len(), "Found deals");
        Ok(WorkflowUpdate {
            deals: Some(deals),
            ..Default::default()
        })
    }
}

/// Loads home-meal candidates from the candidate provider unchanged.
pub struct QueryCandidatesNode {
    provider: Arc<dyn CandidateProvider>,
}

impl QueryCandidatesNode {
    pub fn new(provider: Arc<dyn CandidateProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Node<WorkflowState, WorkflowUpdate> for QueryCandidatesNode {
    fn id(&self) -> &str {
        stage_id(PlannerStage::QueryCandidates)
    }

    async fn run(&self, _state: WorkflowState) -> Result<WorkflowUpdate, AgentError> {
        let candidates = self.provider.candidates();
        tracing::debug!(count = candidates.len(), "Queried candidates");
        Ok(WorkflowUpdate {
            candidates: Some(candidates),
            ..Default::default()
        })
    }
}

/// Picks the first deal when it fits the budget, else the first home candidate.
///
/// Returns `None` when neither option exists.
pub fn select_plan(
    constraints: &PlanConstraints,
    deals: &[Deal],
    candidates: &[Candidate],
) -> Option<FinalPlan> {
    let meal = match (deals.first(), candidates.first()) {
        (Some(deal), _) if deal.price <= constraints.budget => PlannedMeal::Deal(deal.clone()),
        (_, Some(candidate)) => PlannedMeal::Home(candidate.clone()),
        _ => return None,
    };
    Some(FinalPlan {
        recommendation: PLAN_RECOMMENDATION.to_string(),
        meals: vec![meal],
    })
}

/// Synthesizes the final plan and appends it to the conversation as JSON.
#[derive(Debug, Default)]
pub struct GeneratePlanNode;

#[async_trait]
impl Node<WorkflowState, WorkflowUpdate> for GeneratePlanNode {
    fn id(&self) -> &str {
        stage_id(PlannerStage::GeneratePlan)
    }

    async fn run(&self, state: WorkflowState) -> Result<WorkflowUpdate, AgentError> {
        let Some(constraints) = state.constraints.get() else {
            tracing::warn!("No constraints in state; no plan generated");
            return Ok(WorkflowUpdate::default());
        };
        let deals = state.deals.get().map(Vec::as_slice).unwrap_or_default();
        let candidates = state.candidates.get().map(Vec::as_slice).unwrap_or_default();

        let Some(plan) = select_plan(constraints, deals, candidates) else {
            tracing::warn!(
                deals = deals.len(),
                candidates = candidates.len(),
                "No affordable deal and no home candidate; no plan generated"
            );
            return Ok(WorkflowUpdate::default());
        };

        let content = serde_json::to_string_pretty(&plan)
            .map_err(|e| AgentError::ExecutionFailed(format!("serialize plan: {}", e)))?;
        Ok(WorkflowUpdate {
            messages: vec![Message::assistant(content)],
            final_plan: Some(plan),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::providers::{StaticCandidateProvider, StaticDealProvider};

    fn constraints(budget: f64) -> PlanConstraints {
        parse_plan_constraints("", budget)
    }

    fn deal(price: f64) -> Deal {
        Deal {
            place: "Green Garden".into(),
            item: "Veggie Wrap".into(),
            price,
            location: "123 Main St".into(),
        }
    }

    fn candidate() -> Candidate {
        Candidate {
            name: "Home Salad".into(),
            cost: 3.0,
            kind: "vegetarian".into(),
        }
    }

    #[test]
    fn parse_defaults_and_keywords() {
        let c = parse_plan_constraints("just food", DEFAULT_BUDGET);
        assert_eq!(c.budget, 15.0);
        assert_eq!(c.mood, Mood::Neutral);
        assert_eq!(c.location, "unknown");
        assert!(c.diet.is_empty());

        let c = parse_plan_constraints("A VEGETARIAN lunch, feeling Happy", 9.0);
        assert_eq!(c.diet, ["vegetarian"]);
        assert_eq!(c.mood, Mood::Happy);
        assert_eq!(c.budget, 9.0);
    }

    /// **Scenario**: Deal price equal to the budget is affordable.
    #[test]
    fn select_prefers_affordable_first_deal() {
        let plan = select_plan(&constraints(5.0), &[deal(5.0)], &[candidate()]).unwrap();
        assert_eq!(plan.recommendation, "Mix of home and eating out");
        assert!(matches!(&plan.meals[..], [PlannedMeal::Deal(d)] if d.price == 5.0));
    }

    /// **Scenario**: Only the first deal is considered; a later cheaper one is ignored.
    #[test]
    fn select_falls_back_to_first_candidate() {
        let plan = select_plan(&constraints(4.0), &[deal(6.0), deal(1.0)], &[candidate()]).unwrap();
        assert!(matches!(&plan.meals[..], [PlannedMeal::Home(c)] if c.name == "Home Salad"));
        let plan = select_plan(&constraints(4.0), &[], &[candidate()]).unwrap();
        assert!(matches!(&plan.meals[..], [PlannedMeal::Home(_)]));
    }

    /// **Scenario**: Empty provider data yields no plan instead of an index fault.
    #[test]
    fn select_without_options_is_none() {
        assert!(select_plan(&constraints(15.0), &[], &[]).is_none());
        assert!(select_plan(&constraints(1.0), &[deal(5.0)], &[]).is_none());
    }

    #[tokio::test]
    async fn parse_node_reads_last_message() {
        let state = WorkflowState::from_query("vegetarian please");
        let update = ParseRequestNode::default().run(state).await.unwrap();
        assert_eq!(update.constraints.unwrap().diet, ["vegetarian"]);
        assert!(update.messages.is_empty());
        assert!(update.deals.is_none());
    }

    #[tokio::test]
    async fn provider_nodes_pass_data_through() {
        let update = FindDealsNode::new(Arc::new(StaticDealProvider::default()))
            .run(WorkflowState::default())
            .await
            .unwrap();
        assert_eq!(update.deals.unwrap().len(), 2);

        let update = QueryCandidatesNode::new(Arc::new(StaticCandidateProvider::new(vec![])))
            .run(WorkflowState::default())
            .await
            .unwrap();
        assert_eq!(update.candidates, Some(vec![]));
    }

    #[tokio::test]
    async fn generate_node_without_constraints_is_empty_update() {
        let update = GeneratePlanNode.run(WorkflowState::default()).await.unwrap();
        assert_eq!(update, WorkflowUpdate::default());
    }
}
