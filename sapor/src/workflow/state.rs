//! Planner workflow state, per-stage updates and the merge contract between them.
//!
//! [`WorkflowState`] declares each field's channel: `messages` is a [`Topic`]
//! (append), every other field is a [`LastValue`] (overwrite by its owning stage).
//! [`WorkflowUpdater`] applies a [`WorkflowUpdate`] under exactly those rules.

use serde::{Deserialize, Serialize};

use crate::channels::{Channel, LastValue, StateUpdater, Topic};
use crate::message::Message;

/// Stages of the planner workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlannerStage {
    ParseRequest,
    FindDeals,
    QueryCandidates,
    GeneratePlan,
    End,
}

impl PlannerStage {
    pub const INITIAL: PlannerStage = PlannerStage::ParseRequest;

    /// Graph node id for this stage; `End` has none.
    pub fn node_id(&self) -> Option<&'static str> {
        match self {
            PlannerStage::ParseRequest => Some("parse_request"),
            PlannerStage::FindDeals => Some("find_deals"),
            PlannerStage::QueryCandidates => Some("query_candidates"),
            PlannerStage::GeneratePlan => Some("generate_plan"),
            PlannerStage::End => None,
        }
    }

    /// The single successor; `End` is terminal.
    pub fn next(&self) -> Option<PlannerStage> {
        match self {
            PlannerStage::ParseRequest => Some(PlannerStage::FindDeals),
            PlannerStage::FindDeals => Some(PlannerStage::QueryCandidates),
            PlannerStage::QueryCandidates => Some(PlannerStage::GeneratePlan),
            PlannerStage::GeneratePlan => Some(PlannerStage::End),
            PlannerStage::End => None,
        }
    }

    /// Stages that run a node, from the initial stage up to (excluding) `End`.
    pub fn sequence() -> Vec<PlannerStage> {
        std::iter::successors(Some(Self::INITIAL), PlannerStage::next)
            .take_while(|s| *s != PlannerStage::End)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
}

/// Coarse constraints derived by the parse stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConstraints {
    pub budget: f64,
    pub mood: Mood,
    pub location: String,
    pub diet: Vec<String>,
}

/// A local eating-out offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub place: String,
    pub item: String,
    pub price: f64,
    pub location: String,
}

/// A home meal from the meal database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub cost: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One meal chosen for the plan: either a deal or a home candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlannedMeal {
    Deal(Deal),
    Home(Candidate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalPlan {
    pub recommendation: String,
    pub meals: Vec<PlannedMeal>,
}

/// Shared record threaded through the planner workflow.
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    pub messages: Topic<Message>,
    pub constraints: LastValue<PlanConstraints>,
    pub deals: LastValue<Vec<Deal>>,
    pub candidates: LastValue<Vec<Candidate>>,
    pub final_plan: LastValue<FinalPlan>,
}

impl WorkflowState {
    /// Initial state holding only the user's request.
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            messages: Topic::from_values(vec![Message::user(query)]),
            ..Default::default()
        }
    }

    /// `None` when the workflow could not produce a plan.
    pub fn final_plan(&self) -> Option<&FinalPlan> {
        self.final_plan.get()
    }
}

/// Partial output of one stage. Unset fields leave the state untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowUpdate {
    /// Appended to `messages`.
    pub messages: Vec<Message>,
    pub constraints: Option<PlanConstraints>,
    pub deals: Option<Vec<Deal>>,
    pub candidates: Option<Vec<Candidate>>,
    pub final_plan: Option<FinalPlan>,
}

/// Append for `messages`, overwrite for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowUpdater;

impl StateUpdater<WorkflowState, WorkflowUpdate> for WorkflowUpdater {
    fn apply_update(&self, current: &mut WorkflowState, update: WorkflowUpdate) {
        current.messages.write(update.messages);
        if let Some(constraints) = update.constraints {
            current.constraints.write(constraints);
        }
        if let Some(deals) = update.deals {
            current.deals.write(deals);
        }
        if let Some(candidates) = update.candidates {
            current.candidates.write(candidates);
        }
        if let Some(final_plan) = update.final_plan {
            current.final_plan.write(final_plan);
        }
    }
}
