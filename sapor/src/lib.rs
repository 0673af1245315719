//! # Sapor
//!
//! Meal recommendations from free-text requests, plus the reward signal used to
//! train a model that writes them.
//!
//! ## Pipelines
//!
//! - **Recommendation pipeline** ([`MealPlanner`]): extract [`Constraints`] from the
//!   query, filter the [`MealCatalog`], pick the best nutrition-per-dollar candidate,
//!   run the dietary check and render a [`RecommendationResult`].
//! - **Planner workflow** ([`PlannerWorkflow`]): a linear [`StateGraph`] of four stages
//!   (parse request → find deals → query candidates → generate plan) over one
//!   [`WorkflowState`] whose fields merge through [`channels`].
//! - **Reward** ([`RewardScorer`], [`meal_correctness`]): grades generated
//!   recommendation text in `[0.0, 1.0]`.
//! - **Feedback** ([`FeedbackRecorder`]): turns positive ratings into JSONL training
//!   examples.
//!
//! ## Main modules
//!
//! - [`meal`]: [`Constraints`], [`MealRecommendation`], [`RecommendationResult`].
//! - [`extract`]: [`ConstraintExtractor`], [`RegexExtractor`].
//! - [`catalog`]: [`MealCatalog`], [`MealSource`].
//! - [`planner`]: filter, optimize, verify and format stages; [`MealPlanner`].
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`NodeMiddleware`].
//! - [`channels`]: [`LastValue`], [`Topic`], [`StateUpdater`].
//! - [`workflow`]: [`PlannerWorkflow`] and its stage nodes and providers.
//! - [`reward`], [`feedback`], [`message`].

pub mod catalog;
pub mod channels;
pub mod error;
pub mod extract;
pub mod feedback;
pub mod graph;
pub mod meal;
pub mod message;
pub mod planner;
pub mod reward;
pub mod workflow;

pub use catalog::{BuiltinMeals, CatalogError, MealCatalog, MealSource};
pub use channels::{
    BoxedStateUpdater, Channel, FieldBasedUpdater, LastValue, StateUpdater, Topic,
};
pub use error::AgentError;
pub use extract::{ConstraintExtractor, RegexExtractor};
pub use feedback::{
    Feedback, FeedbackError, FeedbackOutcome, FeedbackRecorder, FeedbackReport, TrainingExample,
};
pub use graph::{
    CompilationError, CompiledStateGraph, LoggingNodeMiddleware, Node, NodeMiddleware,
    StateGraph, END, START,
};
pub use meal::{
    Constraints, DietType, MealRecommendation, MealType, ProteinPreference, Reasoning,
    RecommendationResult,
};
pub use message::Message;
pub use planner::{MealPlanner, ToolInfo};
pub use reward::{meal_correctness, RewardScorer};
pub use workflow::{
    CandidateProvider, DealProvider, FinalPlan, PlannerWorkflow, StaticCandidateProvider,
    StaticDealProvider, WorkflowOptions, WorkflowState,
};
