//! Subcommand bodies. Each returns the text to print on stdout.

use std::path::Path;
use std::sync::Arc;

use sapor::feedback::FeedbackReport;
use sapor::{
    Feedback, FeedbackRecorder, MealPlanner, PlannerWorkflow, RewardScorer,
    StaticCandidateProvider, StaticDealProvider, WorkflowOptions,
};

/// Printed by `workflow` when the graph ends without a plan.
const NO_PLAN_ERROR: &str = "Failed to generate plan";

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Runs the recommendation pipeline on the built-in catalog.
pub fn plan(query: &str, json: bool, pretty: bool) -> Result<String, Box<dyn std::error::Error>> {
    let mut planner = MealPlanner::default();
    let result = planner.plan_meal(query);
    if json {
        Ok(to_json(&result, pretty)?)
    } else {
        Ok(result.formatted)
    }
}

/// Runs the planner workflow over the built-in providers.
pub async fn workflow(
    query: &str,
    default_budget: f64,
    log_nodes: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let workflow = PlannerWorkflow::with_options(
        Arc::new(StaticDealProvider::default()),
        Arc::new(StaticCandidateProvider::default()),
        WorkflowOptions {
            default_budget,
            log_nodes,
        },
    )?;
    let state = workflow.run(query).await?;
    let out = match state.final_plan() {
        Some(plan) => to_json(plan, true)?,
        None => to_json(&serde_json::json!({ "error": NO_PLAN_ERROR }), true)?,
    };
    Ok(out)
}

/// Reward for `text`, two decimals.
pub fn score(text: &str) -> String {
    format!("{:.2}", RewardScorer::new().score(text))
}

/// Completion text from `file` if given, else the joined words.
pub fn score_input(file: Option<&Path>, words: &[String]) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => Ok(words.join(" ")),
    }
}

/// Records one piece of feedback and returns the `{status, action}` report as JSON.
pub fn feedback(
    recorder: &FeedbackRecorder,
    feedback: &Feedback,
) -> Result<String, Box<dyn std::error::Error>> {
    let outcome = recorder.process(feedback)?;
    Ok(to_json(&FeedbackReport::from(outcome), false)?)
}
