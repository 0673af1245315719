//! Primary recommendation pipeline.
//!
//! `query → extract → filter → optimize → verify → format`. Each stage is a plain
//! function in its own module; [`MealPlanner`] wires them together over a catalog
//! and keeps the conversation history of its runs.

mod filter;
mod format;
mod optimize;
mod verify;

pub use filter::{filter_candidates, satisfies};
pub use format::{format_recommendation, within_budget, NO_MATCH_MESSAGE, TOOLS_USED};
pub use optimize::{optimize_budget, value_score};
pub use verify::{check_dietary_restrictions, HIGH_PROTEIN_MIN_GRAMS};

use crate::catalog::{MealCatalog, MealSource};
use crate::extract::{ConstraintExtractor, RegexExtractor};
use crate::meal::RecommendationResult;
use crate::message::Message;

/// Name and description of a tool the planner can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const TOOLS: [ToolInfo; 4] = [
    ToolInfo {
        name: "get_meal_options",
        description: "Get meal options based on constraints",
    },
    ToolInfo {
        name: "calculate_nutrition",
        description: "Calculate nutritional info for a meal",
    },
    ToolInfo {
        name: "optimize_budget",
        description: "Find best meals within budget",
    },
    ToolInfo {
        name: "check_dietary_restrictions",
        description: "Verify meal matches dietary needs",
    },
];

/// Runs the recommendation pipeline against one catalog.
///
/// The extractor is pluggable via [`MealPlanner::with_extractor`]. The user query
/// and formatted reply of every run are appended to [`MealPlanner::history`].
pub struct MealPlanner {
    catalog: MealCatalog,
    extractor: Box<dyn ConstraintExtractor>,
    history: Vec<Message>,
}

impl MealPlanner {
    /// Planner over `catalog` with the default [`RegexExtractor`].
    pub fn new(catalog: MealCatalog) -> Self {
        Self {
            catalog,
            extractor: Box::new(RegexExtractor),
            history: Vec::new(),
        }
    }

    /// Planner over whatever `source` currently provides.
    pub fn from_source(source: &dyn MealSource) -> Self {
        Self::new(source.catalog())
    }

    pub fn with_extractor(self, extractor: Box<dyn ConstraintExtractor>) -> Self {
        Self { extractor, ..self }
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Tools this planner knows about.
    pub fn tools() -> &'static [ToolInfo] {
        &TOOLS
    }

    /// Runs the full pipeline for `query`. Never fails; no match yields the apology message.
    pub fn plan_meal(&mut self, query: &str) -> RecommendationResult {
        tracing::info!(query = query, "Planning meal");
        self.history.push(Message::user(query));

        let result = self.recommend(query);

        self.history.push(Message::assistant(result.formatted.clone()));
        tracing::info!(
            meal = ?result.meal.as_ref().map(|m| m.name.as_str()),
            "Meal plan complete"
        );
        result
    }

    /// Pipeline without touching history.
    pub fn recommend(&self, query: &str) -> RecommendationResult {
        let constraints = self.extractor.extract(query);
        let candidates = filter_candidates(&self.catalog, &constraints);
        let best = optimize_budget(&candidates).cloned();
        let verified = check_dietary_restrictions(best, &constraints);
        format_recommendation(verified, &constraints)
    }
}

impl Default for MealPlanner {
    fn default() -> Self {
        Self::new(MealCatalog::default_catalog())
    }
}
