//! Response formatting: render the chosen meal (or its absence) for the user.

use crate::meal::{Constraints, MealRecommendation, Reasoning, RecommendationResult};

/// Message returned when no meal survived filtering.
pub const NO_MATCH_MESSAGE: &str = "I couldn't find a meal matching your criteria. Try adjusting your budget or dietary preferences.";

/// Stage names reported in [`Reasoning::tools_used`], in execution order.
pub const TOOLS_USED: [&str; 3] = [
    "get_meal_options",
    "optimize_budget",
    "check_dietary_restrictions",
];

/// Builds the final result. `meal` is `None` exactly when `candidate` is.
pub fn format_recommendation(
    candidate: Option<MealRecommendation>,
    constraints: &Constraints,
) -> RecommendationResult {
    let formatted = match &candidate {
        Some(meal) => render_meal(meal, constraints),
        None => NO_MATCH_MESSAGE.to_string(),
    };
    RecommendationResult {
        formatted,
        meal: candidate,
        reasoning: Reasoning {
            constraints: constraints.clone(),
            tools_used: TOOLS_USED.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// True when there is no budget limit or the meal fits under it.
pub fn within_budget(meal: &MealRecommendation, constraints: &Constraints) -> bool {
    constraints
        .max_budget
        .map_or(true, |max_budget| meal.budget <= max_budget)
}

fn render_meal(meal: &MealRecommendation, constraints: &Constraints) -> String {
    let budget_note = if within_budget(meal, constraints) {
        "within your budget"
    } else {
        "close to your budget"
    };
    format!(
        "**Recommendation:** {}\n**Calories:** {}\n**Protein:** {}g\n**Budget:** ${:.2}\n\nThis meal matches your {} requirements and is {}.",
        meal.name, meal.calories, meal.protein, meal.budget, constraints.meal_type, budget_note
    )
}
