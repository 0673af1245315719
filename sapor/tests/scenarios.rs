//! Integration test: recommendation pipeline and reward scoring end to end.
//!
//! Query → constraints → filtered candidates → best value → formatted text, and
//! the reward rubric applied to that text.


use sapor::planner::NO_MATCH_MESSAGE;
use sapor::{
    meal_correctness, ConstraintExtractor, DietType, MealCatalog, MealPlanner, MealRecommendation,
    MealType, Message, RegexExtractor, RewardScorer,
};

fn two_meal_catalog() -> MealCatalog {
    MealCatalog::from_entries([
        (
            "veggie_bowl",
            MealRecommendation::new("Veggie Bowl", 450, 14, 4.50, ["vegetarian"]),
        ),
        (
            "steak_plate",
            MealRecommendation::new("Steak Plate", 700, 48, 7.50, ["high-protein"]),
        ),
    ])
    .expect("unique ids")
}

/// **Scenario**: A vegetarian lunch under $5 picks the only vegetarian meal in budget.
#[test]
fn vegetarian_lunch_under_five_dollars() {
    let query = "I want a vegetarian lunch under $5";
    let constraints = RegexExtractor.extract(query);
    assert_eq!(constraints.diet_type, Some(DietType::Vegetarian));
    assert_eq!(constraints.max_budget, Some(5.0));
    assert_eq!(constraints.meal_type, MealType::Lunch);

    let catalog = two_meal_catalog();
    let candidates = sapor::planner::filter_candidates(&catalog, &constraints);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "Veggie Bowl");

    let result = MealPlanner::new(catalog).recommend(query);
    assert_eq!(result.meal.as_ref().map(|m| m.name.as_str()), Some("Veggie Bowl"));
    assert!(result.formatted.contains("Veggie Bowl"));
    assert!(result.formatted.contains("within your budget"));
}

/// **Scenario**: No vegan meal exists, so the apology comes back with no meal.
#[test]
fn vegan_dinner_has_no_match() {
    let result = MealPlanner::new(two_meal_catalog()).recommend("vegan dinner for $100");
    assert_eq!(result.formatted, NO_MATCH_MESSAGE);
    assert!(result.meal.is_none());
    assert_eq!(result.reasoning.constraints.diet_type, Some(DietType::Vegan));
    assert_eq!(result.reasoning.constraints.meal_type, MealType::Dinner);
    assert_eq!(result.reasoning.tools_used.len(), 3);
}

/// **Scenario**: The full rubric block earns 1.0.
#[test]
fn reward_for_complete_block() {
    let text = "**Recommendation:** Grilled Chicken with Quinoa & Broccoli\n\
                **Calories:** 595\n\
                **Protein:** 45g\n\
                **Budget:** $7.50\n";
    assert!((RewardScorer.score(text) - 1.0).abs() < 1e-6);
}

#[test]
fn reward_without_block_is_zero() {
    assert_eq!(RewardScorer.score("Eat something green today."), 0.0);
}

/// **Scenario**: Calories that match the pattern but are not plain ASCII digits earn only format credit.
#[test]
fn reward_with_unparsable_calories_is_partial() {
    let text = "**Recommendation:** Soup\n\
                **Calories:** \u{ff15}\u{ff19}\u{ff15}\n\
                **Protein:** 20g\n\
                **Budget:** $3.00";
    assert!((RewardScorer.score(text) - 0.3).abs() < 1e-6);

    let oversized = text.replace("\u{ff15}\u{ff19}\u{ff15}", "10000000000");
    assert!((RewardScorer.score(&oversized) - 0.8).abs() < 1e-6);
}

/// **Scenario**: Text the planner renders scores full marks and history records the exchange.
#[test]
fn planner_output_scores_full_reward() {
    let mut planner = MealPlanner::default();
    let query = "high protein dinner under $10";
    let result = planner.plan_meal(query);
    assert!(result.meal.is_some());

    let scores = meal_correctness(&[query], &[result.formatted.as_str()], None);
    assert_eq!(scores.len(), 1);
    assert!((scores[0] - 1.0).abs() < 1e-6, "score {}", scores[0]);

    assert_eq!(
        planner.history(),
        &[Message::user(query), Message::assistant(result.formatted)]
    );
}
