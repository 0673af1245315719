//! Value optimization: pick the candidate with the best nutrition per dollar.

use crate::meal::MealRecommendation;

/// `(protein + calories / 100) / budget`, or 0 when the meal is free.
pub fn value_score(meal: &MealRecommendation) -> f64 {
    if meal.budget > 0.0 {
        (f64::from(meal.protein) + f64::from(meal.calories) / 100.0) / meal.budget
    } else {
        0.0
    }
}

/// Returns the highest-scoring candidate; the first one wins on ties.
pub fn optimize_budget(candidates: &[MealRecommendation]) -> Option<&MealRecommendation> {
    let mut best: Option<(&MealRecommendation, f64)> = None;
    for meal in candidates {
        let score = value_score(meal);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((meal, score)),
        }
    }
    if let Some((meal, score)) = best {
        tracing::debug!(meal = %meal.name, score, "Selected best value candidate");
    }
    best.map(|(meal, _)| meal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str, calories: u32, protein: u32, budget: f64) -> MealRecommendation {
        MealRecommendation::new(name, calories, protein, budget, Vec::<String>::new())
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(optimize_budget(&[]).is_none());
    }

    #[test]
    fn value_score_formula() {
        // (12 + 3.95) / 4.5
        let s = value_score(&meal("Parfait", 395, 12, 4.5));
        assert!((s - 15.95 / 4.5).abs() < 1e-9);
        assert_eq!(value_score(&meal("Free", 500, 30, 0.0)), 0.0);
    }

    #[test]
    fn picks_highest_value() {
        let meals = vec![
            meal("Parfait", 395, 12, 4.5),
            meal("Chicken", 595, 45, 7.5),
        ];
        assert_eq!(optimize_budget(&meals).unwrap().name, "Chicken");
    }

    /// **Scenario**: Equal scores resolve to the earliest candidate, on every call.
    #[test]
    fn ties_resolve_to_first() {
        let meals = vec![
            meal("First", 400, 20, 4.0),
            meal("Second", 400, 20, 4.0),
            meal("Cheaper score", 100, 1, 10.0),
        ];
        for _ in 0..3 {
            assert_eq!(optimize_budget(&meals).unwrap().name, "First");
        }
    }

    /// **Scenario**: Zero-cost meals score 0 and never cause a division fault.
    #[test]
    fn free_meals_score_zero() {
        let meals = vec![meal("Free", 900, 80, 0.0), meal("Paid", 200, 2, 50.0)];
        assert_eq!(optimize_budget(&meals).unwrap().name, "Paid");
        let only_free = vec![meal("Free", 900, 80, 0.0)];
        assert_eq!(optimize_budget(&only_free).unwrap().name, "Free");
    }
}
