//! Candidate filtering: keep the catalog meals that satisfy every present constraint.

use crate::catalog::MealCatalog;
use crate::meal::{Constraints, MealRecommendation};

/// Lower and upper bound of the calorie window, as fractions of the target.
const CALORIE_WINDOW: (f64, f64) = (0.8, 1.2);

/// Returns the meals that satisfy `constraints`, in catalog order.
///
/// Absent constraints are skipped. An empty result is a valid outcome.
pub fn filter_candidates(
    catalog: &MealCatalog,
    constraints: &Constraints,
) -> Vec<MealRecommendation> {
    let candidates: Vec<MealRecommendation> = catalog
        .meals()
        .filter(|meal| satisfies(meal, constraints))
        .cloned()
        .collect();
    tracing::debug!(
        catalog = catalog.len(),
        candidates = candidates.len(),
        "Filtered candidates"
    );
    candidates
}

/// True when `meal` passes the diet, budget and calorie checks.
pub fn satisfies(meal: &MealRecommendation, constraints: &Constraints) -> bool {
    if let Some(diet) = constraints.diet_type {
        if !meal.has_tag(diet.as_tag()) {
            return false;
        }
    }
    if let Some(max_budget) = constraints.max_budget {
        if meal.budget > max_budget {
            return false;
        }
    }
    if let Some(target) = constraints.calorie_target {
        let target = f64::from(target);
        let calories = f64::from(meal.calories);
        if calories < target * CALORIE_WINDOW.0 || calories > target * CALORIE_WINDOW.1 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::DietType;

    fn catalog() -> MealCatalog {
        MealCatalog::from_entries([
            (
                "parfait",
                MealRecommendation::new("Parfait", 400, 12, 4.50, ["vegetarian"]),
            ),
            (
                "chicken",
                MealRecommendation::new("Chicken", 600, 45, 7.50, ["high-protein"]),
            ),
            (
                "tofu",
                MealRecommendation::new("Tofu Bowl", 500, 25, 6.00, ["vegan", "vegetarian"]),
            ),
        ])
        .unwrap()
    }

    fn names(meals: &[MealRecommendation]) -> Vec<&str> {
        meals.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn no_constraints_keeps_everything_in_order() {
        let out = filter_candidates(&catalog(), &Constraints::default());
        assert_eq!(names(&out), ["Parfait", "Chicken", "Tofu Bowl"]);
    }

    #[test]
    fn diet_requires_tag() {
        let c = Constraints {
            diet_type: Some(DietType::Vegetarian),
            ..Default::default()
        };
        assert_eq!(names(&filter_candidates(&catalog(), &c)), ["Parfait", "Tofu Bowl"]);
    }

    /// **Scenario**: Budget bound is inclusive.
    #[test]
    fn budget_is_inclusive() {
        let c = Constraints {
            max_budget: Some(6.0),
            ..Default::default()
        };
        assert_eq!(names(&filter_candidates(&catalog(), &c)), ["Parfait", "Tofu Bowl"]);
    }

    /// **Scenario**: A zero budget is a real constraint, not "absent".
    #[test]
    fn zero_budget_filters_everything_priced() {
        let c = Constraints {
            max_budget: Some(0.0),
            ..Default::default()
        };
        assert!(filter_candidates(&catalog(), &c).is_empty());
    }

    /// **Scenario**: Calorie window is [0.8, 1.2] × target, both ends inclusive.
    #[test]
    fn calorie_window_inclusive() {
        let c = Constraints {
            calorie_target: Some(500),
            ..Default::default()
        };
        // 400 = 0.8 * 500, 600 = 1.2 * 500
        assert_eq!(
            names(&filter_candidates(&catalog(), &c)),
            ["Parfait", "Chicken", "Tofu Bowl"]
        );
        let c = Constraints {
            calorie_target: Some(700),
            ..Default::default()
        };
        // window 560..=840
        assert_eq!(names(&filter_candidates(&catalog(), &c)), ["Chicken"]);
    }

    /// **Scenario**: Adding a stricter constraint never grows the candidate set.
    #[test]
    fn stricter_constraints_are_monotonic() {
        let loose = Constraints::default();
        let mut strict = loose.clone();
        let base = filter_candidates(&catalog(), &loose).len();
        strict.max_budget = Some(7.0);
        let with_budget = filter_candidates(&catalog(), &strict).len();
        strict.diet_type = Some(DietType::Vegan);
        let with_diet = filter_candidates(&catalog(), &strict).len();
        strict.calorie_target = Some(300);
        let with_calories = filter_candidates(&catalog(), &strict).len();
        assert!(base >= with_budget);
        assert!(with_budget >= with_diet);
        assert!(with_diet >= with_calories);
        assert_eq!(with_calories, 0);
    }
}
