//! Constraint extraction: free-text query → [`Constraints`].
//!
//! [`ConstraintExtractor`] is the seam for swapping in a smarter parser; the
//! planner only depends on the trait. [`RegexExtractor`] is the keyword/pattern
//! implementation used by default. Extraction is total: unmatched rules leave
//! their field absent (or `lunch` for the meal slot).

use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::meal::{Constraints, DietType, MealType, ProteinPreference};

/// First `$` amount, optionally with exactly two decimals.
static BUDGET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d+(?:\.\d{2})?)").expect("Valid regex pattern"));

/// Digits followed (after optional whitespace) by `cal`. Applied to the lowercased query.
static CALORIE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*cal").expect("Valid regex pattern"));

/// `high` then at most one separator character then `protein`. Applied to the lowercased query.
static HIGH_PROTEIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"high.?protein").expect("Valid regex pattern"));

/// Turns a raw query into a constraint record. Must never fail.
pub trait ConstraintExtractor: Send + Sync {
    fn extract(&self, query: &str) -> Constraints;
}

/// Keyword and pattern based extractor.
///
/// When a query mentions both "vegan" and "vegetarian", vegan wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexExtractor;

impl RegexExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ConstraintExtractor for RegexExtractor {
    fn extract(&self, query: &str) -> Constraints {
        let lower = query.to_lowercase();
        let constraints = Constraints {
            diet_type: diet_type(&lower),
            max_budget: max_budget(query),
            calorie_target: calorie_target(&lower),
            protein_preference: HIGH_PROTEIN_REGEX
                .is_match(&lower)
                .then_some(ProteinPreference::High),
            meal_type: meal_type(&lower),
        };
        tracing::debug!(query = query, ?constraints, "Extracted constraints");
        constraints
    }
}

fn diet_type(lower: &str) -> Option<DietType> {
    if lower.contains("vegan") {
        Some(DietType::Vegan)
    } else if lower.contains("vegetarian") {
        Some(DietType::Vegetarian)
    } else {
        None
    }
}

fn max_budget(query: &str) -> Option<f64> {
    BUDGET_REGEX
        .captures(query)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn calorie_target(lower: &str) -> Option<u32> {
    CALORIE_REGEX
        .captures(lower)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_saturating_u32(m.as_str()))
}

/// Parses a digit run, saturating at `u32::MAX` on overflow.
///
/// `None` only for text that is not a plain number (e.g. non-ASCII digits).
pub(crate) fn parse_saturating_u32(digits: &str) -> Option<u32> {
    match digits.parse::<u32>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

fn meal_type(lower: &str) -> MealType {
    MealType::SCAN_ORDER
        .into_iter()
        .find(|t| lower.contains(t.as_str()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(q: &str) -> Constraints {
        RegexExtractor.extract(q)
    }

    /// **Scenario**: A query with no recognizable keywords yields the defaults.
    #[test]
    fn no_keywords_yields_defaults() {
        assert_eq!(extract("something tasty please"), Constraints::default());
        assert_eq!(extract(""), Constraints::default());
    }

    #[test]
    fn vegetarian_lunch_under_five_dollars() {
        let c = extract("I want a vegetarian lunch under $5");
        assert_eq!(c.diet_type, Some(DietType::Vegetarian));
        assert_eq!(c.max_budget, Some(5.0));
        assert_eq!(c.meal_type, MealType::Lunch);
        assert_eq!(c.calorie_target, None);
        assert_eq!(c.protein_preference, None);
    }

    /// **Scenario**: Vegan wins when both diet keywords appear, in either order.
    #[test]
    fn vegan_wins_over_vegetarian() {
        assert_eq!(
            extract("vegetarian or vegan dinner").diet_type,
            Some(DietType::Vegan)
        );
        assert_eq!(
            extract("vegan or vegetarian dinner").diet_type,
            Some(DietType::Vegan)
        );
    }

    #[test]
    fn diet_match_is_case_insensitive() {
        assert_eq!(extract("VEGETARIAN please").diet_type, Some(DietType::Vegetarian));
        assert_eq!(extract("Vegan Snack").meal_type, MealType::Snack);
    }

    #[test]
    fn high_protein_accepts_optional_separator() {
        for q in ["high protein", "High-Protein bowl", "highprotein", "HIGH_PROTEIN"] {
            assert_eq!(
                extract(q).protein_preference,
                Some(ProteinPreference::High),
                "query: {}",
                q
            );
        }
        assert_eq!(extract("high in protein").protein_preference, None);
    }

    /// **Scenario**: Only the first dollar amount is used; two decimals are kept.
    #[test]
    fn budget_takes_first_amount() {
        assert_eq!(extract("between $7.25 and $10").max_budget, Some(7.25));
        assert_eq!(extract("$12 max").max_budget, Some(12.0));
        assert_eq!(extract("costs 12 dollars").max_budget, None);
    }

    #[test]
    fn calorie_target_allows_whitespace() {
        assert_eq!(extract("about 500 calories").calorie_target, Some(500));
        assert_eq!(extract("600cal dinner").calorie_target, Some(600));
        assert_eq!(extract("600 CAL").calorie_target, Some(600));
        assert_eq!(extract("600 kcal").calorie_target, None);
    }

    /// **Scenario**: An amount too large for the calorie field saturates instead of vanishing.
    #[test]
    fn calorie_overflow_saturates() {
        assert_eq!(extract("99999999999 cal").calorie_target, Some(u32::MAX));
        assert_eq!(extract("\u{ff15}\u{ff10}\u{ff10} cal").calorie_target, None);
    }

    /// **Scenario**: Meal type follows the fixed scan order, not position in the query.
    #[test]
    fn meal_type_follows_scan_order() {
        assert_eq!(extract("dinner or breakfast").meal_type, MealType::Breakfast);
        assert_eq!(extract("snack or dinner").meal_type, MealType::Dinner);
        assert_eq!(extract("a late snack").meal_type, MealType::Snack);
    }

    #[test]
    fn extraction_is_deterministic() {
        let q = "high-protein vegan breakfast, 450 cal, under $8.50";
        assert_eq!(extract(q), extract(q));
        let c = extract(q);
        assert_eq!(c.diet_type, Some(DietType::Vegan));
        assert_eq!(c.calorie_target, Some(450));
        assert_eq!(c.max_budget, Some(8.5));
        assert_eq!(c.meal_type, MealType::Breakfast);
    }
}
