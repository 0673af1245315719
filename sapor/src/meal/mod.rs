//! Meal domain types shared by the planner pipeline.
//!
//! [`Constraints`] is produced once per query by a
//! [`ConstraintExtractor`](crate::extract::ConstraintExtractor) and is read-only afterwards.
//! [`MealRecommendation`] is a catalog entity; [`RecommendationResult`] is what a
//! pipeline run hands back to the caller.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dietary regime requested by the user. Vegan and vegetarian are mutually exclusive here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Vegetarian,
    Vegan,
}

impl DietType {
    /// Tag that a catalog entry must carry to satisfy this diet.
    pub fn as_tag(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProteinPreference {
    High,
}

/// Meal slot. Keyword scan order is [`MealType::SCAN_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Order in which keywords are looked for in a query; first hit wins.
    pub const SCAN_ORDER: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured meal preferences derived from a free-text query.
///
/// Every field except `meal_type` is optional; an absent field means the
/// corresponding filter check is skipped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    pub diet_type: Option<DietType>,
    pub max_budget: Option<f64>,
    pub calorie_target: Option<u32>,
    pub protein_preference: Option<ProteinPreference>,
    pub meal_type: MealType,
}

/// A meal in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecommendation {
    pub name: String,
    pub calories: u32,
    /// Grams of protein.
    pub protein: u32,
    /// Cost in dollars.
    pub budget: f64,
    pub dietary_tags: BTreeSet<String>,
}

impl MealRecommendation {
    pub fn new(
        name: impl Into<String>,
        calories: u32,
        protein: u32,
        budget: f64,
        dietary_tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            budget,
            dietary_tags: dietary_tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags.contains(tag)
    }
}

/// Why a recommendation was produced: the constraints used and the stages that ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reasoning {
    pub constraints: Constraints,
    pub tools_used: Vec<String>,
}

/// Final output of one planner run. `meal` is `None` iff no candidate survived filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub formatted: String,
    pub meal: Option<MealRecommendation>,
    pub reasoning: Reasoning,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Default constraints carry no filters and the lunch slot.
    #[test]
    fn default_constraints_are_unconstrained_lunch() {
        let c = Constraints::default();
        assert_eq!(c.diet_type, None);
        assert_eq!(c.max_budget, None);
        assert_eq!(c.calorie_target, None);
        assert_eq!(c.protein_preference, None);
        assert_eq!(c.meal_type, MealType::Lunch);
    }

    /// **Scenario**: Enums serialize as lowercase strings.
    #[test]
    fn enums_serialize_lowercase() {
        let c = Constraints {
            diet_type: Some(DietType::Vegan),
            protein_preference: Some(ProteinPreference::High),
            meal_type: MealType::Dinner,
            ..Default::default()
        };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["diet_type"], "vegan");
        assert_eq!(v["protein_preference"], "high");
        assert_eq!(v["meal_type"], "dinner");
        assert!(v["max_budget"].is_null());
    }

    #[test]
    fn meal_has_tag() {
        let meal = MealRecommendation::new("Salad", 300, 8, 3.0, ["vegetarian", "vegan"]);
        assert!(meal.has_tag("vegan"));
        assert!(!meal.has_tag("high-protein"));
        assert_eq!(DietType::Vegetarian.as_tag(), "vegetarian");
    }
}
