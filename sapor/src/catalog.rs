//! Meal catalog: id → meal mapping with stable insertion order.
//!
//! Iteration order is the order entries were inserted; the optimizer's tie-break
//! depends on it, so the catalog never reorders.

use thiserror::Error;

use crate::meal::MealRecommendation;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate meal id: {0}")]
    DuplicateId(String),
}

/// Read-only collection of meals keyed by an opaque id.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    entries: Vec<(String, MealRecommendation)>,
}

impl MealCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a meal under `id`. Ids are unique; a second insert with the same id fails.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        meal: MealRecommendation,
    ) -> Result<(), CatalogError> {
        let id = id.into();
        if self.entries.iter().any(|(k, _)| *k == id) {
            return Err(CatalogError::DuplicateId(id));
        }
        self.entries.push((id, meal));
        Ok(())
    }

    /// Builds a catalog from `(id, meal)` pairs, failing on the first duplicate id.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, MealRecommendation)>,
        K: Into<String>,
    {
        let mut catalog = Self::new();
        for (id, meal) in entries {
            catalog.insert(id, meal)?;
        }
        Ok(catalog)
    }

    /// The two meals the planner ships with.
    pub fn default_catalog() -> Self {
        Self {
            entries: vec![
                (
                    "greek_yogurt_parfait".to_string(),
                    MealRecommendation::new(
                        "Greek Yogurt Parfait with Berries",
                        395,
                        12,
                        4.50,
                        ["vegetarian", "gluten-free", "high-protein"],
                    ),
                ),
                (
                    "chicken_quinoa".to_string(),
                    MealRecommendation::new(
                        "Grilled Chicken with Quinoa & Broccoli",
                        595,
                        45,
                        7.50,
                        ["high-protein", "low-carb"],
                    ),
                ),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&MealRecommendation> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, m)| m)
    }

    /// Meals in insertion order.
    pub fn meals(&self) -> impl Iterator<Item = &MealRecommendation> {
        self.entries.iter().map(|(_, m)| m)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// External provider of the meal catalog. Reads are synchronous and never mutate.
pub trait MealSource: Send + Sync {
    fn catalog(&self) -> MealCatalog;
}

/// Source backed by [`MealCatalog::default_catalog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMeals;

impl MealSource for BuiltinMeals {
    fn catalog(&self) -> MealCatalog {
        MealCatalog::default_catalog()
    }
}

impl MealSource for MealCatalog {
    fn catalog(&self) -> MealCatalog {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str) -> MealRecommendation {
        MealRecommendation::new(name, 400, 20, 5.0, ["vegetarian"])
    }

    /// **Scenario**: Iteration follows insertion order, not id order.
    #[test]
    fn iteration_preserves_insertion_order() {
        let catalog =
            MealCatalog::from_entries([("z", meal("Zucchini")), ("a", meal("Apple"))]).unwrap();
        let names: Vec<_> = catalog.meals().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Zucchini", "Apple"]);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), ["z", "a"]);
    }

    /// **Scenario**: Inserting an existing id is rejected and the catalog is unchanged.
    #[test]
    fn duplicate_id_is_rejected() {
        let mut catalog = MealCatalog::new();
        catalog.insert("x", meal("First")).unwrap();
        match catalog.insert("x", meal("Second")) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "x"),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("x").unwrap().name, "First");
    }

    #[test]
    fn default_catalog_has_builtin_meals() {
        let catalog = BuiltinMeals.catalog();
        assert_eq!(catalog.len(), 2);
        let parfait = catalog.get("greek_yogurt_parfait").unwrap();
        assert_eq!(parfait.calories, 395);
        assert!(parfait.has_tag("vegetarian"));
        let chicken = catalog.get("chicken_quinoa").unwrap();
        assert_eq!(chicken.protein, 45);
        assert!(!chicken.has_tag("vegetarian"));
    }
}
