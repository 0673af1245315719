//! Final dietary compliance pass.
//!
//! The check is soft: a meal that misses the high-protein preference is logged
//! and still returned.

use crate::meal::{Constraints, MealRecommendation, ProteinPreference};

/// Grams of protein below which a meal does not count as high protein.
pub const HIGH_PROTEIN_MIN_GRAMS: u32 = 15;

/// Passes the candidate through unchanged; `None` stays `None`.
pub fn check_dietary_restrictions(
    candidate: Option<MealRecommendation>,
    constraints: &Constraints,
) -> Option<MealRecommendation> {
    let meal = candidate?;
    if constraints.protein_preference == Some(ProteinPreference::High)
        && meal.protein < HIGH_PROTEIN_MIN_GRAMS
    {
        tracing::debug!(
            meal = %meal.name,
            protein = meal.protein,
            "Candidate below high-protein threshold; keeping it"
        );
    }
    Some(meal)
}
