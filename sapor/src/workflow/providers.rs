//! External data providers used by the planner workflow.
//!
//! Reads are synchronous and already resolved; timeouts or retries, if a real
//! backend needs them, belong in the provider implementation.

use super::state::{Candidate, Deal};

/// Source of local eating-out deals.
pub trait DealProvider: Send + Sync {
    fn deals(&self) -> Vec<Deal>;
}

/// Source of home-meal candidates.
pub trait CandidateProvider: Send + Sync {
    fn candidates(&self) -> Vec<Candidate>;
}

/// Fixed in-memory deal list.
#[derive(Debug, Clone)]
pub struct StaticDealProvider {
    deals: Vec<Deal>,
}

impl StaticDealProvider {
    pub fn new(deals: Vec<Deal>) -> Self {
        Self { deals }
    }
}

impl Default for StaticDealProvider {
    fn default() -> Self {
        Self::new(vec![
            Deal {
                place: "Green Garden".to_string(),
                item: "Veggie Wrap".to_string(),
                price: 5.0,
                location: "123 Main St".to_string(),
            },
            Deal {
                place: "Burger Joint".to_string(),
                item: "Cheeseburger".to_string(),
                price: 6.0,
                location: "456 Elm St".to_string(),
            },
        ])
    }
}

impl DealProvider for StaticDealProvider {
    fn deals(&self) -> Vec<Deal> {
        self.deals.clone()
    }
}

/// Fixed in-memory candidate list.
#[derive(Debug, Clone)]
pub struct StaticCandidateProvider {
    candidates: Vec<Candidate>,
}

impl StaticCandidateProvider {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl Default for StaticCandidateProvider {
    fn default() -> Self {
        Self::new(vec![
            Candidate {
                name: "Home Salad".to_string(),
                cost: 3.0,
                kind: "vegetarian".to_string(),
            },
            Candidate {
                name: "Grilled Chicken".to_string(),
                cost: 5.0,
                kind: "non-vegetarian".to_string(),
            },
        ])
    }
}

impl CandidateProvider for StaticCandidateProvider {
    fn candidates(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }
}
