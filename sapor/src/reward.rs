//! Rubric-based reward for generated recommendation text.
//!
//! A completion earns credit only when it carries the recommendation block
//! rendered by the planner: name, calories, protein in grams and a dollar
//! budget, in that order. Scores are always within `[0.0, 1.0]`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::parse_saturating_u32;

static RECOMMENDATION_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\*\*Recommendation:\*\*\s*(.+?)\n.*?\*\*Calories:\*\*\s*(\d+).*?\*\*Protein:\*\*\s*(\d+)g.*?\*\*Budget:\*\*\s*\$([0-9.]+)",
    )
    .expect("Valid regex pattern")
});

/// Credit for a structurally valid block.
pub const FORMAT_REWARD: f32 = 0.3;
const CALORIE_REWARD: f32 = 0.2;
const PROTEIN_REWARD: f32 = 0.2;
const BUDGET_REWARD: f32 = 0.3;
const MAX_REWARD: f32 = 1.0;
const MAX_NAME_WORDS: usize = 5;

/// Fields pulled out of a matched block, before numeric parsing.
///
/// Oversized digit runs saturate and so only miss their range bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawBlock<'a> {
    name: &'a str,
    calories: &'a str,
    protein: &'a str,
    budget: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Nutrition {
    calories: u32,
    protein: u32,
    budget: f64,
}

impl RawBlock<'_> {
    fn parse(&self) -> Option<Nutrition> {
        Some(Nutrition {
            calories: parse_saturating_u32(self.calories)?,
            protein: parse_saturating_u32(self.protein)?,
            budget: self.budget.parse().ok()?,
        })
    }
}

fn find_block(completion: &str) -> Option<RawBlock<'_>> {
    let caps = RECOMMENDATION_BLOCK.captures(completion)?;
    Some(RawBlock {
        name: caps.get(1)?.as_str(),
        calories: caps.get(2)?.as_str(),
        protein: caps.get(3)?.as_str(),
        budget: caps.get(4)?.as_str(),
    })
}

/// Short ASCII names look like real dishes rather than generated noise.
pub fn is_plausible_meal_name(name: &str) -> bool {
    name.split_whitespace().count() <= MAX_NAME_WORDS && name.is_ascii()
}

/// Stateless scorer; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardScorer;

impl RewardScorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores one completion.
    ///
    /// No block gives `0.0`. A block whose numbers do not parse gives
    /// [`FORMAT_REWARD`]. Otherwise calories in `200..=1000`, protein in
    /// `5..=100` and a positive budget each add to the format credit.
    pub fn score(&self, completion: &str) -> f32 {
        let Some(block) = find_block(completion) else {
            return 0.0;
        };
        let Some(nutrition) = block.parse() else {
            tracing::debug!(?block, "Recommendation block has unparsable numbers");
            return FORMAT_REWARD;
        };

        let mut reward = FORMAT_REWARD;
        if (200..=1000).contains(&nutrition.calories) {
            reward += CALORIE_REWARD;
        }
        if (5..=100).contains(&nutrition.protein) {
            reward += PROTEIN_REWARD;
        }
        if nutrition.budget > 0.0 {
            reward += BUDGET_REWARD;
        }
        // Name sanity is already covered by the format credit.
        tracing::trace!(plausible_name = is_plausible_meal_name(block.name), reward);
        reward.min(MAX_REWARD)
    }

    /// Scores completions pairwise with prompts, in input order.
    ///
    /// Pairs are zipped, so the shorter sequence bounds the output. Prompts and
    /// metadata do not affect the score.
    pub fn score_batch<P, C>(
        &self,
        prompts: &[P],
        completions: &[C],
        _metadata: Option<&serde_json::Value>,
    ) -> Vec<f32>
    where
        P: AsRef<str>,
        C: AsRef<str>,
    {
        completions
            .iter()
            .zip(prompts)
            .map(|(completion, _prompt)| self.score(completion.as_ref()))
            .collect()
    }
}

/// Trainer-facing batch reward: one score per (prompt, completion) pair.
pub fn meal_correctness<P, C>(
    prompts: &[P],
    completions: &[C],
    metadata: Option<&serde_json::Value>,
) -> Vec<f32>
where
    P: AsRef<str>,
    C: AsRef<str>,
{
    RewardScorer::new().score_batch(prompts, completions, metadata)
}
