//! Recommendation output records
//!
//! A Recommendation bundles a ranked tool with its predicted effectiveness
//! and the explanation material a teacher needs to act on it. It lives only
//! for the duration of one response; the caller owns it afterwards.

use serde::{Deserialize, Serialize};

use super::tool::Tool;

/// One ranked, explained tool recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended tool
    pub tool: Tool,

    /// Predicted effectiveness; may exceed 1.0 (boosts are additive)
    pub effectiveness_score: f64,

    /// 1-based position in the ranked list
    pub rank: usize,

    /// Delimited reasoning clauses explaining the pick
    pub reasoning: String,

    /// Suggested adaptations for this student
    pub adaptations: Vec<String>,

    /// Estimated setup time in minutes
    pub setup_time: u32,

    /// Qualitative outcome predictions
    pub expected_outcomes: Vec<String>,
}
