//! Effectiveness scoring and ranking
//!
//! Score = historical base for the student's level bucket (blended 70/30
//! with personal history when present) plus additive boosts for learning-
//! style matches and struggle/objective overlap. Boosts are not
//! renormalized, so scores can exceed 1.0; downstream consumers rely on
//! relative ordering only.

use crate::domain::{StudentProfile, Tool};

/// Weight given to historical bucket data when personal history exists
const HISTORICAL_WEIGHT: f64 = 0.7;
/// Weight given to the student's own history with the tool
const PERSONAL_WEIGHT: f64 = 0.3;
/// Boost per matched learning style
const STYLE_BOOST: f64 = 0.1;
/// Boost per struggle the tool's objectives address
const STRUGGLE_BOOST: f64 = 0.15;

/// Learning-style tag -> accessibility feature that satisfies it
const STYLE_FEATURES: [(&str, &str); 3] = [
    ("visual", "visual_support"),
    ("auditory", "auditory_support"),
    ("kinesthetic", "motor_adaptations"),
];

/// Predicted effectiveness of a tool for a student
pub fn score_tool(tool: &Tool, profile: &StudentProfile) -> f64 {
    let mut base = tool.effectiveness_for(profile.current_level);

    if let Some(&personal) = profile.previous_tool_effectiveness.get(&tool.id) {
        base = HISTORICAL_WEIGHT * base + PERSONAL_WEIGHT * personal;
    }

    let mut style_boost = 0.0;
    for (style, feature) in STYLE_FEATURES {
        if profile.has_style(style) && tool.has_feature(feature) {
            style_boost += STYLE_BOOST;
        }
    }

    let mut struggle_boost = 0.0;
    for struggle in &profile.current_struggles {
        if tool.learning_objectives.iter().any(|o| o == struggle) {
            struggle_boost += STRUGGLE_BOOST;
        }
    }

    base + style_boost + struggle_boost
}

/// Score candidates and sort descending by score
///
/// The sort is stable, so ties keep the candidates' relative input order
/// (catalog registration order for a freshly filtered list).
pub fn rank<'t>(tools: Vec<&'t Tool>, profile: &StudentProfile) -> Vec<(&'t Tool, f64)> {
    let mut scored: Vec<(&Tool, f64)> =
        tools.into_iter().map(|t| (t, score_tool(t, profile))).collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}
