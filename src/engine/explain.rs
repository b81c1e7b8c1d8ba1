//! Explanation generation for recommended tools
//!
//! Produces the teacher-facing material attached to each recommendation:
//! reasoning text, adaptation suggestions, a setup-time estimate, and
//! predicted outcomes.

use crate::domain::{GroupSize, LearningContext, LevelBucket, StudentProfile, Tool};

/// Base setup time in minutes
const BASE_SETUP_MINUTES: u32 = 2;
/// Extra setup minutes when physical materials are involved
const PHYSICAL_SETUP_MINUTES: u32 = 3;
/// Extra setup minutes for whole-class grouping
const WHOLE_CLASS_SETUP_MINUTES: u32 = 2;

/// How many learning objectives to surface in predicted outcomes
const OUTCOME_OBJECTIVE_LIMIT: usize = 2;

/// Human-readable reasoning for recommending a tool
///
/// Clauses are emitted in a fixed order and joined with "; ". A clause that
/// does not apply is omitted, never emitted empty.
pub fn reasoning(tool: &Tool, profile: &StudentProfile, context: &LearningContext) -> String {
    let mut reasons: Vec<String> = Vec::new();

    let matching_standards: Vec<&str> = tool
        .standards
        .iter()
        .filter(|s| context.standards_focus.contains(s))
        .map(String::as_str)
        .collect();
    if !matching_standards.is_empty() {
        reasons.push(format!("Aligns with standards: {}", matching_standards.join(", ")));
    }

    // The "highly effective" clause intentionally treats a missing bucket as
    // zero rather than the scoring default of 0.5.
    let effectiveness = tool
        .effectiveness_data
        .get(&profile.current_level)
        .copied()
        .unwrap_or(0.0);
    if effectiveness > 0.8 {
        reasons.push(format!(
            "Highly effective for {} students",
            profile.current_level.display_name()
        ));
    }

    if profile.has_style("visual") && tool.has_feature("visual_support") {
        reasons.push("Provides visual support matching student's learning style".to_string());
    }

    let struggle_match: Vec<&str> = profile
        .current_struggles
        .iter()
        .filter(|s| tool.learning_objectives.contains(s))
        .map(String::as_str)
        .collect();
    if !struggle_match.is_empty() {
        reasons.push(format!("Addresses current struggles: {}", struggle_match.join(", ")));
    }

    if tool.time_required <= profile.attention_span {
        reasons.push("Appropriate duration for student's attention span".to_string());
    }

    reasons.join("; ")
}

/// Adaptation suggestions for this student
pub fn adaptations(tool: &Tool, profile: &StudentProfile) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    match profile.current_level {
        LevelBucket::BelowGrade => {
            suggestions.extend([
                "Use simpler numbers".to_string(),
                "Provide additional scaffolding".to_string(),
                "Allow extra time".to_string(),
            ]);
        }
        LevelBucket::AboveGrade => {
            suggestions.extend([
                "Increase complexity".to_string(),
                "Add extension activities".to_string(),
                "Encourage peer teaching".to_string(),
            ]);
        }
        LevelBucket::AtGrade => {}
    }

    if profile.attention_span < tool.time_required {
        suggestions.push("Break into shorter segments".to_string());
    }

    if profile.needs("visual_support") {
        suggestions.push("Provide visual aids and graphic organizers".to_string());
    }

    suggestions
}

/// Estimated setup time in minutes
pub fn setup_time(tool: &Tool, context: &LearningContext) -> u32 {
    let mut minutes = BASE_SETUP_MINUTES;

    if tool.materials.iter().any(|m| m == "physical") {
        minutes += PHYSICAL_SETUP_MINUTES;
    }

    if context.group_size == GroupSize::WholeClass {
        minutes += WHOLE_CLASS_SETUP_MINUTES;
    }

    minutes
}

/// Predicted learning outcomes
pub fn expected_outcomes(tool: &Tool, profile: &StudentProfile) -> Vec<String> {
    let mut outcomes: Vec<String> = Vec::new();

    let effectiveness = tool.effectiveness_for(profile.current_level);
    if effectiveness > 0.8 {
        outcomes.push("High probability of concept mastery".to_string());
    } else if effectiveness > 0.6 {
        outcomes.push("Good progress expected".to_string());
    } else {
        outcomes.push("May need additional support".to_string());
    }

    outcomes.extend(
        tool.learning_objectives
            .iter()
            .take(OUTCOME_OBJECTIVE_LIMIT)
            .map(|obj| format!("Develop: {}", obj)),
    );

    outcomes
}
