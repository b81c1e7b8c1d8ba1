//! Candidate filters
//!
//! Each filter is a pure predicate over a Tool; the engine applies them in
//! order and keeps survivors in their original order. Filters never mutate
//! catalog data.

use log::debug;

use crate::domain::{LearningContext, StudentProfile, Tool};

/// Trait for filters that narrow the candidate tool list
pub trait CandidateFilter {
    /// Whether a tool survives this filter
    fn keep(&self, tool: &Tool) -> bool;

    /// Get a description of what this filter checks
    fn description(&self) -> &str {
        "filter"
    }
}

/// Apply a filter to a candidate list, preserving order
pub fn apply<'t>(filter: &dyn CandidateFilter, tools: Vec<&'t Tool>) -> Vec<&'t Tool> {
    let before = tools.len();
    let kept: Vec<&Tool> = tools.into_iter().filter(|t| filter.keep(t)).collect();
    debug!("{}: {} of {} tools kept", filter.description(), kept.len(), before);
    kept
}

/// Removes tools incompatible with the session's time, materials, and grouping
pub struct ContextFilter<'a> {
    context: &'a LearningContext,
}

impl<'a> ContextFilter<'a> {
    pub fn new(context: &'a LearningContext) -> Self {
        Self { context }
    }
}

impl CandidateFilter for ContextFilter<'_> {
    fn keep(&self, tool: &Tool) -> bool {
        if tool.time_required > self.context.time_available {
            return false;
        }

        // One available material option is enough
        if !tool.materials.iter().any(|m| self.context.has_material(m)) {
            return false;
        }

        tool.supports_group_size(self.context.group_size)
    }

    fn description(&self) -> &str {
        "context filter"
    }
}

/// Removes tools the student is not ready for or cannot access
pub struct ProfileFilter<'a> {
    profile: &'a StudentProfile,
}

impl<'a> ProfileFilter<'a> {
    pub fn new(profile: &'a StudentProfile) -> Self {
        Self { profile }
    }
}

impl CandidateFilter for ProfileFilter<'_> {
    fn keep(&self, tool: &Tool) -> bool {
        // All prerequisites must be mastered; an empty set always passes
        if !tool.prerequisites.iter().all(|p| self.profile.has_mastered(p)) {
            return false;
        }

        if tool.time_required > self.profile.attention_span {
            return false;
        }

        // Only the visual_support need is enforced; other need tags are
        // accepted but not checked.
        if self.profile.needs("visual_support") && !tool.has_feature("visual_support") {
            return false;
        }

        true
    }

    fn description(&self) -> &str {
        "profile filter"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{Category, Difficulty, GroupSize, LevelBucket};

    fn base_tool(id: &str) -> Tool {
        Tool {
            id: id.to_string(),
            name: format!("Tool {}", id),
            description: String::new(),
            category: Category::Practice,
            difficulty: Difficulty::Beginner,
            standards: vec![],
            time_required: 15,
            materials: vec!["digital".to_string()],
            group_size: vec![GroupSize::Individual],
            prerequisites: vec![],
            learning_objectives: vec![],
            accessibility_features: HashMap::from([("visual_support".to_string(), true)]),
            effectiveness_data: HashMap::new(),
            setup_instructions: String::new(),
            execution_steps: vec![],
            variations: vec![],
            next_steps: vec![],
        }
    }

    fn base_context() -> LearningContext {
        LearningContext {
            time_available: 20,
            materials_available: vec!["digital".to_string()],
            group_size: GroupSize::Individual,
            lesson_phase: "practice".to_string(),
            standards_focus: vec![],
        }
    }

    fn base_profile() -> StudentProfile {
        StudentProfile {
            student_id: "s1".to_string(),
            current_level: LevelBucket::AtGrade,
            learning_style: vec![],
            attention_span: 20,
            previous_tool_effectiveness: HashMap::new(),
            current_struggles: vec![],
            mastered_concepts: vec![],
            accessibility_needs: vec![],
        }
    }

    #[test]
    fn test_context_filter_passes_compatible_tool() {
        let context = base_context();
        let filter = ContextFilter::new(&context);
        assert!(filter.keep(&base_tool("a")));
    }

    #[test]
    fn test_context_filter_rejects_over_time_budget() {
        let context = base_context();
        let filter = ContextFilter::new(&context);
        let mut tool = base_tool("a");
        tool.time_required = 25;
        assert!(!filter.keep(&tool));
    }

    #[test]
    fn test_context_filter_time_budget_is_inclusive() {
        let context = base_context();
        let filter = ContextFilter::new(&context);
        let mut tool = base_tool("a");
        tool.time_required = 20;
        assert!(filter.keep(&tool));
    }

    #[test]
    fn test_context_filter_rejects_missing_materials() {
        let context = base_context();
        let filter = ContextFilter::new(&context);
        let mut tool = base_tool("a");
        tool.materials = vec!["physical".to_string()];
        assert!(!filter.keep(&tool));
    }

    #[test]
    fn test_context_filter_one_material_option_suffices() {
        let context = base_context();
        let filter = ContextFilter::new(&context);
        let mut tool = base_tool("a");
        tool.materials = vec!["physical".to_string(), "digital".to_string()];
        assert!(filter.keep(&tool));
    }

    #[test]
    fn test_context_filter_rejects_group_size_mismatch() {
        let context = base_context();
        let filter = ContextFilter::new(&context);
        let mut tool = base_tool("a");
        tool.group_size = vec![GroupSize::SmallGroup, GroupSize::WholeClass];
        assert!(!filter.keep(&tool));
    }

    #[test]
    fn test_profile_filter_passes_no_prerequisites() {
        let profile = base_profile();
        let filter = ProfileFilter::new(&profile);
        assert!(filter.keep(&base_tool("a")));
    }

    #[test]
    fn test_profile_filter_rejects_unmastered_prerequisite() {
        let profile = base_profile();
        let filter = ProfileFilter::new(&profile);
        let mut tool = base_tool("a");
        tool.prerequisites = vec!["counting_fluency".to_string()];
        assert!(!filter.keep(&tool));
    }

    #[test]
    fn test_profile_filter_requires_all_prerequisites() {
        let mut profile = base_profile();
        profile.mastered_concepts = vec!["counting_fluency".to_string()];
        let filter = ProfileFilter::new(&profile);

        let mut tool = base_tool("a");
        tool.prerequisites =
            vec!["counting_fluency".to_string(), "addition_understanding".to_string()];
        assert!(!filter.keep(&tool));

        profile.mastered_concepts.push("addition_understanding".to_string());
        let filter = ProfileFilter::new(&profile);
        assert!(filter.keep(&tool));
    }

    #[test]
    fn test_profile_filter_rejects_over_attention_span() {
        let mut profile = base_profile();
        profile.attention_span = 10;
        let filter = ProfileFilter::new(&profile);
        assert!(!filter.keep(&base_tool("a")));
    }

    #[test]
    fn test_profile_filter_enforces_visual_support_need() {
        let mut profile = base_profile();
        profile.accessibility_needs = vec!["visual_support".to_string()];
        let filter = ProfileFilter::new(&profile);

        let mut tool = base_tool("a");
        assert!(filter.keep(&tool));

        tool.accessibility_features.insert("visual_support".to_string(), false);
        assert!(!filter.keep(&tool));
    }

    #[test]
    fn test_profile_filter_ignores_other_accessibility_needs() {
        let mut profile = base_profile();
        profile.accessibility_needs = vec!["auditory_support".to_string()];
        let filter = ProfileFilter::new(&profile);

        // Tool has no auditory support, but only visual_support is enforced
        let tool = base_tool("a");
        assert!(filter.keep(&tool));
    }

    #[test]
    fn test_apply_preserves_order() {
        let context = base_context();
        let filter = ContextFilter::new(&context);

        let a = base_tool("a");
        let mut b = base_tool("b");
        b.time_required = 25;
        let c = base_tool("c");

        let kept = apply(&filter, vec![&a, &b, &c]);
        let ids: Vec<&str> = kept.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_apply_empty_input() {
        let context = base_context();
        let filter = ContextFilter::new(&context);
        assert!(apply(&filter, vec![]).is_empty());
    }
}
