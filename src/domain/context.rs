//! Learning context for a single recommendation request
//!
//! Captures the session constraints a teacher is working under: time,
//! materials on hand, grouping, and which standards the lesson targets.

use serde::{Deserialize, Serialize};

/// Group-size mode of a session or tool
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GroupSize {
    Individual,
    SmallGroup,
    WholeClass,
}

impl std::fmt::Display for GroupSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::SmallGroup => write!(f, "small_group"),
            Self::WholeClass => write!(f, "whole_class"),
        }
    }
}

/// Current learning context and constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningContext {
    /// Minutes available in the session (> 0)
    pub time_available: u32,

    /// Material types on hand ("digital", "physical", "none")
    #[serde(default)]
    pub materials_available: Vec<String>,

    /// Grouping for this session
    pub group_size: GroupSize,

    /// Lesson phase tag; informational only, never filtered on
    #[serde(default)]
    pub lesson_phase: String,

    /// Standard codes the lesson targets
    #[serde(default)]
    pub standards_focus: Vec<String>,
}

impl LearningContext {
    /// Check whether a material type is available
    pub fn has_material(&self, material: &str) -> bool {
        self.materials_available.iter().any(|m| m == material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_size_display() {
        assert_eq!(GroupSize::Individual.to_string(), "individual");
        assert_eq!(GroupSize::SmallGroup.to_string(), "small_group");
        assert_eq!(GroupSize::WholeClass.to_string(), "whole_class");
    }

    #[test]
    fn test_group_size_serde() {
        let json = serde_json::to_string(&GroupSize::SmallGroup).unwrap();
        assert_eq!(json, "\"small_group\"");
        let back: GroupSize = serde_json::from_str("\"whole_class\"").unwrap();
        assert_eq!(back, GroupSize::WholeClass);
    }

    #[test]
    fn test_has_material() {
        let context = LearningContext {
            time_available: 20,
            materials_available: vec!["digital".to_string(), "physical".to_string()],
            group_size: GroupSize::Individual,
            lesson_phase: "introduction".to_string(),
            standards_focus: vec!["3.OA.A.1".to_string()],
        };
        assert!(context.has_material("digital"));
        assert!(!context.has_material("none"));
    }

    #[test]
    fn test_context_deserialize_defaults() {
        let json = r#"{"time_available": 30, "group_size": "individual"}"#;
        let context: LearningContext = serde_json::from_str(json).unwrap();
        assert!(context.materials_available.is_empty());
        assert!(context.lesson_phase.is_empty());
        assert!(context.standards_focus.is_empty());
    }
}
