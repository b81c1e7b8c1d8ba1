//! Educational tool records
//!
//! A Tool is an immutable catalog entry describing one classroom activity:
//! what it teaches, what it needs, and how well it has historically worked
//! for each student level bucket.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::context::GroupSize;
use super::profile::LevelBucket;

/// Category of an educational tool
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Diagnostic or formative assessment
    Assessment,
    /// Guided hands-on learning
    InteractiveLearning,
    /// Fluency/skill practice
    Practice,
    /// Game-format activity
    GameBased,
    /// Reteaching for struggling students
    Remediation,
    /// Enrichment beyond grade level
    Extension,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assessment => write!(f, "assessment"),
            Self::InteractiveLearning => write!(f, "interactive_learning"),
            Self::Practice => write!(f, "practice"),
            Self::GameBased => write!(f, "game_based"),
            Self::Remediation => write!(f, "remediation"),
            Self::Extension => write!(f, "extension"),
        }
    }
}

/// Difficulty tier of a tool
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    /// Adjusts to student performance
    Adaptive,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
            Self::Adaptive => write!(f, "adaptive"),
        }
    }
}

/// An educational tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Unique identifier within the catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// What the tool is and when to use it
    pub description: String,

    /// Tool category
    pub category: Category,

    /// Difficulty tier
    pub difficulty: Difficulty,

    /// Curriculum standard codes addressed (e.g. "3.OA.A.1")
    pub standards: Vec<String>,

    /// Minutes the activity takes, excluding setup (> 0)
    pub time_required: u32,

    /// Material options; any one being available is enough
    pub materials: Vec<String>,

    /// Group-size modes the tool supports
    pub group_size: Vec<GroupSize>,

    /// Concept ids the student must have mastered first
    pub prerequisites: Vec<String>,

    /// Learning-objective ids the tool develops
    pub learning_objectives: Vec<String>,

    /// Accessibility feature name -> supported
    #[serde(default)]
    pub accessibility_features: HashMap<String, bool>,

    /// Level bucket -> historical effectiveness in [0, 1]
    #[serde(default)]
    pub effectiveness_data: HashMap<LevelBucket, f64>,

    /// Free-text setup instructions
    pub setup_instructions: String,

    /// Ordered steps to run the activity
    #[serde(default)]
    pub execution_steps: Vec<String>,

    /// Named variations of the activity
    #[serde(default)]
    pub variations: Vec<String>,

    /// Suggested follow-up tool ids
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl Tool {
    /// Check whether the tool is tagged with a standard code
    pub fn addresses_standard(&self, code: &str) -> bool {
        self.standards.iter().any(|s| s == code)
    }

    /// Check whether the tool supports a group-size mode
    pub fn supports_group_size(&self, size: GroupSize) -> bool {
        self.group_size.contains(&size)
    }

    /// Check whether an accessibility feature is present and supported
    pub fn has_feature(&self, feature: &str) -> bool {
        self.accessibility_features.get(feature).copied().unwrap_or(false)
    }

    /// Historical effectiveness for a level bucket, defaulting to 0.5
    pub fn effectiveness_for(&self, level: LevelBucket) -> f64 {
        self.effectiveness_data.get(&level).copied().unwrap_or(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tool() -> Tool {
        Tool {
            id: "multiplication_arrays".to_string(),
            name: "Visual Multiplication Arrays".to_string(),
            description: "Arrays to visualize multiplication concepts".to_string(),
            category: Category::InteractiveLearning,
            difficulty: Difficulty::Beginner,
            standards: vec!["3.OA.A.1".to_string()],
            time_required: 20,
            materials: vec!["physical".to_string(), "digital".to_string()],
            group_size: vec![GroupSize::Individual, GroupSize::SmallGroup],
            prerequisites: vec!["counting_fluency".to_string()],
            learning_objectives: vec!["visualize_multiplication".to_string()],
            accessibility_features: HashMap::from([
                ("visual_support".to_string(), true),
                ("auditory_support".to_string(), false),
            ]),
            effectiveness_data: HashMap::from([
                (LevelBucket::BelowGrade, 0.92),
                (LevelBucket::AtGrade, 0.88),
            ]),
            setup_instructions: "Provide counters and grid paper".to_string(),
            execution_steps: vec!["Present multiplication problem".to_string()],
            variations: vec!["larger_numbers".to_string()],
            next_steps: vec!["times_table_practice".to_string()],
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Assessment.to_string(), "assessment");
        assert_eq!(Category::InteractiveLearning.to_string(), "interactive_learning");
        assert_eq!(Category::GameBased.to_string(), "game_based");
    }

    #[test]
    fn test_category_serde_snake_case() {
        let json = serde_json::to_string(&Category::InteractiveLearning).unwrap();
        assert_eq!(json, "\"interactive_learning\"");
        let back: Category = serde_json::from_str("\"game_based\"").unwrap();
        assert_eq!(back, Category::GameBased);
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Adaptive).unwrap();
        assert_eq!(json, "\"adaptive\"");
        let back: Difficulty = serde_json::from_str("\"beginner\"").unwrap();
        assert_eq!(back, Difficulty::Beginner);
    }

    #[test]
    fn test_addresses_standard() {
        let tool = sample_tool();
        assert!(tool.addresses_standard("3.OA.A.1"));
        assert!(!tool.addresses_standard("3.NF.A.3"));
    }

    #[test]
    fn test_supports_group_size() {
        let tool = sample_tool();
        assert!(tool.supports_group_size(GroupSize::Individual));
        assert!(tool.supports_group_size(GroupSize::SmallGroup));
        assert!(!tool.supports_group_size(GroupSize::WholeClass));
    }

    #[test]
    fn test_has_feature() {
        let tool = sample_tool();
        assert!(tool.has_feature("visual_support"));
        assert!(!tool.has_feature("auditory_support"));
        assert!(!tool.has_feature("motor_adaptations"));
    }

    #[test]
    fn test_effectiveness_for_known_level() {
        let tool = sample_tool();
        assert_eq!(tool.effectiveness_for(LevelBucket::BelowGrade), 0.92);
    }

    #[test]
    fn test_effectiveness_for_unknown_level_defaults() {
        let tool = sample_tool();
        assert_eq!(tool.effectiveness_for(LevelBucket::AboveGrade), 0.5);
    }

    #[test]
    fn test_tool_serialization_roundtrip() {
        let tool = sample_tool();
        let json = serde_json::to_string(&tool).unwrap();
        let back: Tool = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, tool.id);
        assert_eq!(back.category, tool.category);
        assert_eq!(back.time_required, tool.time_required);
        assert_eq!(back.effectiveness_data, tool.effectiveness_data);
    }

    #[test]
    fn test_tool_deserialize_defaults_optional_collections() {
        let json = r#"{
            "id": "t1",
            "name": "Tool",
            "description": "d",
            "category": "practice",
            "difficulty": "beginner",
            "standards": ["3.OA.C.7"],
            "time_required": 10,
            "materials": ["digital"],
            "group_size": ["individual"],
            "prerequisites": [],
            "learning_objectives": [],
            "setup_instructions": ""
        }"#;
        let tool: Tool = serde_json::from_str(json).unwrap();
        assert!(tool.accessibility_features.is_empty());
        assert!(tool.effectiveness_data.is_empty());
        assert!(tool.execution_steps.is_empty());
        assert!(tool.next_steps.is_empty());
    }
}
