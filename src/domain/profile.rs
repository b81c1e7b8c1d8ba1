//! Student learning profile
//!
//! StudentProfile is a read-only input to the recommendation pipeline; the
//! engine never mutates it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Coarse proficiency bucket used to key historical effectiveness data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LevelBucket {
    BelowGrade,
    AtGrade,
    AboveGrade,
}

impl LevelBucket {
    /// Human-readable form for reasoning text ("below grade" etc.)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BelowGrade => "below grade",
            Self::AtGrade => "at grade",
            Self::AboveGrade => "above grade",
        }
    }
}

impl std::fmt::Display for LevelBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BelowGrade => write!(f, "below_grade"),
            Self::AtGrade => write!(f, "at_grade"),
            Self::AboveGrade => write!(f, "above_grade"),
        }
    }
}

/// Student learning profile and current state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Student identifier
    pub student_id: String,

    /// Current proficiency bucket
    pub current_level: LevelBucket,

    /// Learning-style tags ("visual", "auditory", "kinesthetic")
    #[serde(default)]
    pub learning_style: Vec<String>,

    /// Sustained attention span in minutes (> 0)
    pub attention_span: u32,

    /// Tool id -> personally observed effectiveness in [0, 1]
    #[serde(default)]
    pub previous_tool_effectiveness: HashMap<String, f64>,

    /// Concept ids the student is currently struggling with
    #[serde(default)]
    pub current_struggles: Vec<String>,

    /// Concept ids the student has mastered
    #[serde(default)]
    pub mastered_concepts: Vec<String>,

    /// Accessibility-need tags ("visual_support" is the enforced one)
    #[serde(default)]
    pub accessibility_needs: Vec<String>,
}

impl StudentProfile {
    /// Check whether a learning-style tag is present
    pub fn has_style(&self, style: &str) -> bool {
        self.learning_style.iter().any(|s| s == style)
    }

    /// Check whether an accessibility need is present
    pub fn needs(&self, need: &str) -> bool {
        self.accessibility_needs.iter().any(|n| n == need)
    }

    /// Check whether a concept has been mastered
    pub fn has_mastered(&self, concept: &str) -> bool {
        self.mastered_concepts.iter().any(|c| c == concept)
    }
}
