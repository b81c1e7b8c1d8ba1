//! Domain types for Toolrec
//!
//! This module contains all core domain types:
//! - Tool: an educational tool record owned by the catalog
//! - StudentProfile: the student's learning profile (read-only input)
//! - LearningContext: the session's constraints (read-only input)
//! - Recommendation: a ranked, explained pick (caller-owned output)

pub mod context;
pub mod profile;
pub mod recommendation;
pub mod tool;

pub use context::{GroupSize, LearningContext};
pub use profile::{LevelBucket, StudentProfile};
pub use recommendation::Recommendation;
pub use tool::{Category, Difficulty, Tool};
