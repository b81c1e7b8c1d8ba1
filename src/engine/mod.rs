//! Recommendation engine
//!
//! Orchestrates the pipeline: standards lookup, context filter, profile
//! filter, ranking, and explanation. Each request is a pure function of
//! (catalog snapshot, profile, context, max_recommendations); the catalog
//! is never mutated by a request.

pub mod explain;
pub mod filters;
pub mod ranker;

pub use filters::{CandidateFilter, ContextFilter, ProfileFilter};
pub use ranker::score_tool;

use std::collections::HashSet;

use log::info;

use crate::catalog::Catalog;
use crate::domain::{LearningContext, Recommendation, StudentProfile, Tool};
use crate::error::{Result, ToolrecError};

/// Default number of recommendations to return
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 3;

/// Tool recommendation engine over a read-only catalog
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine over a pre-populated catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Recommend the best tools for the current student and context
    ///
    /// Returns at most `max_recommendations` ranked recommendations; an
    /// empty list is a normal outcome meaning no tool survived filtering.
    pub fn recommend(
        &self,
        profile: &StudentProfile,
        context: &LearningContext,
        max_recommendations: usize,
    ) -> Result<Vec<Recommendation>> {
        validate_request(profile, context, max_recommendations)?;

        info!("Generating recommendations for student {}", profile.student_id);

        let relevant = self.candidates_for(&context.standards_focus);

        let context_filter = ContextFilter::new(context);
        let suitable = filters::apply(&context_filter, relevant);

        let profile_filter = ProfileFilter::new(profile);
        let appropriate = filters::apply(&profile_filter, suitable);

        let ranked = ranker::rank(appropriate, profile);

        let recommendations: Vec<Recommendation> = ranked
            .into_iter()
            .take(max_recommendations)
            .enumerate()
            .map(|(i, (tool, score))| Recommendation {
                tool: tool.clone(),
                effectiveness_score: score,
                rank: i + 1,
                reasoning: explain::reasoning(tool, profile, context),
                adaptations: explain::adaptations(tool, profile),
                setup_time: explain::setup_time(tool, context),
                expected_outcomes: explain::expected_outcomes(tool, profile),
            })
            .collect();

        info!("Generated {} recommendations", recommendations.len());
        Ok(recommendations)
    }

    /// Tools addressing any of the target standards, de-duplicated by id
    /// keeping the first occurrence (catalog registration order)
    fn candidates_for(&self, standards: &[String]) -> Vec<&'a Tool> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut candidates: Vec<&Tool> = Vec::new();

        for code in standards {
            for tool in self.catalog.by_standard(code) {
                if seen.insert(tool.id.as_str()) {
                    candidates.push(tool);
                }
            }
        }

        candidates
    }
}

/// Fail fast on nonsensical request inputs before any pipeline work
fn validate_request(
    profile: &StudentProfile,
    context: &LearningContext,
    max_recommendations: usize,
) -> Result<()> {
    if max_recommendations < 1 {
        return Err(ToolrecError::InvalidInput(
            "max_recommendations must be >= 1".to_string(),
        ));
    }
    if context.time_available == 0 {
        return Err(ToolrecError::InvalidInput(
            "time_available must be > 0".to_string(),
        ));
    }
    if profile.attention_span == 0 {
        return Err(ToolrecError::InvalidInput(
            "attention_span must be > 0".to_string(),
        ));
    }
    Ok(())
}
