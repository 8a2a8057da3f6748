use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adaptive::analysis::analyze_skills;
use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::content::{ContentProvider, StaticContentProvider};
use crate::adaptive::difficulty;
use crate::adaptive::monitoring;
use crate::adaptive::path::build_learning_path;
use crate::adaptive::progress::estimate_progress;
use crate::adaptive::recommendation::generate_recommendations;
use crate::adaptive::types::*;

/// Stateless entry point: every call is a pure function of the record, the
/// config and the injected clock value.
#[derive(Clone)]
pub struct AdaptiveEngine {
    config: Arc<AdaptiveConfig>,
    content: Arc<dyn ContentProvider>,
}

impl AdaptiveEngine {
    pub fn new(config: AdaptiveConfig) -> Self {
        Self::with_content(config, Arc::new(StaticContentProvider))
    }

    pub fn with_content(config: AdaptiveConfig, content: Arc<dyn ContentProvider>) -> Self {
        Self {
            config: Arc::new(config),
            content,
        }
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    pub fn analyze(&self, record: &PerformanceRecord) -> PerformanceAnalysis {
        self.analyze_at(record, Utc::now())
    }

    pub fn analyze_at(&self, record: &PerformanceRecord, now: DateTime<Utc>) -> PerformanceAnalysis {
        let skills = analyze_skills(&record.scores, &self.config.classifier, now);
        let overall_progress = estimate_progress(&record.scores, &self.config.progress);
        let recommendations = generate_recommendations(
            &skills.weak_areas,
            record,
            &self.config.recommendation,
            self.content.as_ref(),
        );

        let analysis = PerformanceAnalysis {
            weak_areas: skills.weak_areas,
            strengths: skills.strengths,
            overall_progress,
            recommendations,
        };

        let violations = monitoring::check_invariants(&analysis, None);
        if !violations.is_empty() {
            tracing::warn!(
                learner_id = %record.learner_id,
                violations = ?violations,
                "Analysis invariant violations"
            );
        }

        tracing::debug!(
            learner_id = %record.learner_id,
            language = %record.language,
            history = record.scores.len(),
            overall_progress,
            recommendations = analysis.recommendations.len(),
            "Performance analyzed"
        );

        analysis
    }

    pub fn build_path(&self, record: &PerformanceRecord) -> LearningPath {
        self.build_path_at(record, Utc::now())
    }

    pub fn build_path_at(&self, record: &PerformanceRecord, now: DateTime<Utc>) -> LearningPath {
        let path = build_learning_path(record, &self.config, self.content.as_ref(), now);

        let violations = monitoring::check_invariants(
            &PerformanceAnalysis {
                weak_areas: vec![],
                strengths: vec![],
                overall_progress: 0,
                recommendations: vec![],
            },
            Some(&path),
        );
        if !violations.is_empty() {
            tracing::warn!(
                path_id = %path.id,
                violations = ?violations,
                "Learning path invariant violations"
            );
        }

        path
    }

    pub fn adjust_difficulty(&self, level: u8, recent_scores: &[f64]) -> u8 {
        difficulty::adjust_difficulty(level, recent_scores, &self.config.difficulty)
    }
}

impl Default for AdaptiveEngine {
    fn default() -> Self {
        Self::new(AdaptiveConfig::default())
    }
}
