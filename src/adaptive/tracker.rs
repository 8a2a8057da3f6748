use std::path::Path;

use crate::adaptive::config::DifficultyConfig;
use crate::adaptive::difficulty::adjust_difficulty;
use crate::adaptive::types::{AssessmentScore, PerformanceRecord};
use crate::constants::MIN_SKILL_LEVEL;
use crate::error::AdaptiveError;

impl PerformanceRecord {
    pub fn new(learner_id: &str, language: &str) -> Self {
        Self {
            learner_id: learner_id.to_string(),
            language: language.to_string(),
            scores: Vec::new(),
            skill_level: MIN_SKILL_LEVEL,
            total_practice_secs: 0,
            last_activity: None,
        }
    }

    /// Reads a camelCase JSON record as stored by the history source.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AdaptiveError> {
        let raw = std::fs::read_to_string(path)?;
        let record: Self = serde_json::from_str(&raw)?;
        Ok(record)
    }

    /// Appends a finished assessment and re-evaluates the skill level from the
    /// trailing overall scores. Returns the (possibly unchanged) new level.
    pub fn record_assessment(
        &mut self,
        score: AssessmentScore,
        practice_secs: u64,
        config: &DifficultyConfig,
    ) -> u8 {
        self.last_activity = Some(match self.last_activity {
            Some(prev) if prev > score.timestamp => prev,
            _ => score.timestamp,
        });
        self.total_practice_secs = self.total_practice_secs.saturating_add(practice_secs);
        self.scores.push(score);

        let start = self.scores.len().saturating_sub(config.min_samples);
        let recent: Vec<f64> = self.scores[start..].iter().map(|s| s.overall).collect();
        let previous = self.skill_level;
        self.skill_level = adjust_difficulty(previous, &recent, config);

        if self.skill_level != previous {
            tracing::debug!(
                learner_id = %self.learner_id,
                from = previous,
                to = self.skill_level,
                "Skill level adjusted"
            );
        }
        self.skill_level
    }
}
