//! Score aggregation and weak-area / strength classification.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::adaptive::config::ClassifierConfig;
use crate::adaptive::types::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillAnalysis {
    pub weak_areas: Vec<WeakArea>,
    pub strengths: Vec<SkillCategory>,
}

/// The trailing `size` entries of a chronological history.
pub fn recent_window(scores: &[AssessmentScore], size: usize) -> &[AssessmentScore] {
    let start = scores.len().saturating_sub(size);
    &scores[start..]
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Classifies the four skill categories over the most recent attempts.
///
/// Returns empty results while the history is shorter than
/// `config.min_sessions`. Weak areas come back worst-first.
pub fn analyze_skills(
    scores: &[AssessmentScore],
    config: &ClassifierConfig,
    now: DateTime<Utc>,
) -> SkillAnalysis {
    if scores.len() < config.min_sessions {
        tracing::debug!(
            history = scores.len(),
            required = config.min_sessions,
            "Not enough assessments to classify skills"
        );
        return SkillAnalysis::default();
    }

    let window = recent_window(scores, config.analysis_window);
    let mut analysis = SkillAnalysis::default();

    for category in SkillCategory::ALL {
        let series: Vec<f64> = window.iter().map(|s| category.score_of(s)).collect();
        let average = mean(&series);

        if average < config.weak_threshold {
            analysis.weak_areas.push(WeakArea {
                category,
                score: average,
                frequency: series
                    .iter()
                    .filter(|&&v| v < config.weak_threshold)
                    .count(),
                difficulty: classify_difficulty(average, config),
                specific_sounds: category
                    .focus_sounds()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                last_improvement: find_last_improvement(&series, config.improvement_jump, now),
            });
        } else if average >= config.strength_threshold {
            analysis.strengths.push(category);
        }
    }

    analysis
        .weak_areas
        .sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));

    tracing::debug!(
        window = window.len(),
        weak_areas = analysis.weak_areas.len(),
        strengths = analysis.strengths.len(),
        "Skill classification complete"
    );

    analysis
}

pub fn classify_difficulty(average: f64, config: &ClassifierConfig) -> DifficultyTier {
    if average >= config.weak_threshold {
        DifficultyTier::Easy
    } else if average >= config.hard_threshold {
        DifficultyTier::Medium
    } else {
        DifficultyTier::Hard
    }
}

/// Walks a category series newest to oldest and reports the most recent jump
/// larger than `jump` between adjacent attempts.
pub fn find_last_improvement(
    series: &[f64],
    jump: f64,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    (1..series.len())
        .rev()
        .find(|&i| series[i] - series[i - 1] > jump)
        .map(|i| approximate_improvement_date(now, series.len(), i))
}

/// Dates an improvement at `index` as `window_len - index` days before `now`.
///
/// This ignores the per-score timestamps and assumes one attempt per day.
pub fn approximate_improvement_date(
    now: DateTime<Utc>,
    window_len: usize,
    index: usize,
) -> DateTime<Utc> {
    let days_ago = window_len.saturating_sub(index) as i64;
    now - Duration::days(days_ago)
}
