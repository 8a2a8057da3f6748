use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::AdaptiveError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    pub weak_threshold: f64,
    pub strength_threshold: f64,
    pub hard_threshold: f64,
    pub min_sessions: usize,
    pub analysis_window: usize,
    #[serde(default = "default_improvement_jump")]
    pub improvement_jump: f64,
}

fn default_improvement_jump() -> f64 {
    DEFAULT_IMPROVEMENT_JUMP
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            weak_threshold: DEFAULT_WEAK_THRESHOLD,
            strength_threshold: DEFAULT_STRENGTH_THRESHOLD,
            hard_threshold: DEFAULT_HARD_THRESHOLD,
            min_sessions: DEFAULT_MIN_SESSIONS,
            analysis_window: DEFAULT_ANALYSIS_WINDOW,
            improvement_jump: DEFAULT_IMPROVEMENT_JUMP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressConfig {
    pub window: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_PROGRESS_WINDOW,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyConfig {
    pub min_samples: usize,
    pub promote_threshold: f64,
    pub demote_threshold: f64,
    pub min_level: u8,
    pub max_level: u8,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_DIFFICULTY_MIN_SAMPLES,
            promote_threshold: DEFAULT_PROMOTE_THRESHOLD,
            demote_threshold: DEFAULT_DEMOTE_THRESHOLD,
            min_level: MIN_SKILL_LEVEL,
            max_level: MAX_SKILL_LEVEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationConfig {
    pub challenge_min_level: u8,
    pub challenge_priority: i32,
    pub challenge_difficulty: u8,
    pub practice_duration_mins: u32,
    pub challenge_duration_mins: u32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            challenge_min_level: DEFAULT_CHALLENGE_MIN_LEVEL,
            challenge_priority: DEFAULT_CHALLENGE_PRIORITY,
            challenge_difficulty: DEFAULT_CHALLENGE_DIFFICULTY,
            practice_duration_mins: DEFAULT_PRACTICE_DURATION_MINS,
            challenge_duration_mins: DEFAULT_CHALLENGE_DURATION_MINS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConfig {
    pub minutes_per_lesson: u32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            minutes_per_lesson: DEFAULT_MINUTES_PER_LESSON,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub difficulty: DifficultyConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub path: PathConfig,
}

impl AdaptiveConfig {
    pub fn from_env(env_config: &crate::config::AdaptiveEnvConfig) -> Self {
        let mut config = Self::default();
        config.classifier.weak_threshold = env_config.weak_threshold;
        config.classifier.strength_threshold = env_config.strength_threshold;
        config.classifier.min_sessions = env_config.min_sessions;
        config.classifier.analysis_window = env_config.analysis_window;
        config
    }

    pub fn validate(&self) -> Result<(), AdaptiveError> {
        let invalid = |msg: &str| Err(AdaptiveError::InvalidConfig(msg.to_string()));

        let c = &self.classifier;
        for (name, value) in [
            ("classifier.weak_threshold", c.weak_threshold),
            ("classifier.strength_threshold", c.strength_threshold),
            ("classifier.hard_threshold", c.hard_threshold),
        ] {
            if !(0.0..=MAX_SCORE).contains(&value) {
                return Err(AdaptiveError::InvalidConfig(format!(
                    "{name} must be in [0,{MAX_SCORE}] (got {value})"
                )));
            }
        }
        if c.weak_threshold >= c.strength_threshold {
            return invalid("classifier.weak_threshold must be < classifier.strength_threshold");
        }
        if c.hard_threshold > c.weak_threshold {
            return invalid("classifier.hard_threshold must be <= classifier.weak_threshold");
        }
        if c.analysis_window == 0 {
            return invalid("classifier.analysis_window must be > 0");
        }
        if c.min_sessions == 0 {
            return invalid("classifier.min_sessions must be > 0");
        }
        if c.improvement_jump.is_nan() || c.improvement_jump < 0.0 {
            return invalid("classifier.improvement_jump must be >= 0");
        }

        if self.progress.window == 0 {
            return invalid("progress.window must be > 0");
        }

        let d = &self.difficulty;
        if d.min_samples == 0 {
            return invalid("difficulty.min_samples must be > 0");
        }
        if d.min_level >= d.max_level {
            return invalid("difficulty.min_level must be < difficulty.max_level");
        }
        if d.demote_threshold >= d.promote_threshold {
            return invalid("difficulty.demote_threshold must be < difficulty.promote_threshold");
        }

        for (name, value) in [
            ("path.minutes_per_lesson", self.path.minutes_per_lesson),
            (
                "recommendation.practice_duration_mins",
                self.recommendation.practice_duration_mins,
            ),
            (
                "recommendation.challenge_duration_mins",
                self.recommendation.challenge_duration_mins,
            ),
        ] {
            if value > MAX_DURATION_MINS {
                return Err(AdaptiveError::InvalidConfig(format!(
                    "{name} must be <= {MAX_DURATION_MINS} (got {value})"
                )));
            }
        }

        if !(2..=4).contains(&self.recommendation.challenge_difficulty) {
            return invalid("recommendation.challenge_difficulty must be in [2,4]");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AdaptiveConfig::default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = AdaptiveConfig::default();
        cfg.classifier.weak_threshold = 90.0;
        assert!(cfg.validate().is_err());

        let mut cfg = AdaptiveConfig::default();
        cfg.classifier.analysis_window = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = AdaptiveConfig::default();
        cfg.difficulty.min_level = 5;
        assert!(cfg.validate().is_err());

        let mut cfg = AdaptiveConfig::default();
        cfg.classifier.strength_threshold = 120.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn oversized_durations_are_rejected() {
        let cfg: AdaptiveConfig =
            serde_json::from_str(r#"{"path":{"minutesPerLesson":3000000000}}"#).expect("parse");
        assert!(cfg.validate().is_err());

        let mut cfg = AdaptiveConfig::default();
        cfg.recommendation.practice_duration_mins = MAX_DURATION_MINS + 1;
        assert!(cfg.validate().is_err());

        let mut cfg = AdaptiveConfig::default();
        cfg.recommendation.challenge_duration_mins = MAX_DURATION_MINS;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn env_overrides_apply_on_top_of_defaults() {
        let env_cfg = crate::config::AdaptiveEnvConfig {
            weak_threshold: 60.0,
            strength_threshold: 80.0,
            min_sessions: 3,
            analysis_window: 8,
        };
        let cfg = AdaptiveConfig::from_env(&env_cfg);
        assert_eq!(cfg.classifier.weak_threshold, 60.0);
        assert_eq!(cfg.classifier.analysis_window, 8);
        assert_eq!(cfg.progress, ProgressConfig::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_uses_section_defaults() {
        let cfg: AdaptiveConfig =
            serde_json::from_str(r#"{"progress":{"window":3}}"#).expect("parse");
        assert_eq!(cfg.progress.window, 3);
        assert_eq!(cfg.classifier, ClassifierConfig::default());
    }
}
