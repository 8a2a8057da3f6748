use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_SKILL_LEVEL;

/// One scored pronunciation attempt. All numeric fields are on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScore {
    pub overall: f64,
    pub accuracy: f64,
    pub fluency: f64,
    pub completeness: f64,
    pub prosody: f64,
    #[serde(default)]
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default = "default_attempts")]
    pub attempts: u32,
}

fn default_attempts() -> u32 {
    1
}

/// Assessment history of one learner in one language.
///
/// `scores` is chronological: the most recent attempt is the last element.
/// The engine only reads it; appending goes through
/// [`PerformanceRecord::record_assessment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub learner_id: String,
    pub language: String,
    #[serde(default)]
    pub scores: Vec<AssessmentScore>,
    #[serde(default = "default_skill_level")]
    pub skill_level: u8,
    #[serde(default)]
    pub total_practice_secs: u64,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

fn default_skill_level() -> u8 {
    MIN_SKILL_LEVEL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    Accuracy,
    Fluency,
    Completeness,
    Prosody,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        Self::Accuracy,
        Self::Fluency,
        Self::Completeness,
        Self::Prosody,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::Fluency => "fluency",
            Self::Completeness => "completeness",
            Self::Prosody => "prosody",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Fluency => "Fluency",
            Self::Completeness => "Completeness",
            Self::Prosody => "Prosody",
        }
    }

    pub fn score_of(&self, score: &AssessmentScore) -> f64 {
        match self {
            Self::Accuracy => score.accuracy,
            Self::Fluency => score.fluency,
            Self::Completeness => score.completeness,
            Self::Prosody => score.prosody,
        }
    }

    /// Fixed sub-skill hints shown next to a weak category.
    pub fn focus_sounds(&self) -> &'static [&'static str] {
        match self {
            Self::Accuracy => &["vowel sounds", "consonant clusters", "word stress"],
            Self::Fluency => &["speech rate", "pausing", "linking words"],
            Self::Completeness => &["word endings", "function words", "full sentences"],
            Self::Prosody => &["intonation", "rhythm", "sentence stress"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakArea {
    pub category: SkillCategory,
    /// Mean over the analysis window
    pub score: f64,
    /// Attempts in the window that fell below the weak threshold
    pub frequency: usize,
    pub difficulty: DifficultyTier,
    pub specific_sounds: Vec<String>,
    pub last_improvement: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationKind {
    Practice,
    Lesson,
    Review,
    Challenge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    /// 2 (gentle) to 4 (advanced)
    pub difficulty: u8,
    pub estimated_duration_mins: u32,
    pub target_areas: Vec<SkillCategory>,
    pub content: String,
    /// Ordering key only; higher sorts first
    pub priority: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLevel {
    Beginner,
    Elementary,
    Intermediate,
    Advanced,
    Expert,
}

impl TargetLevel {
    /// Maps the numeric skill level onto the ordinal table
    /// {0: Beginner, 1: Elementary, 2: Intermediate, 3: Advanced, 4+: Expert}.
    pub fn from_skill_level(level: u8) -> Self {
        match level {
            0 => Self::Beginner,
            1 => Self::Elementary,
            2 => Self::Intermediate,
            3 => Self::Advanced,
            _ => Self::Expert,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Elementary => "Elementary",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: SkillCategory,
    pub difficulty: DifficultyTier,
    pub content: String,
    pub estimated_duration_mins: u32,
    /// Id of the preceding lesson; empty for the head of the chain
    pub prerequisites: Vec<String>,
    pub unlocked: bool,
    pub completed: bool,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub learner_id: String,
    pub name: String,
    pub description: String,
    pub lessons: Vec<PathLesson>,
    pub estimated_duration_mins: u32,
    pub target_level: TargetLevel,
    pub adaptive_features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysis {
    pub weak_areas: Vec<WeakArea>,
    pub strengths: Vec<SkillCategory>,
    pub overall_progress: i32,
    pub recommendations: Vec<LearningRecommendation>,
}
