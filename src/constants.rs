/// Category average below this is a weak area
pub const DEFAULT_WEAK_THRESHOLD: f64 = 70.0;

/// Category average at or above this is a strength
pub const DEFAULT_STRENGTH_THRESHOLD: f64 = 85.0;

/// Weak areas averaging below this are tagged `hard`
pub const DEFAULT_HARD_THRESHOLD: f64 = 50.0;

/// Minimum number of assessments before weak areas / strengths are reported
pub const DEFAULT_MIN_SESSIONS: usize = 5;

/// Trailing window used for weak-area and strength analysis
pub const DEFAULT_ANALYSIS_WINDOW: usize = 10;

/// Score jump between adjacent attempts that counts as an improvement
pub const DEFAULT_IMPROVEMENT_JUMP: f64 = 10.0;

/// Trailing / leading window used for the progress trend
pub const DEFAULT_PROGRESS_WINDOW: usize = 5;

/// Minimum recent scores the difficulty adjuster needs
pub const DEFAULT_DIFFICULTY_MIN_SAMPLES: usize = 3;

/// Mean recent score that promotes the learner one level
pub const DEFAULT_PROMOTE_THRESHOLD: f64 = 90.0;

/// Mean recent score that demotes the learner one level
pub const DEFAULT_DEMOTE_THRESHOLD: f64 = 60.0;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Skill level from which the advanced challenge is recommended
pub const DEFAULT_CHALLENGE_MIN_LEVEL: u8 = 3;

pub const DEFAULT_CHALLENGE_PRIORITY: i32 = 2;
pub const DEFAULT_CHALLENGE_DIFFICULTY: u8 = 4;

/// Estimated durations (minutes)
pub const DEFAULT_PRACTICE_DURATION_MINS: u32 = 15;
pub const DEFAULT_CHALLENGE_DURATION_MINS: u32 = 20;
pub const DEFAULT_MINUTES_PER_LESSON: u32 = 20;

/// Upper bound of every assessment score field
pub const MAX_SCORE: f64 = 100.0;

/// Upper bound for any configured duration (one day)
pub const MAX_DURATION_MINS: u32 = 24 * 60;
