use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdaptiveError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("lesson not found: {lesson_id}")]
    LessonNotFound { lesson_id: String },
    #[error("lesson is locked: {lesson_id}")]
    LessonLocked { lesson_id: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
