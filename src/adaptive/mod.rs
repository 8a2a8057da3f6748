//! Adaptive learning analysis: turns a learner's pronunciation-assessment
//! history into weak areas, strengths, a progress trend, ranked
//! recommendations and a gated lesson path.

pub mod analysis;
pub mod config;
pub mod content;
pub mod difficulty;
pub mod engine;
pub mod monitoring;
pub mod path;
pub mod progress;
pub mod recommendation;
pub mod tracker;
pub mod types;

pub use config::AdaptiveConfig;
pub use content::{ContentProvider, ContentTopic, StaticContentProvider};
pub use engine::AdaptiveEngine;
pub use types::*;
