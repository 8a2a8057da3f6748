//! Personalized lesson sequence built from the learner's weak areas.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::adaptive::analysis::analyze_skills;
use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::content::{practice_content, ContentProvider};
use crate::adaptive::types::*;
use crate::constants::MAX_SCORE;
use crate::error::AdaptiveError;

const PATH_NAME: &str = "Personalized Pronunciation Path";
const PATH_DESCRIPTION: &str = "Lessons ordered from your weakest skill to your strongest";
const ADAPTIVE_FEATURES: [&str; 3] = [
    "weak-area-targeting",
    "difficulty-adjustment",
    "progress-gating",
];

/// One lesson per weak area, worst first, chained so each lesson requires
/// the previous one. Only the head starts unlocked.
pub fn build_learning_path(
    record: &PerformanceRecord,
    config: &AdaptiveConfig,
    content: &dyn ContentProvider,
    now: DateTime<Utc>,
) -> LearningPath {
    let analysis = analyze_skills(&record.scores, &config.classifier, now);

    let mut lessons: Vec<PathLesson> = Vec::with_capacity(analysis.weak_areas.len());
    for (index, area) in analysis.weak_areas.iter().enumerate() {
        let prerequisites = lessons
            .last()
            .map(|prev: &PathLesson| vec![prev.id.clone()])
            .unwrap_or_default();
        lessons.push(PathLesson {
            id: format!("lesson-{}-{}", area.category.as_str(), index),
            title: format!("{} Workshop", area.category.display_name()),
            description: format!(
                "Raise your {} from {:.0} towards {:.0}",
                area.category.as_str(),
                area.score,
                config.classifier.weak_threshold
            ),
            category: area.category,
            difficulty: area.difficulty,
            content: practice_content(content, &record.language, area.category),
            estimated_duration_mins: config.path.minutes_per_lesson,
            prerequisites,
            unlocked: index == 0,
            completed: false,
            score: None,
        });
    }

    tracing::debug!(
        learner_id = %record.learner_id,
        lessons = lessons.len(),
        "Learning path built"
    );

    LearningPath {
        id: format!("path-{}-{}", record.learner_id, now.timestamp_millis()),
        learner_id: record.learner_id.clone(),
        name: PATH_NAME.to_string(),
        description: PATH_DESCRIPTION.to_string(),
        estimated_duration_mins: (lessons.len() as u32)
            .saturating_mul(config.path.minutes_per_lesson),
        lessons,
        target_level: TargetLevel::from_skill_level(record.skill_level),
        adaptive_features: ADAPTIVE_FEATURES.iter().map(|s| s.to_string()).collect(),
        created_at: now,
    }
}

impl LearningPath {
    /// Marks an unlocked lesson completed and unlocks every lesson whose
    /// prerequisites are now all complete.
    pub fn complete_lesson(&mut self, lesson_id: &str, score: f64) -> Result<(), AdaptiveError> {
        let lesson = self
            .lessons
            .iter_mut()
            .find(|l| l.id == lesson_id)
            .ok_or_else(|| AdaptiveError::LessonNotFound {
                lesson_id: lesson_id.to_string(),
            })?;

        if !lesson.unlocked {
            return Err(AdaptiveError::LessonLocked {
                lesson_id: lesson_id.to_string(),
            });
        }

        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, MAX_SCORE)
        };
        lesson.completed = true;
        lesson.score = Some(score);

        let completed: HashSet<String> = self
            .lessons
            .iter()
            .filter(|l| l.completed)
            .map(|l| l.id.clone())
            .collect();
        for lesson in self.lessons.iter_mut().filter(|l| !l.unlocked) {
            if lesson.prerequisites.iter().all(|p| completed.contains(p)) {
                lesson.unlocked = true;
            }
        }

        Ok(())
    }

    pub fn next_lesson(&self) -> Option<&PathLesson> {
        self.lessons.iter().find(|l| l.unlocked && !l.completed)
    }

    /// Completed fraction in [0,1]; an empty path reports 0.
    pub fn progress(&self) -> f64 {
        if self.lessons.is_empty() {
            return 0.0;
        }
        let done = self.lessons.iter().filter(|l| l.completed).count();
        done as f64 / self.lessons.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::adaptive::content::StaticContentProvider;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 8, 30, 0).unwrap()
    }

    fn record_with(accuracy: f64, fluency: f64, completeness: f64, prosody: f64) -> PerformanceRecord {
        let score = AssessmentScore {
            overall: (accuracy + fluency + completeness + prosody) / 4.0,
            accuracy,
            fluency,
            completeness,
            prosody,
            text: "Guten Morgen".to_string(),
            timestamp: now(),
            attempts: 1,
        };
        PerformanceRecord {
            learner_id: "learner-7".to_string(),
            language: "de".to_string(),
            scores: vec![score; 8],
            skill_level: 2,
            total_practice_secs: 3600,
            last_activity: Some(now()),
        }
    }

    fn build(record: &PerformanceRecord) -> LearningPath {
        build_learning_path(record, &AdaptiveConfig::default(), &StaticContentProvider, now())
    }

    #[test]
    fn lessons_chain_worst_first() {
        let path = build(&record_with(60.0, 45.0, 90.0, 65.0));

        let ids: Vec<_> = path.lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["lesson-fluency-0", "lesson-accuracy-1", "lesson-prosody-2"]
        );
        assert!(path.lessons[0].prerequisites.is_empty());
        assert_eq!(path.lessons[1].prerequisites, vec!["lesson-fluency-0"]);
        assert_eq!(path.lessons[2].prerequisites, vec!["lesson-accuracy-1"]);
        assert!(path.lessons[0].unlocked);
        assert!(path.lessons[1..].iter().all(|l| !l.unlocked));
        assert!(path.lessons.iter().all(|l| !l.completed && l.score.is_none()));
        assert_eq!(path.estimated_duration_mins, 60);
        assert_eq!(path.target_level, TargetLevel::Intermediate);
        assert_eq!(path.id, format!("path-learner-7-{}", now().timestamp_millis()));
    }

    #[test]
    fn strong_learner_gets_empty_path() {
        let mut path = build(&record_with(90.0, 90.0, 90.0, 90.0));
        assert!(path.lessons.is_empty());
        assert_eq!(path.estimated_duration_mins, 0);
        assert!(path.next_lesson().is_none());
        assert_eq!(path.progress(), 0.0);
        assert!(matches!(
            path.complete_lesson("lesson-accuracy-0", 80.0),
            Err(AdaptiveError::LessonNotFound { .. })
        ));
    }

    #[test]
    fn huge_lesson_duration_saturates_instead_of_overflowing() {
        let mut config = AdaptiveConfig::default();
        config.path.minutes_per_lesson = 3_000_000_000;
        let path = build_learning_path(
            &record_with(60.0, 45.0, 90.0, 90.0),
            &config,
            &StaticContentProvider,
            now(),
        );
        assert_eq!(path.lessons.len(), 2);
        assert_eq!(path.estimated_duration_mins, u32::MAX);
    }

    #[test]
    fn completing_head_unlocks_next() {
        let mut path = build(&record_with(60.0, 45.0, 90.0, 90.0));
        assert_eq!(path.lessons.len(), 2);

        let err = path.complete_lesson("lesson-accuracy-1", 80.0).unwrap_err();
        assert!(matches!(err, AdaptiveError::LessonLocked { .. }));

        path.complete_lesson("lesson-fluency-0", 140.0).expect("complete head");
        assert_eq!(path.lessons[0].score, Some(100.0));
        assert!(path.lessons[1].unlocked);
        assert_eq!(path.next_lesson().map(|l| l.id.as_str()), Some("lesson-accuracy-1"));
        assert_eq!(path.progress(), 0.5);

        path.complete_lesson("lesson-accuracy-1", 72.5).expect("complete tail");
        assert!(path.next_lesson().is_none());
        assert_eq!(path.progress(), 1.0);
    }
}
