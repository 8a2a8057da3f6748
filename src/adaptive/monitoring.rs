use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::adaptive::types::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvariantViolation {
    pub field: String,
    pub detail: String,
}

impl InvariantViolation {
    fn new(field: &str, detail: String) -> Self {
        Self {
            field: field.to_string(),
            detail,
        }
    }
}

pub fn check_invariants(
    analysis: &PerformanceAnalysis,
    path: Option<&LearningPath>,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if let Some(i) = analysis
        .weak_areas
        .windows(2)
        .position(|w| w[0].score > w[1].score)
    {
        violations.push(InvariantViolation::new(
            "weak_areas",
            format!("not sorted ascending by score at index {i}"),
        ));
    }

    for area in &analysis.weak_areas {
        if !area.score.is_finite() {
            violations.push(InvariantViolation::new(
                "weak_areas.score",
                format!("{} average is not finite", area.category.as_str()),
            ));
        }
    }

    if let Some(i) = analysis
        .recommendations
        .windows(2)
        .position(|w| w[0].priority < w[1].priority)
    {
        violations.push(InvariantViolation::new(
            "recommendations",
            format!("not sorted by descending priority at index {i}"),
        ));
    }

    for rec in &analysis.recommendations {
        if !(2..=4).contains(&rec.difficulty) {
            violations.push(InvariantViolation::new(
                "recommendations.difficulty",
                format!("{} has difficulty {}", rec.id, rec.difficulty),
            ));
        }
    }

    if let Some(path) = path {
        check_path(path, &mut violations);
    }

    violations
}

fn check_path(path: &LearningPath, violations: &mut Vec<InvariantViolation>) {
    let mut seen = HashSet::new();
    let completed: HashSet<&str> = path
        .lessons
        .iter()
        .filter(|l| l.completed)
        .map(|l| l.id.as_str())
        .collect();

    for (index, lesson) in path.lessons.iter().enumerate() {
        if !seen.insert(lesson.id.as_str()) {
            violations.push(InvariantViolation::new(
                "lessons.id",
                format!("duplicate lesson id {}", lesson.id),
            ));
        }

        let expected: Vec<&str> = match index {
            0 => vec![],
            _ => vec![path.lessons[index - 1].id.as_str()],
        };
        let actual: Vec<&str> = lesson.prerequisites.iter().map(String::as_str).collect();
        if actual != expected {
            violations.push(InvariantViolation::new(
                "lessons.prerequisites",
                format!("{} does not follow the linear chain", lesson.id),
            ));
        }

        let gated = lesson
            .prerequisites
            .iter()
            .any(|p| !completed.contains(p.as_str()));
        if lesson.unlocked && gated {
            violations.push(InvariantViolation::new(
                "lessons.unlocked",
                format!("{} unlocked before its prerequisites", lesson.id),
            ));
        }
        if lesson.completed != lesson.score.is_some() {
            violations.push(InvariantViolation::new(
                "lessons.score",
                format!("{} score does not match completion", lesson.id),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn lesson(id: &str, prereq: Option<&str>, unlocked: bool) -> PathLesson {
        PathLesson {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            category: SkillCategory::Accuracy,
            difficulty: DifficultyTier::Medium,
            content: String::new(),
            estimated_duration_mins: 20,
            prerequisites: prereq.map(|p| vec![p.to_string()]).unwrap_or_default(),
            unlocked,
            completed: false,
            score: None,
        }
    }

    fn path(lessons: Vec<PathLesson>) -> LearningPath {
        LearningPath {
            id: "path-x".to_string(),
            learner_id: "x".to_string(),
            name: String::new(),
            description: String::new(),
            estimated_duration_mins: lessons.len() as u32 * 20,
            lessons,
            target_level: TargetLevel::Beginner,
            adaptive_features: vec![],
            created_at: Utc::now(),
        }
    }

    fn empty_analysis() -> PerformanceAnalysis {
        PerformanceAnalysis {
            weak_areas: vec![],
            strengths: vec![],
            overall_progress: 0,
            recommendations: vec![],
        }
    }

    #[test]
    fn clean_output_has_no_violations() {
        let p = path(vec![lesson("a", None, true), lesson("b", Some("a"), false)]);
        assert!(check_invariants(&empty_analysis(), Some(&p)).is_empty());
    }

    #[test]
    fn premature_unlock_is_flagged() {
        let p = path(vec![lesson("a", None, true), lesson("b", Some("a"), true)]);
        let violations = check_invariants(&empty_analysis(), Some(&p));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "lessons.unlocked");
    }

    #[test]
    fn unsorted_weak_areas_are_flagged() {
        let area = |category, score| WeakArea {
            category,
            score,
            frequency: 1,
            difficulty: DifficultyTier::Medium,
            specific_sounds: vec![],
            last_improvement: None,
        };
        let analysis = PerformanceAnalysis {
            weak_areas: vec![
                area(SkillCategory::Accuracy, 65.0),
                area(SkillCategory::Fluency, 55.0),
            ],
            ..empty_analysis()
        };
        let violations = check_invariants(&analysis, None);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "weak_areas");
    }
}
