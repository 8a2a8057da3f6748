use crate::adaptive::config::RecommendationConfig;
use crate::adaptive::content::{advanced_content, practice_content, ContentProvider};
use crate::adaptive::types::*;

/// Builds practice suggestions for `weak_areas` (expected worst-first) plus an
/// advanced challenge for experienced learners, ordered by descending priority.
pub fn generate_recommendations(
    weak_areas: &[WeakArea],
    record: &PerformanceRecord,
    config: &RecommendationConfig,
    content: &dyn ContentProvider,
) -> Vec<LearningRecommendation> {
    let total = weak_areas.len();
    let mut recommendations: Vec<LearningRecommendation> = weak_areas
        .iter()
        .enumerate()
        .map(|(rank, area)| LearningRecommendation {
            id: format!("practice-{}", area.category.as_str()),
            kind: RecommendationKind::Practice,
            title: format!("Improve {}", area.category.display_name()),
            description: format!(
                "Focus on your {} with targeted pronunciation exercises",
                area.category.as_str()
            ),
            difficulty: practice_difficulty(area.difficulty),
            estimated_duration_mins: config.practice_duration_mins,
            target_areas: vec![area.category],
            content: practice_content(content, &record.language, area.category),
            priority: (total - rank) as i32,
        })
        .collect();

    if record.skill_level >= config.challenge_min_level {
        recommendations.push(LearningRecommendation {
            id: "challenge-advanced".to_string(),
            kind: RecommendationKind::Challenge,
            title: "Advanced Challenge".to_string(),
            description: "Test yourself with longer, more complex sentences".to_string(),
            difficulty: config.challenge_difficulty,
            estimated_duration_mins: config.challenge_duration_mins,
            target_areas: vec![SkillCategory::Accuracy, SkillCategory::Fluency],
            content: advanced_content(content, &record.language),
            priority: config.challenge_priority,
        });
    }

    // stable: equal priorities keep insertion order
    recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
    recommendations
}

/// Struggling areas get gentler material.
fn practice_difficulty(tier: DifficultyTier) -> u8 {
    match tier {
        DifficultyTier::Hard => 2,
        DifficultyTier::Medium => 3,
        DifficultyTier::Easy => 4,
    }
}
