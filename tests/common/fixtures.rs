use chrono::{DateTime, Duration, TimeZone, Utc};

use adaptive_learning::adaptive::{AssessmentScore, PerformanceRecord};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 19, 0, 0).unwrap()
}

pub fn score_on_day(
    day: i64,
    accuracy: f64,
    fluency: f64,
    completeness: f64,
    prosody: f64,
) -> AssessmentScore {
    AssessmentScore {
        overall: (accuracy + fluency + completeness + prosody) / 4.0,
        accuracy,
        fluency,
        completeness,
        prosody,
        text: format!("sentence-{day}"),
        timestamp: base_time() + Duration::days(day),
        attempts: 1,
    }
}

pub fn seed_record(
    learner_id: &str,
    language: &str,
    skill_level: u8,
    scores: Vec<AssessmentScore>,
) -> PerformanceRecord {
    let last_activity = scores.last().map(|s| s.timestamp);
    PerformanceRecord {
        learner_id: learner_id.to_string(),
        language: language.to_string(),
        skill_level,
        total_practice_secs: scores.len() as u64 * 120,
        last_activity,
        scores,
    }
}

/// Ten attempts: accuracy averages 60, fluency 90, the rest sit at 80.
pub fn accuracy_weak_fluency_strong(skill_level: u8) -> PerformanceRecord {
    let scores = (0..10)
        .map(|day| {
            let accuracy = if day % 2 == 0 { 55.0 } else { 65.0 };
            score_on_day(day, accuracy, 90.0, 80.0, 80.0)
        })
        .collect();
    seed_record("learner-42", "es", skill_level, scores)
}
