use crate::adaptive::analysis::{mean, recent_window};
use crate::adaptive::config::ProgressConfig;
use crate::adaptive::types::AssessmentScore;

/// Relative change (percent, rounded) between the mean of the latest
/// `config.window` overall scores and the mean of the earliest ones.
///
/// Always finite: fewer than two scores, a non-positive baseline or a
/// non-finite ratio all yield 0.
pub fn estimate_progress(scores: &[AssessmentScore], config: &ProgressConfig) -> i32 {
    if scores.len() < 2 {
        return 0;
    }

    let earlier_len = config.window.min(scores.len());
    let earlier: Vec<f64> = scores[..earlier_len].iter().map(|s| s.overall).collect();
    let recent: Vec<f64> = recent_window(scores, config.window)
        .iter()
        .map(|s| s.overall)
        .collect();

    let earlier_mean = mean(&earlier);
    let recent_mean = mean(&recent);

    if !earlier_mean.is_finite() || earlier_mean <= 0.0 {
        tracing::warn!(earlier_mean, "Degenerate progress baseline, reporting 0");
        return 0;
    }

    let pct = ((recent_mean - earlier_mean) / earlier_mean * 100.0).round();
    if !pct.is_finite() {
        return 0;
    }
    pct.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}
