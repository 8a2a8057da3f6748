use crate::adaptive::analysis::mean;
use crate::adaptive::config::DifficultyConfig;

/// Moves the skill level one step based on the mean of `recent` scores.
///
/// Levels outside `[min_level, max_level]` are clamped first; with fewer than
/// `min_samples` scores the clamped level is returned as-is.
pub fn adjust_difficulty(level: u8, recent: &[f64], config: &DifficultyConfig) -> u8 {
    let clamped = level.max(config.min_level).min(config.max_level);
    if clamped != level {
        tracing::warn!(
            level,
            clamped,
            "Skill level outside valid range, clamping"
        );
    }

    if recent.len() < config.min_samples {
        return clamped;
    }

    let average = mean(recent);
    if average >= config.promote_threshold && clamped < config.max_level {
        clamped + 1
    } else if average < config.demote_threshold && clamped > config.min_level {
        clamped - 1
    } else {
        clamped
    }
}
