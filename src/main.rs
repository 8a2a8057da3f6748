use std::process::ExitCode;

use adaptive_learning::adaptive::{
    AdaptiveConfig, AdaptiveEngine, LearningPath, PerformanceAnalysis, PerformanceRecord,
};
use adaptive_learning::config::Config;
use adaptive_learning::error::AdaptiveError;
use adaptive_learning::logging::init_tracing;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    analysis: &'a PerformanceAnalysis,
    path: &'a LearningPath,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    if let Err(e) = init_tracing(&config.log_config()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let Some(record_path) = std::env::args().nth(1) else {
        tracing::error!("Usage: adaptive-report <record.json>");
        return ExitCode::from(2);
    };

    match run(&config, &record_path) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, path = %record_path, "Failed to build report");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, record_path: &str) -> Result<String, AdaptiveError> {
    let adaptive_config = AdaptiveConfig::from_env(&config.adaptive);
    adaptive_config.validate()?;

    let record = PerformanceRecord::from_json_file(record_path)?;
    tracing::info!(
        learner_id = %record.learner_id,
        language = %record.language,
        scores = record.scores.len(),
        "Building adaptive report"
    );

    let engine = AdaptiveEngine::new(adaptive_config);
    let analysis = engine.analyze(&record);
    let path = engine.build_path(&record);

    let report = serde_json::to_string_pretty(&Report {
        analysis: &analysis,
        path: &path,
    })?;

    tracing::info!(
        weak_areas = analysis.weak_areas.len(),
        lessons = path.lessons.len(),
        "Report complete"
    );
    Ok(report)
}
