// ABOUTME: Dataset and model artifact fixtures for integration tests
// ABOUTME: Writes small CSV exports and JSON bundles to temp files and builds contexts from them

use fitdash::config::ServerConfig;
use fitdash::context::DashboardContext;
use fitdash::dataset::Dataset;
use fitdash::routes::build_router;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// User with two tracked days, one with sleep
pub const USER_A: &str = "1503960366";
/// User with one day and no sleep tracking
pub const USER_B: &str = "1624580081";
/// Short numeric id that must sort before the long ones
pub const USER_C: &str = "977";

/// Header of the processed export, without the derived total column
pub const HEADER: &str = "Id,Date,TotalSteps,VeryActiveMinutes,FairlyActiveMinutes,LightlyActiveMinutes,SedentaryMinutes,TotalMinutesAsleep,Calories,ActivityLevel";

/// Three users; USER_A averages 2000 steps and 2100 calories
pub fn sample_csv() -> String {
    [
        HEADER,
        "1503960366,2016-04-12,1000,30,15,200,600,360,2000,Lightly Active",
        "1503960366,2016-04-13,3000,40,25,220,700,,2200,Very Active",
        "1624580081,4/12/2016,5000,0,0,150,1200,,1500,Sedentary",
        "977,2016-04-12 00:00:00,8000,10,10,100,900,420.0,1800.5,Fairly Active",
    ]
    .join("\n")
}

/// Weights chosen so predictions are exact in binary floating point
///
/// `(5000, 30, 15, 200, 600)` predicts `1000 + 625 + 120 + 30 + 200 + 300 = 2275`.
pub const ACTIVITY_COEFFICIENTS: [f64; 6] = [0.125, 4.0, 2.0, 1.0, 0.5, 0.0];

/// Activity-only bundle
pub fn activity_artifact() -> Value {
    json!({
        "format_version": 1,
        "pipeline_id": "calorie_predictor_v2",
        "model": {
            "intercept": 1000.0,
            "coefficients": ACTIVITY_COEFFICIENTS
        }
    })
}

/// Per-user bundle: USER_A adds 100 kcal, USER_B subtracts 100, others add nothing
pub fn per_user_artifact() -> Value {
    let mut coefficients = vec![100.0, -100.0];
    coefficients.extend(ACTIVITY_COEFFICIENTS);
    json!({
        "format_version": 1,
        "pipeline_id": "calorie_predictor_v2",
        "model": {
            "intercept": 1000.0,
            "coefficients": coefficients
        },
        "preprocessor": {
            "id_categories": [USER_A, USER_B]
        }
    })
}

/// Write `contents` to a fresh temp file
pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// The sample dataset, parsed in memory
pub fn sample_dataset() -> Dataset {
    Dataset::from_reader(sample_csv().as_bytes()).expect("Sample dataset should load")
}

/// Context loaded from temp files through the same path the server uses
pub fn context_with(artifact: &Value) -> DashboardContext {
    let dataset = write_temp(&sample_csv());
    let model = write_temp(&artifact.to_string());
    DashboardContext::from_paths(dataset.path(), model.path()).expect("Context should load")
}

/// Full application router over the sample data
pub fn app_with(artifact: &Value) -> axum::Router {
    build_router(Arc::new(context_with(artifact)), &ServerConfig::default())
}
