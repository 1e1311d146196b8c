// ABOUTME: Tests for the per-interaction dashboard pipeline over a loaded context
// ABOUTME: Covers summaries, slider defaults, predictions, and unknown-user handling

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use fitdash::config::ServerConfig;
use fitdash::context::DashboardContext;
use fitdash::dashboard::{DashboardService, SliderSettings, UserList, UserSummary};
use fitdash::errors::ErrorCode;
use fitdash::intelligence::{CalorieBand, PredictorVariant, SliderInput};
use fitdash::models::UserId;
use helpers::fixtures::{
    activity_artifact, context_with, per_user_artifact, sample_csv, sample_dataset, write_temp,
    USER_A, USER_B, USER_C,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_context_load_from_config() {
    let dataset = write_temp(&sample_csv());
    let model = write_temp(&per_user_artifact().to_string());
    let config = ServerConfig {
        dataset_path: dataset.path().to_path_buf(),
        model_path: model.path().to_path_buf(),
        ..ServerConfig::default()
    };

    let context = DashboardContext::load(&config).unwrap();

    assert_eq!(context.variant(), PredictorVariant::PerUser);
    assert_eq!(context.dataset().len(), 4);
    let debug = format!("{context:?}");
    assert!(debug.contains("rows: 4"));
    assert!(debug.contains("PerUser"));
}

#[test]
fn test_context_load_fails_on_either_part() {
    let dataset = write_temp(&sample_csv());
    let model = write_temp(&activity_artifact().to_string());

    let error = DashboardContext::from_paths("/nonexistent.csv", model.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::DataLoadError);
    assert!(error.code.is_startup_fatal());

    let error = DashboardContext::from_paths(dataset.path(), "/nonexistent.json").unwrap_err();
    assert_eq!(error.code, ErrorCode::ModelLoadError);
}

#[test]
fn test_user_list() {
    let list = UserList::from_dataset(&sample_dataset());

    assert_eq!(
        list.users,
        [USER_C, USER_A, USER_B].map(UserId::from).to_vec()
    );
    assert_eq!(list.default_user, Some(UserId::from(USER_C)));
}

#[test]
fn test_summary_with_and_without_sleep() {
    let dataset = sample_dataset();

    let summary = UserSummary::for_user(&dataset, &UserId::from(USER_A)).unwrap();
    assert!(close(summary.aggregate.mean_steps, 2000.0));
    assert!(close(summary.aggregate.mean_calories, 2100.0));
    assert!(summary.notices.is_empty());

    let summary = UserSummary::for_user(&dataset, &UserId::from(USER_B)).unwrap();
    assert_eq!(summary.aggregate.mean_sleep_hours.to_bits(), 0.0_f64.to_bits());
    assert_eq!(summary.notices.len(), 1);
    assert_eq!(summary.notices[0].code, ErrorCode::MissingField);
    assert_eq!(
        summary.notices[0].message,
        "No sleep data available for user 1624580081"
    );
}

#[test]
fn test_slider_defaults_from_means() {
    let context = context_with(&activity_artifact());
    let service = DashboardService::new(&context);

    let settings = service.slider_settings(&UserId::from(USER_A)).unwrap();

    assert_eq!(settings.defaults, SliderInput::new(2000, 35, 20, 210, 650));
    assert_eq!(settings.bounds, SliderSettings::placeholder().bounds);
}

#[test]
fn test_slider_defaults_are_clamped() {
    let csv = "Id,Date,TotalSteps,VeryActiveMinutes,FairlyActiveMinutes,LightlyActiveMinutes,SedentaryMinutes,Calories\n\
               1,2016-04-12,45000,200,7,3,1440,3000\n\
               1,2016-04-13,45000,201,8,4,1440,3000";
    let dataset = write_temp(csv);
    let model = write_temp(&activity_artifact().to_string());
    let context = DashboardContext::from_paths(dataset.path(), model.path()).unwrap();

    let settings = DashboardService::new(&context)
        .slider_settings(&UserId::from("1"))
        .unwrap();

    // 7.5 and 3.5 truncate toward zero
    assert_eq!(settings.defaults, SliderInput::new(30_000, 180, 7, 3, 1440));
}

#[test]
fn test_predict_activity_only() {
    let context = context_with(&activity_artifact());
    let service = DashboardService::new(&context);

    let view = service
        .predict(&UserId::from(USER_A), SliderInput::new(5000, 30, 15, 200, 600))
        .unwrap();

    assert_eq!(view.variant, PredictorVariant::ActivityOnly);
    assert!(view.input.user().is_none());
    assert!(close(view.advice.prediction, 2275.0));
    assert!(close(view.advice.average_calories, 2100.0));
    assert!(close(view.advice.delta, 175.0));
    assert_eq!(view.advice.band, CalorieBand::HigherBurn);
    assert_eq!(
        view.advice.caption,
        "That's 175 calories more than your average"
    );
}

#[test]
fn test_predict_per_user() {
    let context = context_with(&per_user_artifact());
    let service = DashboardService::new(&context);
    let sliders = SliderInput::new(5000, 30, 15, 200, 310);

    let view = service.predict(&UserId::from(USER_A), sliders).unwrap();
    assert_eq!(view.input.user(), Some(&UserId::from(USER_A)));
    assert!(close(view.advice.prediction, 2230.0));
    assert_eq!(view.advice.band, CalorieBand::HigherBurn);

    let view = service.predict(&UserId::from(USER_B), sliders).unwrap();
    assert!(close(view.advice.delta, 530.0));
}

#[test]
fn test_consistent_band() {
    let context = context_with(&activity_artifact());

    let view = DashboardService::new(&context)
        .predict(&UserId::from(USER_A), SliderInput::new(5000, 30, 15, 200, 310))
        .unwrap();

    assert!(close(view.advice.delta, 30.0));
    assert_eq!(view.advice.band, CalorieBand::Consistent);
}

#[test]
fn test_evaluate_uses_defaults() {
    let context = context_with(&activity_artifact());
    let service = DashboardService::new(&context);

    let view = service.evaluate(&UserId::from(USER_A), None).unwrap();

    assert_eq!(view.user_id, UserId::from(USER_A));
    assert_eq!(view.sliders.defaults, SliderInput::new(2000, 35, 20, 210, 650));
    // 1000 + 250 + 140 + 40 + 210 + 325
    assert!(close(view.prediction.advice.prediction, 1965.0));
    assert_eq!(view.prediction.advice.band, CalorieBand::LowerBurn);
    assert_eq!(
        view.prediction.advice.caption,
        "That's 135 calories less than your average"
    );
}

#[test]
fn test_evaluate_with_explicit_sliders() {
    let context = context_with(&activity_artifact());
    let service = DashboardService::new(&context);
    let sliders = SliderInput::new(5000, 30, 15, 200, 600);

    let view = service.evaluate(&UserId::from(USER_A), Some(sliders)).unwrap();

    assert!(close(view.prediction.advice.prediction, 2275.0));
    assert_eq!(view.sliders.defaults, SliderInput::new(2000, 35, 20, 210, 650));
}

#[test]
fn test_unknown_user_everywhere() {
    let context = context_with(&activity_artifact());
    let service = DashboardService::new(&context);
    let user = UserId::from("123");

    assert_eq!(service.summary(&user).unwrap_err().code, ErrorCode::UnknownUser);
    assert_eq!(
        service.slider_settings(&user).unwrap_err().code,
        ErrorCode::UnknownUser
    );
    assert_eq!(
        service
            .predict(&user, SliderInput::new(0, 0, 0, 0, 0))
            .unwrap_err()
            .code,
        ErrorCode::UnknownUser
    );
    assert_eq!(
        service.evaluate(&user, None).unwrap_err().code,
        ErrorCode::UnknownUser
    );
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let context = context_with(&per_user_artifact());
    let service = DashboardService::new(&context);
    let user = UserId::from(USER_A);

    let first = service.evaluate(&user, None).unwrap();
    let second = service.evaluate(&user, None).unwrap();

    assert_eq!(first.prediction.advice, second.prediction.advice);
    assert_eq!(first.summary.series, second.summary.series);
}

#[test]
fn test_unknown_user_gets_placeholder_sliders() {
    let context = context_with(&activity_artifact());
    let service = DashboardService::new(&context);

    let settings = service.slider_settings_or_placeholder(&UserId::from("123"));

    assert_eq!(settings, SliderSettings::placeholder());
    assert_eq!(settings.defaults, SliderInput::new(0, 0, 20, 200, 600));

    let known = service.slider_settings_or_placeholder(&UserId::from(USER_A));
    assert_eq!(known.defaults, SliderInput::new(2000, 35, 20, 210, 650));
}
