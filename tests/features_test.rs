// ABOUTME: Tests for the feature vector builder feeding the calorie predictors
// ABOUTME: Checks column order, the derived total, and the optional user column

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitdash::intelligence::{FeatureVectorBuilder, PredictionInput, PredictorVariant, SliderInput};
use fitdash::models::UserId;
use serde_json::json;

#[test]
fn test_build_orders_features_and_derives_total() {
    let input = FeatureVectorBuilder::build(SliderInput::new(5000, 30, 15, 200, 600));

    assert_eq!(input.values(), [5000.0, 30.0, 15.0, 200.0, 600.0, 245.0]);
    assert_eq!(input.total_active_minutes(), 245);
    assert!(input.user().is_none());
}

#[test]
fn test_columns_match_training_order() {
    assert_eq!(
        PredictionInput::columns(),
        [
            "TotalSteps",
            "VeryActiveMinutes",
            "FairlyActiveMinutes",
            "LightlyActiveMinutes",
            "SedentaryMinutes",
            "TotalActiveMinutes",
        ]
    );
}

#[test]
fn test_total_does_not_overflow_at_extremes() {
    let input = FeatureVectorBuilder::build(SliderInput::new(0, u32::MAX, u32::MAX, u32::MAX, 0));
    assert_eq!(input.total_active_minutes(), 3 * u64::from(u32::MAX));
}

#[test]
fn test_variant_decides_user_column() {
    let user = UserId::from("1503960366");
    let sliders = SliderInput::new(1, 2, 3, 4, 5);

    let per_user = FeatureVectorBuilder::build_for_variant(PredictorVariant::PerUser, &user, sliders);
    let activity =
        FeatureVectorBuilder::build_for_variant(PredictorVariant::ActivityOnly, &user, sliders);

    assert_eq!(per_user.user(), Some(&user));
    assert!(activity.user().is_none());
    assert_eq!(per_user.values(), activity.values());
}

#[test]
fn test_serializes_with_dataset_column_names() {
    let input =
        FeatureVectorBuilder::build_for_user(&UserId::from("977"), SliderInput::new(10, 1, 2, 3, 4));

    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "Id": "977",
            "TotalSteps": 10,
            "VeryActiveMinutes": 1,
            "FairlyActiveMinutes": 2,
            "LightlyActiveMinutes": 3,
            "SedentaryMinutes": 4,
            "TotalActiveMinutes": 6
        })
    );
}
