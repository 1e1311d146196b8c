// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for fitdash-cli
// ABOUTME: Renders user lists, summaries, predictions, and the artifact check report

use fitdash::config::ServerConfig;
use fitdash::constants::units::MINUTES_PER_HOUR;
use fitdash::context::DashboardContext;
use fitdash::dashboard::{PredictionView, SliderSettings, UserList, UserSummary};
use fitdash::intelligence::{CalorieBand, SliderInput};
use fitdash::models::UserId;

const RULE_WIDTH: usize = 50;

/// Display the user selector contents
pub fn display_user_list(list: &UserList) {
    println!("Users ({}):", list.users.len());
    for user in &list.users {
        if list.default_user.as_ref() == Some(user) {
            println!("   {user} (default)");
        } else {
            println!("   {user}");
        }
    }
}

/// Display the placeholder shown for an identifier with no rows
pub fn display_unknown_user(user: &UserId) {
    println!("\nNo data found for user {user}.");
    println!("Run `fitdash-cli users` to see the available users.");
}

/// Display slider starting positions and their ranges
pub fn display_slider_settings(settings: &SliderSettings) {
    let bounds = &settings.bounds;
    let defaults = &settings.defaults;
    println!("\nSlider Defaults:");
    for (label, value, bound) in [
        ("Total Steps", defaults.steps, bounds.steps),
        ("Very Active Minutes", defaults.very, bounds.very),
        ("Fairly Active Minutes", defaults.fairly, bounds.fairly),
        ("Lightly Active Minutes", defaults.lightly, bounds.lightly),
        ("Sedentary Minutes", defaults.sedentary, bounds.sedentary),
    ] {
        println!("   {label:<24} {value:>6}  ({}-{})", bound.min, bound.max);
    }
}

/// Display averages, activity levels, and sleep data for one user
pub fn display_summary(user: &UserId, summary: &UserSummary) {
    let aggregate = &summary.aggregate;
    println!("\nUser {user}");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Average Daily Steps: {}", group_thousands(aggregate.mean_steps));
    println!(
        "Avg Very Active Minutes: {:.0}",
        aggregate.mean_very_active_minutes
    );
    println!("Avg Sleep: {:.1} hours", aggregate.mean_sleep_hours);
    println!("Avg Calories Burned: {:.0}", aggregate.mean_calories);
    println!("Days Recorded: {}", aggregate.days);

    let series = &summary.series;
    if let (Some(first), Some(last)) = (series.steps_trend.first(), series.steps_trend.last()) {
        println!("\nSteps Trend: {} to {}", first.date, last.date);
        let peak = series.steps_trend.iter().map(|p| p.total_steps).max().unwrap_or(0);
        println!("   Peak Day: {peak} steps");
    }

    if !series.activity_levels.is_empty() {
        println!("\nActivity Level Distribution:");
        for level in &series.activity_levels {
            println!("   {:<20} {} days", level.label, level.days);
        }
    }

    if !series.steps_vs_sleep.is_empty() {
        println!("\nSteps vs Sleep:");
        for point in &series.steps_vs_sleep {
            println!(
                "   {}  {:>6} steps  {:.1} h",
                point.date,
                point.total_steps,
                f64::from(point.minutes_asleep) / MINUTES_PER_HOUR
            );
        }
    }

    for notice in &summary.notices {
        println!("\nNote: {}", notice.message);
    }
}

/// Display a prediction and how it compares with the user's average
pub fn display_prediction(sliders: &SliderInput, view: &PredictionView) {
    let advice = &view.advice;
    println!("\nWhat-If Calorie Prediction for User {}", view.user_id);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Total Steps: {}", sliders.steps);
    println!("   Very Active Minutes: {}", sliders.very);
    println!("   Fairly Active Minutes: {}", sliders.fairly);
    println!("   Lightly Active Minutes: {}", sliders.lightly);
    println!("   Sedentary Minutes: {}", sliders.sedentary);
    println!(
        "   Total Active Minutes: {}",
        view.input.total_active_minutes()
    );

    println!("\nPredicted Calories Burned: {}", advice.predicted_calories);
    println!("{}", advice.caption);
    let marker = match advice.band {
        CalorieBand::HigherBurn => "Success",
        CalorieBand::Consistent => "Info",
        CalorieBand::LowerBurn => "Warning",
    };
    println!("{marker}: {}", advice.message);
}

/// Display what the artifact check loaded
pub fn display_check_report(config: &ServerConfig, context: &DashboardContext) {
    let dataset = context.dataset();
    let normalization = dataset.normalization();
    println!("\nStartup Artifacts OK");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Dataset: {}", config.dataset_path.display());
    println!("   Rows: {}", dataset.len());
    println!("   Users: {}", dataset.user_count());
    println!(
        "   TotalActiveMinutes computed: {}, corrected: {}",
        normalization.computed_totals, normalization.corrected_totals
    );
    println!("Model: {}", config.model_path.display());
    println!("   Variant: {:?}", context.variant());
}

/// Round to a whole number and insert thousands separators
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}
