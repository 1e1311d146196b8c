// ABOUTME: What-if calorie prediction command for fitdash-cli
// ABOUTME: Starts from the user's average day and applies any slider values given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{display_prediction, display_slider_settings, display_unknown_user};
use crate::Result;
use fitdash::config::ServerConfig;
use fitdash::context::DashboardContext;
use fitdash::dashboard::DashboardService;
use fitdash::errors::ErrorCode;
use fitdash::intelligence::SliderInput;
use fitdash::models::UserId;

/// Slider values given on the command line; absent ones use the user's defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderOverrides {
    pub steps: Option<u32>,
    pub very: Option<u32>,
    pub fairly: Option<u32>,
    pub lightly: Option<u32>,
    pub sedentary: Option<u32>,
}

impl SliderOverrides {
    fn apply(self, defaults: SliderInput) -> SliderInput {
        SliderInput {
            steps: self.steps.unwrap_or(defaults.steps),
            very: self.very.unwrap_or(defaults.very),
            fairly: self.fairly.unwrap_or(defaults.fairly),
            lightly: self.lightly.unwrap_or(defaults.lightly),
            sedentary: self.sedentary.unwrap_or(defaults.sedentary),
        }
    }
}

/// Predict calories for one planned day
pub fn predict(config: &ServerConfig, user: &UserId, overrides: SliderOverrides) -> Result<()> {
    let context = DashboardContext::load(config)?;
    let service = DashboardService::new(&context);

    let settings = service.slider_settings_or_placeholder(user);
    let sliders = overrides.apply(settings.defaults);

    match service.predict(user, sliders) {
        Ok(view) => display_prediction(&sliders, &view),
        Err(e) if e.code == ErrorCode::UnknownUser => {
            display_unknown_user(user);
            display_slider_settings(&settings);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
