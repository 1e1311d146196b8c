// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fitdash-cli
// ABOUTME: Provides the dataset browsing, prediction, and artifact check commands

mod check;
mod dataset;
mod predict;

pub use check::check;
pub use dataset::{summary, users};
pub use predict::{predict, SliderOverrides};
