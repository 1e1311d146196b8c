// ABOUTME: Core data models for the activity insights pipeline
// ABOUTME: Re-exports UserId, ActivityRecord, and ActivityRecordBuilder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `UserId`: categorical identifier selecting a user's rows
//! - `ActivityRecord`: one user's day of steps, activity minutes, sleep, and calories

mod activity;
mod user;

pub use activity::{ActivityRecord, ActivityRecordBuilder};
pub use user::UserId;
