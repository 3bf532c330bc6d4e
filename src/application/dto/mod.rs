//! # Data Transfer Objects
//!
//! ユースケースの入力

pub mod chart_config;
pub mod record_submission;
