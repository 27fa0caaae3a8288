// ABOUTME: Unit tests for environment-driven advisor settings
// ABOUTME: Validates defaults, parsing, fallbacks and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use volume_advisor::config::AdvisorSettings;
use volume_advisor::constants::env_config;
use volume_advisor::formatters::OutputFormat;
use volume_advisor::logging::LoggingConfig;
use volume_advisor::ExperienceLevel;

const ADVISOR_VARS: [&str; 4] = [
    env_config::EXPERIENCE_LEVEL,
    env_config::TRAINING_DAYS,
    env_config::OUTPUT_FORMAT,
    env_config::SEVERE_DEVIATION_RATIO,
];

fn clear_advisor_env() {
    for key in ADVISOR_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_from_empty_environment() {
    clear_advisor_env();

    let settings = AdvisorSettings::from_env().unwrap();
    assert_eq!(settings.experience_level, ExperienceLevel::Beginner);
    assert_eq!(settings.training_days, 3);
    assert_eq!(settings.output_format, OutputFormat::Text);
    assert!((settings.advisor.severe_deviation_ratio - 0.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_values_parsed_from_environment() {
    clear_advisor_env();
    env::set_var(env_config::EXPERIENCE_LEVEL, "Advanced");
    env::set_var(env_config::TRAINING_DAYS, " 5 ");
    env::set_var(env_config::OUTPUT_FORMAT, "json");
    env::set_var(env_config::SEVERE_DEVIATION_RATIO, "0.25");

    let settings = AdvisorSettings::from_env().unwrap();
    assert_eq!(settings.experience_level, ExperienceLevel::Advanced);
    assert_eq!(settings.training_days, 5);
    assert_eq!(settings.output_format, OutputFormat::Json);
    assert!((settings.advisor.severe_deviation_ratio - 0.25).abs() < f64::EPSILON);
    assert!(settings.summary().contains("level=advanced"));

    clear_advisor_env();
}

#[test]
#[serial]
fn test_blank_values_use_defaults() {
    clear_advisor_env();
    env::set_var(env_config::EXPERIENCE_LEVEL, "   ");

    let settings = AdvisorSettings::from_env().unwrap();
    assert_eq!(settings.experience_level, ExperienceLevel::Beginner);

    clear_advisor_env();
}

#[test]
#[serial]
fn test_training_days_out_of_range_rejected() {
    clear_advisor_env();

    env::set_var(env_config::TRAINING_DAYS, "0");
    assert!(AdvisorSettings::from_env().is_err());

    env::set_var(env_config::TRAINING_DAYS, "8");
    assert!(AdvisorSettings::from_env().is_err());

    env::set_var(env_config::TRAINING_DAYS, "three");
    assert!(AdvisorSettings::from_env().is_err());

    clear_advisor_env();
}

#[test]
#[serial]
fn test_malformed_values_rejected() {
    clear_advisor_env();

    env::set_var(env_config::EXPERIENCE_LEVEL, "expert");
    let err = AdvisorSettings::from_env().unwrap_err();
    assert!(err.to_string().contains("VOLUME_EXPERIENCE_LEVEL"));
    env::remove_var(env_config::EXPERIENCE_LEVEL);

    env::set_var(env_config::SEVERE_DEVIATION_RATIO, "-1");
    assert!(AdvisorSettings::from_env().is_err());

    env::set_var(env_config::SEVERE_DEVIATION_RATIO, "NaN");
    assert!(AdvisorSettings::from_env().is_err());

    clear_advisor_env();
}

#[test]
#[serial]
fn test_log_directives_belong_to_logging_config() {
    clear_advisor_env();
    env::set_var(env_config::RUST_LOG, "info,volume_intelligence=debug");

    assert!(AdvisorSettings::from_env().is_ok());
    let logging = LoggingConfig::from_env();
    assert_eq!(logging.level, "info,volume_intelligence=debug");

    env::remove_var(env_config::RUST_LOG);
}
