// ABOUTME: Re-exports command modules for volume-cli
// ABOUTME: Provides access to evaluate, ranges and table commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod evaluate;
pub mod ranges;
pub mod table;
