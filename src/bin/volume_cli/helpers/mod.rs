// ABOUTME: Re-exports helper modules for volume-cli
// ABOUTME: Provides access to output display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
