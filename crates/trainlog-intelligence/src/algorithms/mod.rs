// ABOUTME: Algorithm selection types for configurable analytics calculations
// ABOUTME: Currently the TSS formula; callers pick one through AnalyticsConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training Stress Score algorithms
pub mod tss;

pub use tss::TssAlgorithm;
