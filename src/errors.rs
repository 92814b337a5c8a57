// ABOUTME: Unified error types re-exported from trainlog-core
// ABOUTME: Gives binaries and tests one import path for AppError and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use trainlog_core::errors::*;
