// ABOUTME: Shared helper modules for dashboard integration tests
// ABOUTME: Re-exports the axum request/response test wrappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod axum_test;
