// ABOUTME: Shared test helper module declarations
// ABOUTME: Exposes the axum request helper to integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

pub mod axum_test;
