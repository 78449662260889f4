// ABOUTME: Shape normalization for completion output into a guaranteed list of items
// ABOUTME: Accepts a bare array, an items-wrapped object, or a single object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriLens

//! Shape normalization
//!
//! Completion providers asked for a JSON array sometimes return the array
//! wrapped in an object, or a single object for a single item. Normalization
//! converts any of those shapes into an ordered list without inspecting the
//! elements themselves.

use serde_json::Value;

/// Normalize parsed completion output into an ordered list of items
///
/// Accepted shapes:
/// - a bare array: returned as-is
/// - an object with an `items` array: that array
/// - any other object: a one-element list containing it
///
/// Anything else that parsed as valid JSON (an `items` key holding a
/// non-array, a bare scalar) is wrapped in a one-element list — the result
/// is always a list, and elements are never validated here.
#[must_use]
pub fn into_items(parsed: Value) -> Vec<Value> {
    match parsed {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            Some(other) => vec![other],
            None => vec![Value::Object(map)],
        },
        other => vec![other],
    }
}
