// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

// --- define_id! macro tests ---

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct SampleId("smp-");
}

#[test]
fn generated_ids_carry_prefix_and_fit_inline() {
    let id = SampleId::new();
    assert!(id.as_str().starts_with("smp-"));
    assert_eq!(id.as_str().len(), 23);
}

#[test]
fn generated_ids_are_unique() {
    assert_ne!(SampleId::new(), SampleId::new());
}

#[test]
fn from_string_keeps_external_shape() {
    let id = SampleId::from_string("backend-7f3");
    assert_eq!(id.as_str(), "backend-7f3");
    assert_eq!(id.suffix(), "backend-7f3");
}

#[test]
fn hash_map_lookup_by_str() {
    let mut map = HashMap::new();
    map.insert(SampleId::from_string("k"), 42);
    assert_eq!(map.get("k"), Some(&42));
}

// --- short() tests ---

#[test]
fn suffix_strips_prefix_and_short_truncates() {
    let id = SampleId::from_string("smp-abc123");
    assert_eq!(id.suffix(), "abc123");
    assert_eq!(id.short(3), "abc");
    assert_eq!(id.short(100), "abc123");
}

#[test]
fn short_fn_on_str() {
    let s = "abcdefghijklmnop";
    assert_eq!(short(s, 8), "abcdefgh");
    assert_eq!(short(s, 100), s);
    assert_eq!(short("abc", 8), "abc");
}

// --- serde ---

#[test]
fn serde_is_transparent() {
    let id = SampleId::from_string("smp-x");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"smp-x\"");
    let back: SampleId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
