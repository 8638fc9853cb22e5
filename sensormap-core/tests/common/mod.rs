//! Common test utilities for integration tests
//!
//! This module provides:
//! - Seeded random generators so sensor values repeat between runs
//! - Float assertion helpers for mapping results

#![allow(dead_code)]

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Seed used by default across integration tests
pub const TEST_SEED: u64 = 42;

/// Tolerance for comparing mapped floats
pub const EPSILON: f64 = 1e-9;

/// Seeded generator with the default seed
pub fn seeded_rng() -> Pcg32 {
    Pcg32::seed_from_u64(TEST_SEED)
}

/// Seeded generator with an explicit seed
pub fn rng_with_seed(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Assert two floats are equal within a tolerance scaled to their magnitude
pub fn assert_close(actual: f64, expected: f64) {
    let scale = actual.abs().max(expected.abs()).max(1.0);
    assert!(
        (actual - expected).abs() <= EPSILON * scale,
        "expected {expected}, got {actual}"
    );
}

/// Assert `value` lies in the closed interval spanned by `a` and `b`, in either order
pub fn assert_within(value: f64, a: f64, b: f64) {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    assert!(
        (low..=high).contains(&value),
        "{value} not within [{low}, {high}]"
    );
}
