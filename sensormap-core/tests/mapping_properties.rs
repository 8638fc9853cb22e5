//! Property tests for range mapping
//!
//! Covers the invariants that must hold for any finite input:
//! - Constrained results stay inside the output interval
//! - Endpoints map onto endpoints
//! - Degenerate input ranges fall back to `out_min`
//! - Inverted output ranges are monotonically decreasing
//! - Unconstrained mapping extrapolates

mod common;

use proptest::prelude::*;
use sensormap_core::{map_range, mapping_table, try_map_range, MappingError, RangeMapper};

use common::{assert_close, assert_within};

/// Keeps products far from overflow so only mapping behavior is tested
const BOUND: f64 = 1e6;

fn finite() -> impl Strategy<Value = f64> {
    -BOUND..BOUND
}

/// An input range with a width well above rounding noise
fn input_range() -> impl Strategy<Value = (f64, f64)> {
    (finite(), 1e-3..BOUND).prop_map(|(start, width)| (start, start + width))
}

proptest! {
    #[test]
    fn constrained_output_within_bounds(
        (in_min, in_max) in input_range(),
        t in 0.0f64..=1.0,
        out_min in finite(),
        out_max in finite(),
    ) {
        let number = in_min + t * (in_max - in_min);
        let mapped = map_range(number, in_min, in_max, out_min, out_max, true);
        assert_within(mapped, out_min, out_max);
    }

    #[test]
    fn constrained_output_within_bounds_for_any_input(
        number in finite(),
        (in_min, in_max) in input_range(),
        out_min in finite(),
        out_max in finite(),
    ) {
        let mapped = map_range(number, in_min, in_max, out_min, out_max, true);
        assert_within(mapped, out_min, out_max);
    }

    #[test]
    fn endpoints_map_to_endpoints(
        (in_min, in_max) in input_range(),
        out_min in finite(),
        out_max in finite(),
    ) {
        let low = map_range(in_min, in_min, in_max, out_min, out_max, true);
        let high = map_range(in_max, in_min, in_max, out_min, out_max, true);
        prop_assert_eq!(low, out_min);
        prop_assert_eq!(high, out_max);

        let raw_high = map_range(in_max, in_min, in_max, out_min, out_max, false);
        prop_assert_eq!(raw_high, out_max);
    }

    #[test]
    fn integer_endpoints_are_exact(
        in_min in -1000i32..1000,
        width in 1i32..1000,
        out_min in -1000i32..1000,
        out_max in -1000i32..1000,
    ) {
        let in_max = in_min + width;
        prop_assert_eq!(map_range(in_min, in_min, in_max, out_min, out_max, true), f64::from(out_min));
        prop_assert_eq!(map_range(in_max, in_min, in_max, out_min, out_max, true), f64::from(out_max));
    }

    #[test]
    fn degenerate_range_yields_out_min(
        number in finite(),
        edge in finite(),
        out_min in finite(),
        out_max in finite(),
        constrained in any::<bool>(),
    ) {
        let mapped = map_range(number, edge, edge, out_min, out_max, constrained);
        prop_assert_eq!(mapped, out_min);
    }

    #[test]
    fn inverted_output_is_non_increasing(
        (in_min, in_max) in input_range(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        low in finite(),
        span in 1.0f64..BOUND,
    ) {
        let high = low + span;
        let (t1, t2) = if a <= b { (a, b) } else { (b, a) };
        // Keep rounding from stepping past the upper endpoint
        let x1 = (in_min + t1 * (in_max - in_min)).min(in_max);
        let x2 = (in_min + t2 * (in_max - in_min)).min(in_max);

        let y1 = map_range(x1, in_min, in_max, high, low, true);
        let y2 = map_range(x2, in_min, in_max, high, low, true);
        prop_assert!(y1 >= y2, "{} then {} for x {} then {}", y1, y2, x1, x2);
    }

    #[test]
    fn unconstrained_agrees_inside_the_range(
        (in_min, in_max) in input_range(),
        t in 0.0f64..=1.0,
        out_min in finite(),
        out_max in finite(),
    ) {
        let number = in_min + t * (in_max - in_min);
        let clamped = map_range(number, in_min, in_max, out_min, out_max, true);
        let raw = map_range(number, in_min, in_max, out_min, out_max, false);
        // Clamping only corrects rounding noise inside the input range
        let tolerance = 1e-9 * out_min.abs().max(out_max.abs()).max(1.0);
        prop_assert!((clamped - raw).abs() <= tolerance);
    }

    #[test]
    fn try_map_accepts_all_finite(
        number in finite(),
        (in_min, in_max) in input_range(),
        out_min in finite(),
        out_max in finite(),
        constrained in any::<bool>(),
    ) {
        let expected = map_range(number, in_min, in_max, out_min, out_max, constrained);
        let result = try_map_range(number, in_min, in_max, out_min, out_max, constrained);
        prop_assert_eq!(result, Ok(expected));
    }
}

#[test]
fn degenerate_example() {
    for x in [-10, 0, 5, 99] {
        assert_eq!(map_range(x, 5, 5, 0, 255, true), 0.0);
    }
}

#[test]
fn inverted_example() {
    assert_eq!(map_range(1, 1, 10, 255, 0, true), 255.0);
    assert_eq!(map_range(10, 1, 10, 255, 0, true), 0.0);
    assert_within(map_range(5, 1, 10, 255, 0, true), 0.0, 255.0);
}

#[test]
fn extrapolation_example() {
    assert!(map_range(20, 1, 10, 0, 255, false) > 255.0);
}

#[test]
fn try_map_rejects_each_non_finite_argument() {
    let good = [5.0, 0.0, 10.0, 0.0, 100.0];
    for position in 0..good.len() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut args = good;
            args[position] = bad;
            let [n, a, b, c, d] = args;
            assert_eq!(
                try_map_range(n, a, b, c, d, true),
                Err(MappingError::InvalidValue),
                "argument {position} = {bad}"
            );
        }
    }
}

#[test]
fn decimal_upper_endpoints_are_exact() {
    let points = [0.1, 0.2, 0.3, 0.7, 1.1, 2.2, 3.3, 0.01, 100.5];
    for &in_min in &points {
        for &in_max in &points {
            if in_min == in_max {
                continue;
            }
            for &out_min in &points {
                for &out_max in &points {
                    let mapped = map_range(in_max, in_min, in_max, out_min, out_max, true);
                    assert_eq!(
                        mapped, out_max,
                        "map_range({in_max}, {in_min}, {in_max}, {out_min}, {out_max})"
                    );
                }
            }
        }
    }
}

#[test]
fn table_rounding_matches_ties_to_even() {
    let rows = mapping_table::<8>(0, 4, &RangeMapper::new(0, 4, 0, 10)).unwrap();
    let mapped: Vec<i32> = rows.iter().map(|row| row.mapped).collect();
    // 0, 2.5, 5, 7.5, 10
    assert_eq!(mapped, [0, 2, 5, 8, 10]);
}

#[test]
fn mixed_numeric_types() {
    let mapped = map_range(5u8, 0i32, 10u16, 0.0f32, 1.0f64, true);
    assert_close(mapped, 0.5);
}

#[test]
fn demo_table_renders_like_the_driver() {
    let rows = mapping_table::<16>(1, 10, &RangeMapper::demo()).unwrap();
    let lines: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
    assert_eq!(lines.first().map(String::as_str), Some("Base:  1, Mapped:   0"));
    assert_eq!(lines.get(4).map(String::as_str), Some("Base:  5, Mapped: 113"));
    assert_eq!(lines.last().map(String::as_str), Some("Base: 10, Mapped: 255"));
}

#[test]
fn unconstrained_table_extrapolates() {
    let mapper = RangeMapper::demo().unconstrained();
    let rows = mapping_table::<32>(-2, 20, &mapper).unwrap();
    assert_eq!(rows.len(), 23);
    assert!(rows.first().unwrap().mapped < 0);
    assert!(rows.last().unwrap().mapped > 255);

    let clamped = mapping_table::<32>(-2, 20, &RangeMapper::demo()).unwrap();
    assert!(clamped.iter().all(|row| (0..=255).contains(&row.mapped)));
}
