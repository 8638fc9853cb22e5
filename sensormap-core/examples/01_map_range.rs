//! Range Mapping Example
//!
//! Maps numbers between intervals with and without clamping.
//!
//! ## What You'll Learn
//!
//! - Mapping with the free function and with a reusable `RangeMapper`
//! - What clamping does to out-of-range input
//! - How inverted and degenerate ranges behave
//! - Rejecting non-finite input with `try_map_range`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_map_range
//! ```

use sensormap_core::{map_range, try_map_range, RangeMapper};

fn main() {
    println!("Range Mapping Example");
    println!("=====================\n");

    // Sensor voltage 0..3.3 V onto a percentage
    let percent = RangeMapper::new(0.0, 3.3, 0.0, 100.0);
    println!("Voltage to percent (clamped):");
    for volts in [0.0, 1.1, 1.65, 3.3, 4.0] {
        println!("  {:4.2} V -> {:6.2} %", volts, percent.map(volts));
    }
    println!();

    println!("Same mapping, unconstrained:");
    let raw = percent.unconstrained();
    for volts in [-0.5, 4.0] {
        println!("  {:4.2} V -> {:6.2} %", volts, raw.map(volts));
    }
    println!();

    // Higher input, lower output
    println!("Inverted output range (1..10 onto 255..0):");
    for x in [1, 5, 10] {
        println!("  {:2} -> {:6.2}", x, map_range(x, 1, 10, 255, 0, true));
    }
    println!();

    println!("Degenerate input range (5..5 onto 0..255):");
    println!("  42 -> {}", map_range(42, 5, 5, 0, 255, true));
    println!();

    println!("Checked mapping:");
    match try_map_range(f64::NAN, 0, 10, 0, 100, true) {
        Ok(v) => println!("  NaN -> {}", v),
        Err(e) => println!("  NaN rejected: {}", e),
    }
    match percent.try_map(2.0) {
        Ok(v) => println!("  2.00 V -> {:.2} %", v),
        Err(e) => println!("  2.00 V rejected: {}", e),
    }
}
