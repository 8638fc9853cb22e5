//! Demonstration Driver
//!
//! Prints the 1..=10 to 0..=255 mapping table one row at a time, then
//! describes a generic sensor and two temperature sensors.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_demo_driver
//! ```

use std::{thread, time::Duration};

use sensormap_core::{
    constants::{DEMO_MAX_BASE, DEMO_MIN_BASE, DEMO_ROW_DELAY_MS, DEMO_TABLE_CAPACITY},
    mapping_table, GenericSensor, RangeMapper, TemperatureSensor, TemperatureUnit,
};

/// Debug mode prints an extra banner
const DEBUG: bool = true;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if DEBUG {
        println!("Running in DEBUG mode.  Turn off for normal operation.");
    }

    // Map numbers
    let rows = mapping_table::<DEMO_TABLE_CAPACITY>(DEMO_MIN_BASE, DEMO_MAX_BASE, &RangeMapper::demo())?;
    for row in &rows {
        println!("{}", row);
        thread::sleep(Duration::from_millis(DEMO_ROW_DELAY_MS));
    }

    // Sensors
    let mut rng = rand::thread_rng();
    let sensor = GenericSensor::new("MySensor", &mut rng)?;
    println!("{}", sensor);
    let temp_in = TemperatureSensor::new("Inside", &mut rng)?;
    println!("{}", temp_in);
    let temp_out = TemperatureSensor::with_unit("Outside", TemperatureUnit::Celsius, &mut rng)?;
    println!("{}", temp_out);

    Ok(())
}
