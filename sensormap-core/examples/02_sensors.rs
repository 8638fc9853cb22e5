//! Sensor Model Example
//!
//! Builds generic and temperature sensors and prints their descriptions.
//!
//! ## What You'll Learn
//!
//! - Passing a random generator into sensor constructors
//! - Getting identical sensors from identical seeds
//! - Describing mixed sensors through `AnySensor` and `&dyn Sensor`
//! - Unit validation on construction and on change
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_sensors
//! ```

use rand::{rngs::StdRng, SeedableRng};
use sensormap_core::{
    AnySensor, GenericSensor, Sensor, SensorResult, TemperatureSensor, TemperatureUnit,
};

fn main() -> SensorResult<()> {
    println!("Sensor Model Example");
    println!("====================\n");

    // Seeded so every run prints the same values
    let mut rng = StdRng::seed_from_u64(2020);

    let sensors: Vec<AnySensor> = vec![
        GenericSensor::new("MySensor", &mut rng)?.into(),
        TemperatureSensor::new("Inside", &mut rng)?.into(),
        TemperatureSensor::with_unit("Outside", TemperatureUnit::Celsius, &mut rng)?.into(),
        TemperatureSensor::from_symbol("Lab", "K", &mut rng)?.into(),
    ];

    println!("Descriptions:");
    for sensor in &sensors {
        let dynamic: &dyn Sensor = sensor;
        println!("  [{:<11}] {}", dynamic.kind(), dynamic);
    }
    println!();

    println!("Unit validation:");
    match TemperatureSensor::from_symbol("Roof", "X", &mut rng) {
        Ok(sensor) => println!("  accepted: {}", sensor),
        Err(e) => println!("  rejected: {}", e),
    }

    let mut inside = TemperatureSensor::new("Inside", &mut rng)?;
    println!("  before:   {}", inside);
    if let Err(e) = inside.set_unit_symbol("R") {
        println!("  rejected: {}", e);
    }
    inside.set_unit_symbol("C")?;
    println!("  after:    {}", inside);

    Ok(())
}
