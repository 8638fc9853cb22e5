//! Range mapping and a small sensor model
//!
//! Two independent pieces:
//! - [`mapping`]: linear mapping of a number from one interval to another,
//!   clamped to the output interval by default
//! - [`sensors`]: named sensors holding a randomly drawn value, with a
//!   temperature variant that carries a unit
//!
//! Key constraints:
//! - `no_std` + `alloc` when the `std` feature is off
//! - No panics for finite input
//! - Randomness is always injected, never global
//!
//! ```no_run
//! use sensormap_core::{map_range, Sensor, TemperatureSensor, TemperatureUnit};
//!
//! // 5 of 1..=10 mapped onto 0..=255
//! let mapped = map_range(5, 1, 10, 0, 255, true);
//! assert!(mapped > 113.0 && mapped < 114.0);
//!
//! let mut rng = rand::thread_rng();
//! let outside = TemperatureSensor::with_unit("Outside", TemperatureUnit::Celsius, &mut rng)?;
//! println!("{}", outside.description());
//! # Ok::<(), sensormap_core::SensorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod constants;
pub mod errors;
pub mod mapping;
pub mod sensors;

// Public API
pub use errors::{MappingError, MappingResult, SensorError, SensorResult};
pub use mapping::{map_range, mapping_table, try_map_range, MappedRow, RangeMapper};
pub use sensors::{
    AnySensor,
    GenericSensor,
    Sensor,
    SensorKind,
    TemperatureSensor,
    TemperatureUnit,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
