//! Sensor Model Limits
//!
//! Bounds for the randomly generated sensor value and the defaults applied
//! when a temperature sensor is built without an explicit unit.

use crate::sensors::TemperatureUnit;

// ===== SENSOR VALUE =====

/// Smallest value a sensor can hold (inclusive).
pub const SENSOR_VALUE_MIN: u8 = 0;

/// Largest value a sensor can hold (inclusive).
///
/// Values are drawn uniformly over `SENSOR_VALUE_MIN..=SENSOR_VALUE_MAX`.
pub const SENSOR_VALUE_MAX: u8 = 50;

// ===== TEMPERATURE SENSOR =====

/// Unit used when a temperature sensor is created without one.
pub const DEFAULT_TEMPERATURE_UNIT: TemperatureUnit = TemperatureUnit::Fahrenheit;

/// Longest unit symbol echoed back in an `UnknownUnit` error.
///
/// Longer input is truncated; the error only needs enough to be recognizable.
pub const MAX_ECHOED_SYMBOL_LEN: usize = 8;
