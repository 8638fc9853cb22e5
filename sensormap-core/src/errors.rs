//! Error Types for Range Mapping and Sensor Construction
//!
//! ## Design
//!
//! Errors stay small and allocation free so they work the same with and
//! without `std`:
//!
//! 1. **No heap**: the only variable-length payload, an unknown unit
//!    symbol, is echoed in a fixed-capacity `heapless::String`.
//! 2. **Actionable**: each variant carries the values needed to explain the
//!    failure without a second query.
//!
//! ## What Does Not Fail
//!
//! [`map_range`](crate::mapping::map_range) never returns an error. A
//! degenerate input range (`in_min == in_max`) yields `out_min`, and
//! non-finite input flows through IEEE arithmetic. Callers that want
//! non-finite values rejected use
//! [`try_map_range`](crate::mapping::try_map_range), which reports
//! [`MappingError::InvalidValue`].
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use sensormap_core::{SensorError, TemperatureSensor};
//!
//! fn outdoor_sensor(unit: &str, rng: &mut impl rand::Rng) -> Option<TemperatureSensor> {
//!     match TemperatureSensor::from_symbol("Outside", unit, rng) {
//!         Ok(sensor) => Some(sensor),
//!         Err(SensorError::UnknownUnit { .. }) => {
//!             // Bad configuration - fall back to the default unit
//!             TemperatureSensor::new("Outside", rng).ok()
//!         }
//!         Err(_) => None,
//!     }
//! }
//! ```

use heapless::String as InlineString;
use thiserror_no_std::Error;

use crate::constants::sensors::MAX_ECHOED_SYMBOL_LEN;

/// Result type for range-mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Result type for sensor construction and mutation
pub type SensorResult<T> = Result<T, SensorError>;

/// Range-mapping errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MappingError {
    /// An input or the mapped result is NaN or infinite
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// A mapping table does not fit in its fixed capacity
    #[error("Mapping table needs {required} rows, capacity is {capacity}")]
    TableOverflow {
        /// Rows the requested base range produces
        required: usize,
        /// Rows the table can hold
        capacity: usize,
    },

    /// A mapping table was requested over a range with no integers in it
    #[error("Empty table range: first {first} is after last {last}")]
    EmptyRange {
        /// First base requested
        first: i32,
        /// Last base requested
        last: i32,
    },
}

/// Sensor construction and mutation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// Sensor name was empty
    #[error("Sensor name must not be empty")]
    EmptyName,

    /// An explicit sensor value lies outside the allowed range
    #[error("Value {value} outside range [{min}, {max}]")]
    ValueOutOfRange {
        /// The rejected value
        value: i32,
        /// Smallest allowed value
        min: u8,
        /// Largest allowed value
        max: u8,
    },

    /// Temperature unit symbol is not one of `F`, `C` or `K`
    #[error("Unknown temperature unit \"{symbol}\", expected F, C or K")]
    UnknownUnit {
        /// The rejected symbol, truncated
        symbol: InlineString<MAX_ECHOED_SYMBOL_LEN>,
    },
}

impl SensorError {
    /// Build an [`SensorError::UnknownUnit`] echoing as much of `symbol` as fits
    pub fn unknown_unit(symbol: &str) -> Self {
        let mut echoed = InlineString::new();
        for c in symbol.chars() {
            if echoed.push(c).is_err() {
                break;
            }
        }
        Self::UnknownUnit { symbol: echoed }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MappingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::TableOverflow { required, capacity } =>
                defmt::write!(fmt, "Table needs {} rows, capacity {}", required, capacity),
            Self::EmptyRange { first, last } =>
                defmt::write!(fmt, "Empty table range {}..={}", first, last),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyName =>
                defmt::write!(fmt, "Empty sensor name"),
            Self::ValueOutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::UnknownUnit { symbol } =>
                defmt::write!(fmt, "Unknown unit {}", symbol.as_str()),
        }
    }
}
