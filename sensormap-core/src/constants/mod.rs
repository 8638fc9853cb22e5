//! Constants for sensormap
//!
//! Every numeric literal the crate relies on lives here, grouped by domain:
//! - **Sensors**: value bounds and defaults for the sensor model
//! - **Mapping**: the demonstration ranges and table sizing
//!
//! When adding new constants, name them with their unit or meaning and keep
//! related values together.

/// Sensor value bounds and defaults.
pub mod sensors;

/// Range-mapping defaults and demonstration ranges.
pub mod mapping;

// Re-export commonly used constants for convenience
pub use sensors::{DEFAULT_TEMPERATURE_UNIT, SENSOR_VALUE_MAX, SENSOR_VALUE_MIN};

pub use mapping::{
    DEFAULT_CONSTRAINED, DEMO_MAX_BASE, DEMO_MAX_MAPPED, DEMO_MIN_BASE, DEMO_MIN_MAPPED,
    DEMO_ROW_DELAY_MS, DEMO_TABLE_CAPACITY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_constants_reachable_from_root() {
        assert_eq!(DEMO_ROW_DELAY_MS, mapping::DEMO_ROW_DELAY_MS);
        assert_eq!(DEMO_TABLE_CAPACITY, mapping::DEMO_TABLE_CAPACITY);
        assert!((DEMO_MAX_BASE - DEMO_MIN_BASE + 1) as usize <= DEMO_TABLE_CAPACITY);
        assert!(DEMO_MIN_MAPPED < DEMO_MAX_MAPPED);
    }
}
