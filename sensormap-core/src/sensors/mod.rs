//! Sensor Model
//!
//! ## Overview
//!
//! A sensor is a named source of an integer value. In this model the value
//! is not measured: it is drawn once, uniformly over
//! [`SENSOR_VALUE_MIN`]`..=`[`SENSOR_VALUE_MAX`], when the sensor is built,
//! and never changes afterwards.
//!
//! Two kinds exist:
//! - [`GenericSensor`]: name and value
//! - [`TemperatureSensor`]: name, value and a [`TemperatureUnit`]
//!
//! ## Polymorphic Description
//!
//! Both kinds implement the [`Sensor`] trait. Code holding a `&dyn Sensor`
//! (or an [`AnySensor`]) gets the description of the underlying kind:
//!
//! ```text
//! GenericSensor      → "The MySensor sensor has a value of 17."
//! TemperatureSensor  → "The Outside temperature sensor has a value of 42 degrees C."
//! ```
//!
//! ## Randomness
//!
//! Constructors take the random source as an argument, so tests can pass a
//! seeded generator and get the same values every run:
//!
//! ```rust
//! use rand::SeedableRng;
//! use sensormap_core::{GenericSensor, Sensor};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let sensor = GenericSensor::new("MySensor", &mut rng)?;
//! assert!(sensor.value() <= 50);
//! # Ok::<(), sensormap_core::SensorError>(())
//! ```
//!
//! With the `std` feature, `from_entropy` constructors draw from the thread
//! local generator instead.

use alloc::string::String;
use core::fmt;

use rand::Rng;

use crate::{
    constants::sensors::{SENSOR_VALUE_MAX, SENSOR_VALUE_MIN},
    errors::{SensorError, SensorResult},
};

mod generic;
mod temperature;

pub use generic::GenericSensor;
pub use temperature::{TemperatureSensor, TemperatureUnit};

/// Kind of sensor, for callers that need to branch without downcasting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SensorKind {
    /// Name and value only
    Generic,
    /// Name, value and temperature unit
    Temperature,
}

impl SensorKind {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Generic => "generic",
            SensorKind::Temperature => "temperature",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Common interface of every sensor kind
pub trait Sensor {
    /// Name given at construction
    fn name(&self) -> &str;

    /// Value drawn at construction
    fn value(&self) -> u8;

    /// Which kind of sensor this is
    fn kind(&self) -> SensorKind;

    /// Write the human-readable description sentence
    fn write_description(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// The human-readable description sentence
    fn description(&self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail
        let _ = self.write_description(&mut text);
        text
    }
}

impl fmt::Display for dyn Sensor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_description(f)
    }
}

/// Name and value shared by every sensor kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SensorBase {
    pub(crate) name: String,
    pub(crate) value: u8,
}

impl SensorBase {
    /// Name the sensor and draw its value from `rng`
    pub(crate) fn random<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> SensorResult<Self> {
        let name = checked_name(name)?;
        let value = rng.gen_range(SENSOR_VALUE_MIN..=SENSOR_VALUE_MAX);
        Ok(Self { name, value })
    }

    /// Name the sensor with a caller-chosen value
    pub(crate) fn with_value(name: impl Into<String>, value: i32) -> SensorResult<Self> {
        let name = checked_name(name)?;
        let value = u8::try_from(value)
            .ok()
            .filter(|v| (SENSOR_VALUE_MIN..=SENSOR_VALUE_MAX).contains(v))
            .ok_or(SensorError::ValueOutOfRange {
                value,
                min: SENSOR_VALUE_MIN,
                max: SENSOR_VALUE_MAX,
            })?;
        Ok(Self { name, value })
    }
}

fn checked_name(name: impl Into<String>) -> SensorResult<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(SensorError::EmptyName);
    }
    Ok(name)
}

/// Either sensor kind, by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnySensor {
    /// A plain sensor
    Generic(GenericSensor),
    /// A temperature sensor
    Temperature(TemperatureSensor),
}

impl AnySensor {
    /// The temperature sensor, if that is what this is
    pub fn as_temperature(&self) -> Option<&TemperatureSensor> {
        match self {
            AnySensor::Temperature(sensor) => Some(sensor),
            AnySensor::Generic(_) => None,
        }
    }

    /// Mutable access to the temperature sensor, if that is what this is
    pub fn as_temperature_mut(&mut self) -> Option<&mut TemperatureSensor> {
        match self {
            AnySensor::Temperature(sensor) => Some(sensor),
            AnySensor::Generic(_) => None,
        }
    }

    fn inner(&self) -> &dyn Sensor {
        match self {
            AnySensor::Generic(sensor) => sensor,
            AnySensor::Temperature(sensor) => sensor,
        }
    }
}

impl Sensor for AnySensor {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn value(&self) -> u8 {
        self.inner().value()
    }

    fn kind(&self) -> SensorKind {
        self.inner().kind()
    }

    fn write_description(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.inner().write_description(out)
    }
}

impl fmt::Display for AnySensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_description(f)
    }
}

impl From<GenericSensor> for AnySensor {
    fn from(sensor: GenericSensor) -> Self {
        AnySensor::Generic(sensor)
    }
}

impl From<TemperatureSensor> for AnySensor {
    fn from(sensor: TemperatureSensor) -> Self {
        AnySensor::Temperature(sensor)
    }
}
