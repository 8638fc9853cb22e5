//! Generic sensor: a name and a value, nothing else

use alloc::string::String;
use core::fmt;

use rand::Rng;

use crate::errors::SensorResult;

use super::{Sensor, SensorBase, SensorKind};

/// A plain named sensor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericSensor {
    base: SensorBase,
}

impl GenericSensor {
    /// Create a sensor, drawing its value from `rng`
    pub fn new<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> SensorResult<Self> {
        let base = SensorBase::random(name, rng)?;
        log_debug!("Created generic sensor \"{}\" with value {}", base.name, base.value);
        Ok(Self { base })
    }

    /// Create a sensor with a known value, e.g. for replaying a recorded run
    pub fn with_value(name: impl Into<String>, value: i32) -> SensorResult<Self> {
        Ok(Self { base: SensorBase::with_value(name, value)? })
    }

    /// Create a sensor using the thread-local random generator
    #[cfg(feature = "std")]
    pub fn from_entropy(name: impl Into<String>) -> SensorResult<Self> {
        Self::new(name, &mut rand::thread_rng())
    }
}

impl Sensor for GenericSensor {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn value(&self) -> u8 {
        self.base.value
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Generic
    }

    fn write_description(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "The {} sensor has a value of {}.", self.base.name, self.base.value)
    }
}

impl fmt::Display for GenericSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_description(f)
    }
}
