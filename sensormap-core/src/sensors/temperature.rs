//! Temperature sensor with a unit
//!
//! Supported units are `F` (Fahrenheit), `C` (Celsius) and `K` (Kelvin).
//! The unit is a closed enum, so a sensor can never hold anything else;
//! textual symbols are checked when parsed and rejected if unknown.

use alloc::string::String;
use core::{fmt, str::FromStr};

use rand::Rng;

use crate::{
    constants::sensors::DEFAULT_TEMPERATURE_UNIT,
    errors::{SensorError, SensorResult},
};

use super::{Sensor, SensorBase, SensorKind};

/// Temperature unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit, `F`
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    Fahrenheit,
    /// Degrees Celsius, `C`
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    Celsius,
    /// Kelvin, `K`
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    Kelvin,
}

impl TemperatureUnit {
    /// Every supported unit
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Celsius,
        TemperatureUnit::Kelvin,
    ];

    /// One-letter symbol used in descriptions
    pub const fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Parse a symbol, exact case: `"F"`, `"C"` or `"K"`
    pub fn from_symbol(symbol: &str) -> SensorResult<Self> {
        match symbol {
            "F" => Ok(TemperatureUnit::Fahrenheit),
            "C" => Ok(TemperatureUnit::Celsius),
            "K" => Ok(TemperatureUnit::Kelvin),
            other => Err(SensorError::unknown_unit(other)),
        }
    }
}

impl Default for TemperatureUnit {
    fn default() -> Self {
        DEFAULT_TEMPERATURE_UNIT
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = SensorError;

    fn try_from(symbol: &str) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TemperatureUnit {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.symbol())
    }
}

/// Temperature sensor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureSensor {
    base: SensorBase,
    unit: TemperatureUnit,
}

impl TemperatureSensor {
    /// Create a sensor in the default unit (Fahrenheit), drawing its value from `rng`
    pub fn new<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> SensorResult<Self> {
        Self::with_unit(name, TemperatureUnit::default(), rng)
    }

    /// Create a sensor in `unit`, drawing its value from `rng`
    pub fn with_unit<R: Rng + ?Sized>(
        name: impl Into<String>,
        unit: TemperatureUnit,
        rng: &mut R,
    ) -> SensorResult<Self> {
        let base = SensorBase::random(name, rng)?;
        log_debug!(
            "Created temperature sensor \"{}\" with value {} {}",
            base.name, base.value, unit
        );
        Ok(Self { base, unit })
    }

    /// Create a sensor from a unit symbol; unknown symbols are rejected
    pub fn from_symbol<R: Rng + ?Sized>(
        name: impl Into<String>,
        symbol: &str,
        rng: &mut R,
    ) -> SensorResult<Self> {
        let unit = TemperatureUnit::from_symbol(symbol).map_err(|e| {
            log_warn!("Rejected temperature unit \"{}\"", symbol);
            e
        })?;
        Self::with_unit(name, unit, rng)
    }

    /// Create a sensor with a known value
    pub fn with_value(name: impl Into<String>, value: i32, unit: TemperatureUnit) -> SensorResult<Self> {
        Ok(Self {
            base: SensorBase::with_value(name, value)?,
            unit,
        })
    }

    /// Create a sensor in `unit` using the thread-local random generator
    #[cfg(feature = "std")]
    pub fn from_entropy(name: impl Into<String>, unit: TemperatureUnit) -> SensorResult<Self> {
        Self::with_unit(name, unit, &mut rand::thread_rng())
    }

    /// Current unit
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Change the unit. The value is a label, not a reading, so it is not converted.
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
    }

    /// Change the unit from a symbol. On rejection the unit is left as it was.
    pub fn set_unit_symbol(&mut self, symbol: &str) -> SensorResult<()> {
        match TemperatureUnit::from_symbol(symbol) {
            Ok(unit) => {
                self.unit = unit;
                Ok(())
            }
            Err(e) => {
                log_warn!(
                    "Rejected unit \"{}\" for sensor \"{}\", keeping {}",
                    symbol, self.base.name, self.unit
                );
                Err(e)
            }
        }
    }
}

impl Sensor for TemperatureSensor {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn value(&self) -> u8 {
        self.base.value
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn write_description(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "The {} temperature sensor has a value of {} degrees {}.",
            self.base.name, self.base.value, self.unit
        )
    }
}

impl fmt::Display for TemperatureSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_description(f)
    }
}
