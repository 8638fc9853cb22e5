//! Linear Range Mapping
//!
//! ## Overview
//!
//! Maps a number from an input interval onto an output interval, keeping its
//! relative position:
//!
//! ```text
//! mapped = (number - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
//! ```
//!
//! All arithmetic is done in `f64`, whatever numeric type the caller passes.
//!
//! ## Clamping
//!
//! With `constrained` set (the default for [`RangeMapper`]) the result is
//! clamped to the closed interval spanned by `out_min` and `out_max`. The
//! bounds are order-normalized first, so inverted output ranges work:
//!
//! ```text
//! in:  1 ──────────── 10
//! out: 255 ─────────── 0     (descending)
//!
//! map(0)  → 255   (clamped)
//! map(1)  → 255
//! map(10) → 0
//! map(11) → 0     (clamped)
//! ```
//!
//! Without clamping the value is extrapolated past the output bounds.
//!
//! ## Degenerate Input Range
//!
//! When `in_min == in_max` the division is skipped and the result is
//! `out_min`. This is a fallback, not an error.
//!
//! ## Non-finite Input
//!
//! [`map_range`] never panics. NaN stays NaN; infinities follow IEEE
//! arithmetic and are clamped when constrained. [`try_map_range`] rejects
//! any non-finite input or result instead.

use core::fmt;

use heapless::Vec;

use crate::{
    constants::mapping::{
        DEFAULT_CONSTRAINED, DEMO_MAX_BASE, DEMO_MAX_MAPPED, DEMO_MIN_BASE, DEMO_MIN_MAPPED,
    },
    errors::{MappingError, MappingResult},
};

/// Maps `number` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Returns `out_min` for a degenerate input range. When `constrained` is
/// true the result is clamped to the output range regardless of which bound
/// is larger.
///
/// ```rust
/// use sensormap_core::map_range;
///
/// assert_eq!(map_range(1, 1, 10, 0, 255, true), 0.0);
/// assert_eq!(map_range(10, 1, 10, 0, 255, true), 255.0);
/// assert_eq!(map_range(20, 1, 10, 0, 255, true), 255.0);
/// assert!(map_range(20, 1, 10, 0, 255, false) > 255.0);
/// ```
pub fn map_range(
    number: impl Into<f64>,
    in_min: impl Into<f64>,
    in_max: impl Into<f64>,
    out_min: impl Into<f64>,
    out_max: impl Into<f64>,
    constrained: bool,
) -> f64 {
    linear_map(
        number.into(),
        in_min.into(),
        in_max.into(),
        out_min.into(),
        out_max.into(),
        constrained,
    )
}

/// Like [`map_range`], but rejects NaN and infinite values.
///
/// Every argument and the mapped result must be finite.
pub fn try_map_range(
    number: impl Into<f64>,
    in_min: impl Into<f64>,
    in_max: impl Into<f64>,
    out_min: impl Into<f64>,
    out_max: impl Into<f64>,
    constrained: bool,
) -> MappingResult<f64> {
    let args = [
        number.into(),
        in_min.into(),
        in_max.into(),
        out_min.into(),
        out_max.into(),
    ];
    if !args.iter().all(|v| v.is_finite()) {
        return Err(MappingError::InvalidValue);
    }

    let [number, in_min, in_max, out_min, out_max] = args;
    let mapped = linear_map(number, in_min, in_max, out_min, out_max, constrained);

    // Finite inputs can still overflow the intermediate product
    if mapped.is_finite() {
        Ok(mapped)
    } else {
        Err(MappingError::InvalidValue)
    }
}

fn linear_map(
    number: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    constrained: bool,
) -> f64 {
    let in_span = in_max - in_min;

    let mapped = if in_span == 0.0 {
        log_debug!(
            "Degenerate input range [{}, {}], mapping {} to {}",
            in_min, in_max, number, out_min
        );
        out_min
    } else if number == in_max {
        // The formula can miss by an ulp here; the upper endpoint is exact
        out_max
    } else {
        (number - in_min) * (out_max - out_min) / in_span + out_min
    };

    if constrained {
        constrain(mapped, out_min, out_max)
    } else {
        mapped
    }
}

/// Clamp into the interval spanned by `a` and `b`, in either order.
///
/// Unlike `f64::clamp` this never panics; NaN bounds or values pass through.
fn constrain(value: f64, a: f64, b: f64) -> f64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// A reusable mapping between two intervals
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeMapper {
    /// Start of the input range
    pub in_min: f64,
    /// End of the input range
    pub in_max: f64,
    /// Value produced for `in_min`
    pub out_min: f64,
    /// Value produced for `in_max`
    pub out_max: f64,
    /// Clamp results to the output range
    pub constrained: bool,
}

impl RangeMapper {
    /// Create a clamping mapper from `[in_min, in_max]` to `[out_min, out_max]`
    pub fn new(
        in_min: impl Into<f64>,
        in_max: impl Into<f64>,
        out_min: impl Into<f64>,
        out_max: impl Into<f64>,
    ) -> Self {
        Self {
            in_min: in_min.into(),
            in_max: in_max.into(),
            out_min: out_min.into(),
            out_max: out_max.into(),
            constrained: DEFAULT_CONSTRAINED,
        }
    }

    /// The demonstration mapping: 1..=10 onto 0..=255
    pub fn demo() -> Self {
        Self::new(DEMO_MIN_BASE, DEMO_MAX_BASE, DEMO_MIN_MAPPED, DEMO_MAX_MAPPED)
    }

    /// Same ranges, extrapolating past the output bounds
    pub fn unconstrained(self) -> Self {
        self.with_constrained(false)
    }

    /// Same ranges with clamping set explicitly
    pub fn with_constrained(self, constrained: bool) -> Self {
        Self { constrained, ..self }
    }

    /// Mapper going the other way, output range back onto input range
    pub fn inverse(&self) -> Self {
        Self {
            in_min: self.out_min,
            in_max: self.out_max,
            out_min: self.in_min,
            out_max: self.in_max,
            constrained: self.constrained,
        }
    }

    /// True when the input range has zero width and every input maps to `out_min`
    pub fn is_degenerate(&self) -> bool {
        self.in_max - self.in_min == 0.0
    }

    /// Map a single number
    pub fn map(&self, number: impl Into<f64>) -> f64 {
        linear_map(
            number.into(),
            self.in_min,
            self.in_max,
            self.out_min,
            self.out_max,
            self.constrained,
        )
    }

    /// Map a single number, rejecting non-finite input or output
    pub fn try_map(&self, number: impl Into<f64>) -> MappingResult<f64> {
        try_map_range(
            number,
            self.in_min,
            self.in_max,
            self.out_min,
            self.out_max,
            self.constrained,
        )
    }

    /// Map and round to the nearest integer, ties to even
    pub fn map_rounded(&self, number: impl Into<f64>) -> f64 {
        libm::rint(self.map(number))
    }
}

/// One line of a mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappedRow {
    /// Input number
    pub base: i32,
    /// Mapped and rounded output
    pub mapped: i32,
}

impl fmt::Display for MappedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base: {:2}, Mapped: {:3}", self.base, self.mapped)
    }
}

/// Map every integer in `first..=last` through `mapper`, rounding each result.
///
/// The table lives in a fixed-capacity buffer of `N` rows.
///
/// ```rust
/// use sensormap_core::{mapping_table, RangeMapper};
///
/// let rows = mapping_table::<16>(1, 10, &RangeMapper::demo())?;
/// assert_eq!(rows.len(), 10);
/// assert_eq!(rows[9].mapped, 255);
/// # Ok::<(), sensormap_core::MappingError>(())
/// ```
pub fn mapping_table<const N: usize>(
    first: i32,
    last: i32,
    mapper: &RangeMapper,
) -> MappingResult<Vec<MappedRow, N>> {
    if first > last {
        return Err(MappingError::EmptyRange { first, last });
    }

    let required = usize::try_from(i64::from(last) - i64::from(first) + 1)
        .unwrap_or(usize::MAX);
    if required > N {
        return Err(MappingError::TableOverflow { required, capacity: N });
    }

    let mut rows = Vec::new();
    for base in first..=last {
        // Saturating cast; NaN becomes 0
        let mapped = mapper.map_rounded(base) as i32;
        rows.push(MappedRow { base, mapped })
            .map_err(|_| MappingError::TableOverflow { required, capacity: N })?;
    }
    Ok(rows)
}
