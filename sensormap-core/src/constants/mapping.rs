//! Range Mapping Defaults
//!
//! The demonstration ranges map the integers 1 through 10 onto a byte-sized
//! output range, the classic "scale a reading to a PWM duty" example.

/// Whether mapped values are clamped to the output range unless asked otherwise.
pub const DEFAULT_CONSTRAINED: bool = true;

// ===== DEMONSTRATION RANGES =====

/// The minimum number to map.
pub const DEMO_MIN_BASE: i32 = 1;

/// The maximum number to map.
pub const DEMO_MAX_BASE: i32 = 10;

/// The minimum mapped value.
pub const DEMO_MIN_MAPPED: i32 = 0;

/// The maximum mapped value.
pub const DEMO_MAX_MAPPED: i32 = 255;

/// Row capacity for the demonstration mapping table.
///
/// Must hold `DEMO_MAX_BASE - DEMO_MIN_BASE + 1` rows.
pub const DEMO_TABLE_CAPACITY: usize = 16;

/// Pause between printed table rows in the demo driver (milliseconds).
pub const DEMO_ROW_DELAY_MS: u64 = 250;
