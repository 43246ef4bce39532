//! Configuration error type.

use thiserror::Error;

/// Errors found by [`SimConfig::validate`](crate::SimConfig::validate).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dwell range is empty: dwell_min {min} > dwell_max {max}")]
    DwellRangeEmpty { min: u32, max: u32 },

    #[error("battery_low {low} must be below battery_max {max}")]
    BatteryLowAboveMax { low: u32, max: u32 },

    #[error("charge_rate must be nonzero")]
    ZeroChargeRate,

    #[error("dwell_min must be nonzero (a zero dwell never completes)")]
    ZeroDwell,
}
