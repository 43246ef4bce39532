//! Top-level simulation configuration.

use crate::ConfigError;

/// When a charging agent leaves its charger.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResumePolicy {
    /// Leave only once the battery is full.
    #[default]
    Full,
    /// Leave once the battery clears `max(battery_low + 200, 3 × charge_rate)`.
    Threshold,
}

/// Tunables for one coordinator run.
///
/// Typically constructed with `SimConfig::default()` and adjusted field by
/// field; the host application may also deserialize it from a config file
/// (with the `serde` feature).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Battery capacity.  Every move costs 1 unit.
    pub battery_max: u32,

    /// At or below this level an agent diverts to a charger after its next
    /// dump delivery.
    pub battery_low: u32,

    /// Units restored per tick spent on a charger.
    pub charge_rate: u32,

    /// Loader dwell is sampled uniformly from `dwell_min..=dwell_max` ticks.
    pub dwell_min: u32,
    pub dwell_max: u32,

    /// When a charging agent resumes work.
    pub resume_policy: ResumePolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:          0,
            battery_max:   1_000,
            battery_low:   200,
            charge_rate:   100,
            dwell_min:     10,
            dwell_max:     30,
            resume_policy: ResumePolicy::Full,
        }
    }
}

impl SimConfig {
    /// Check internal consistency of the tunables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dwell_min > self.dwell_max {
            return Err(ConfigError::DwellRangeEmpty {
                min: self.dwell_min,
                max: self.dwell_max,
            });
        }
        if self.battery_low >= self.battery_max {
            return Err(ConfigError::BatteryLowAboveMax {
                low: self.battery_low,
                max: self.battery_max,
            });
        }
        if self.charge_rate == 0 {
            return Err(ConfigError::ZeroChargeRate);
        }
        if self.dwell_min == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        Ok(())
    }
}
