//! Oscillator timing configuration.
//!
//! Band toggle counts and hold times are fixed (see [`crate::mode`]); what
//! varies between boards is how long one time-unit lasts and how much of
//! each half-period the original core spent on loop overhead.  Values are
//! compile-time only; the device has no persisted or runtime config.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mode::Band;

/// Per-toggle loop overhead of the reference 4 MHz core, in time-units.
/// Adding it back on a fast core restores the 1/2/5/10 kHz targets.
pub const REFERENCE_LOOP_OVERHEAD_UNITS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscillatorConfig {
    // --- Timing ---
    /// Length of one time-unit in nanoseconds.
    pub time_unit_ns: u32,
    /// Extra time-units added to every inter-toggle hold.
    pub hold_compensation_units: u32,
    /// Pause between the bursts of a sweep (time-units).
    pub sweep_pause_units: u32,

    // --- Sampler ---
    /// Acquisition delay between channel select and conversion start.
    pub acquisition_delay_us: u32,
    /// Analog channel carrying the band-select voltage.
    pub adc_channel: u8,

    // --- Start-up ---
    /// Settle delay after peripheral configuration, before the first sample.
    pub settle_delay_ms: u32,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            time_unit_ns: 1_000, // 1 µs
            hold_compensation_units: 0,
            sweep_pause_units: 10,

            acquisition_delay_us: 5,
            adc_channel: 0,

            settle_delay_ms: 100,
        }
    }
}

impl OscillatorConfig {
    /// Profile for cores where pin writes cost next to nothing: every hold
    /// is stretched by the reference loop overhead.
    pub fn compensated() -> Self {
        Self {
            hold_compensation_units: REFERENCE_LOOP_OVERHEAD_UNITS,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.time_unit_ns == 0 {
            return Err(Error::Config("time_unit_ns must be non-zero"));
        }
        if self.settle_delay_ms == 0 {
            return Err(Error::Config("settle_delay_ms must be non-zero"));
        }
        if self
            .longest_delay_units()
            .checked_mul(u64::from(self.time_unit_ns))
            .is_none_or(|ns| ns > u64::from(u32::MAX))
        {
            return Err(Error::Config("longest hold does not fit a u32 ns delay"));
        }
        Ok(())
    }

    /// Longest single delay the oscillator issues: the slowest band's
    /// compensated hold, or the sweep pause.
    fn longest_delay_units(&self) -> u64 {
        Band::ASCENDING
            .iter()
            .map(|band| u64::from(band.profile().hold_units) + u64::from(self.hold_compensation_units))
            .fold(u64::from(self.sweep_pause_units), u64::max)
    }

    /// Convert a count of time-units into nanoseconds for `DelayNs`.
    /// Saturates; a validated config never reaches the limit.
    pub fn units_to_ns(&self, units: u32) -> u32 {
        units.saturating_mul(self.time_unit_ns)
    }
}
