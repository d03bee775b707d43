//! Unified error types for the Antitartre firmware.
//!
//! The oscillator domain has no recoverable faults: every reading maps to a
//! mode and every burst runs to completion.  What remains are the edges
//! where the HAL can refuse a request (an output write, peripheral setup)
//! and configuration that is rejected before the loop starts.  All variants
//! are `Copy` so they pass through the burst loop without allocation.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Output lines
// ---------------------------------------------------------------------------

/// The four digital output lines driven by the oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Oscillator output 1 (toggled every half-period).
    Osc1,
    /// Oscillator output 2 (always the complement of `Osc1`).
    Osc2,
    /// Band indicator A (lit for the low bands).
    IndicatorA,
    /// Band indicator B (lit for the high bands).
    IndicatorB,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Osc1 => write!(f, "osc1"),
            Self::Osc2 => write!(f, "osc2"),
            Self::IndicatorA => write!(f, "indicator A"),
            Self::IndicatorB => write!(f, "indicator B"),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The HAL rejected a write to an output line.
    Gpio(Line),
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(line) => write!(f, "gpio: write to {line} failed"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
