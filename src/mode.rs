//! Operating modes, frequency bands, and the band lookup table.
//!
//! ```text
//! ┌─────────┬─────────┬───────────┬───────────┐
//! │ Band    │ toggles │ hold (tu) │ indicator │
//! ├─────────┼─────────┼───────────┼───────────┤
//! │ Freq1k  │  1000   │   480     │  A on     │
//! │ Freq2k  │  2000   │   230     │  A on     │
//! │ Freq5k  │  5000   │    81     │  B on     │
//! │ Freq10k │ 10000   │    30     │  B on     │
//! └─────────┴─────────┴───────────┴───────────┘
//! ```
//!
//! Every burst routine is this table plus one shared loop in
//! [`crate::drivers::oscillator`].

use serde::{Deserialize, Serialize};

use crate::config::OscillatorConfig;

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// One of the four discrete output frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Band {
    Freq1k = 0,
    Freq2k = 1,
    Freq5k = 2,
    Freq10k = 3,
}

impl Band {
    /// All bands in ascending frequency order (the sweep order).
    pub const ASCENDING: [Band; 4] = [Band::Freq1k, Band::Freq2k, Band::Freq5k, Band::Freq10k];

    pub const fn profile(self) -> BandProfile {
        BAND_TABLE[self as usize]
    }

    /// The frequency the band is meant to produce on calibrated hardware.
    pub const fn nominal_frequency_hz(self) -> u32 {
        match self {
            Self::Freq1k => 1_000,
            Self::Freq2k => 2_000,
            Self::Freq5k => 5_000,
            Self::Freq10k => 10_000,
        }
    }

    pub const fn indicator(self) -> IndicatorCode {
        self.profile().indicator
    }
}

/// Burst parameters for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandProfile {
    /// Half-periods per burst.
    pub toggles: u32,
    /// Inter-toggle hold in time-units, before compensation.
    pub hold_units: u32,
    pub indicator: IndicatorCode,
}

impl BandProfile {
    /// Hold actually applied per half-period under `config`.
    pub fn half_period_units(&self, config: &OscillatorConfig) -> u32 {
        self.hold_units.saturating_add(config.hold_compensation_units)
    }

    /// Total time one burst blocks for, in time-units.
    pub fn burst_units(&self, config: &OscillatorConfig) -> u64 {
        u64::from(self.toggles) * u64::from(self.half_period_units(config))
    }
}

const BAND_TABLE: [BandProfile; 4] = [
    BandProfile { toggles: 1_000, hold_units: 480, indicator: IndicatorCode::LOW_BANDS },
    BandProfile { toggles: 2_000, hold_units: 230, indicator: IndicatorCode::LOW_BANDS },
    BandProfile { toggles: 5_000, hold_units: 81, indicator: IndicatorCode::HIGH_BANDS },
    BandProfile { toggles: 10_000, hold_units: 30, indicator: IndicatorCode::HIGH_BANDS },
];

// ---------------------------------------------------------------------------
// Indicator status code
// ---------------------------------------------------------------------------

/// 2-bit "current band" code shown on the indicator outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorCode {
    pub a: bool,
    pub b: bool,
}

impl IndicatorCode {
    /// 1 kHz and 2 kHz.
    pub const LOW_BANDS: Self = Self { a: true, b: false };
    /// 5 kHz and 10 kHz.
    pub const HIGH_BANDS: Self = Self { a: false, b: true };
}

// ---------------------------------------------------------------------------
// Operating mode
// ---------------------------------------------------------------------------

/// The behaviour selected by one analog reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatingMode {
    Freq1k,
    Freq2k,
    Freq5k,
    Freq10k,
    /// One ascending pass through all four bands.
    Sweep,
}

impl OperatingMode {
    /// The single band this mode drives, or `None` for [`Self::Sweep`].
    pub const fn band(self) -> Option<Band> {
        match self {
            Self::Freq1k => Some(Band::Freq1k),
            Self::Freq2k => Some(Band::Freq2k),
            Self::Freq5k => Some(Band::Freq5k),
            Self::Freq10k => Some(Band::Freq10k),
            Self::Sweep => None,
        }
    }

    /// How long a dispatch of this mode blocks the loop, in time-units.
    pub fn duration_units(self, config: &OscillatorConfig) -> u64 {
        match self.band() {
            Some(band) => band.profile().burst_units(config),
            None => sweep_plan(config)
                .iter()
                .map(|step| match *step {
                    SweepStep::Burst(band) => band.profile().burst_units(config),
                    SweepStep::Pause(units) => u64::from(units),
                })
                .sum(),
        }
    }
}

impl From<Band> for OperatingMode {
    fn from(band: Band) -> Self {
        match band {
            Band::Freq1k => Self::Freq1k,
            Band::Freq2k => Self::Freq2k,
            Band::Freq5k => Self::Freq5k,
            Band::Freq10k => Self::Freq10k,
        }
    }
}

// ---------------------------------------------------------------------------
// Sweep plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStep {
    Burst(Band),
    /// Outputs held at their last level for this many time-units.
    Pause(u32),
}

/// Burst + pause for every band.
pub const SWEEP_STEPS: usize = 2 * Band::ASCENDING.len();

/// The steps of one sweep: every band in ascending order, each followed by
/// the configured pause.
pub fn sweep_plan(config: &OscillatorConfig) -> heapless::Vec<SweepStep, SWEEP_STEPS> {
    let mut plan = heapless::Vec::new();
    for band in Band::ASCENDING {
        // Capacity is exactly two steps per band.
        let _ = plan.push(SweepStep::Burst(band));
        let _ = plan.push(SweepStep::Pause(config.sweep_pause_units));
    }
    plan
}
