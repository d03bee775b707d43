//! Band-select sampler.
//!
//! Takes one blocking conversion of the band-select voltage and maps it to
//! an [`OperatingMode`] through fixed, ascending thresholds:
//!
//! ```text
//!   0        200       400       600       800       1023
//!   ├─ Sweep ─┼─ 10k ───┼─ 5k ────┼─ 2k ────┼─ 1k ─────┤
//! ```
//!
//! Each threshold belongs to the band above it (`200` → 10 kHz).

use embedded_hal::delay::DelayNs;
use log::trace;

use crate::app::ports::AnalogInput;
use crate::config::OscillatorConfig;
use crate::mode::OperatingMode;

/// Raw converter magnitude in the 10-bit domain.
pub type AnalogReading = u16;

/// Largest reading a correctly scaled input produces.
pub const READING_MAX: AnalogReading = 1023;

/// Lower bound of each tier, highest first.
const TIERS: [(AnalogReading, OperatingMode); 4] = [
    (800, OperatingMode::Freq1k),
    (600, OperatingMode::Freq2k),
    (400, OperatingMode::Freq5k),
    (200, OperatingMode::Freq10k),
];

/// Map a reading to its operating mode.  Total over `u16`: anything above
/// [`READING_MAX`] still selects 1 kHz.
pub fn classify(reading: AnalogReading) -> OperatingMode {
    TIERS
        .iter()
        .find(|(floor, _)| reading >= *floor)
        .map_or(OperatingMode::Sweep, |&(_, mode)| mode)
}

/// Owns the analog input and performs one conversion per call.
pub struct Sampler<A> {
    input: A,
    channel: u8,
    acquisition_delay_us: u32,
}

impl<A: AnalogInput> Sampler<A> {
    pub fn new(input: A, config: &OscillatorConfig) -> Self {
        Self {
            input,
            channel: config.adc_channel,
            acquisition_delay_us: config.acquisition_delay_us,
        }
    }

    /// Select, wait for acquisition, convert, and busy-wait for the result.
    ///
    /// Never times out.
    pub fn sample(&mut self, delay: &mut impl DelayNs) -> AnalogReading {
        self.input.select_channel(self.channel);
        delay.delay_us(self.acquisition_delay_us);
        self.input.start_conversion();
        while !self.input.conversion_done() {
            core::hint::spin_loop();
        }
        let reading = self.input.read_result();
        trace!("sampler: ch{} -> {}", self.channel, reading);
        reading
    }

    /// Sample and classify in one step.
    pub fn sample_mode(&mut self, delay: &mut impl DelayNs) -> (AnalogReading, OperatingMode) {
        let reading = self.sample(delay);
        (reading, classify(reading))
    }

    pub fn input_mut(&mut self) -> &mut A {
        &mut self.input
    }
}
