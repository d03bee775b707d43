//! ADC1 oneshot adapter for the band-select input.
//!
//! Implements [`AnalogInput`] on top of the blocking oneshot driver.  The
//! oneshot API has no separate start/poll phases, so the conversion is
//! performed when the sampler polls for completion.  A failed read keeps
//! the conversion "busy": the sampler polls again, retrying forever.
//!
//! The 12-bit hardware result is scaled to the 10-bit reading domain.

use log::warn;

use crate::app::ports::AnalogInput;
use crate::drivers::hw_init;
use crate::sampler::AnalogReading;

/// Scale a raw hardware value to the 10-bit reading domain.
pub const fn scale_to_reading(raw: u16) -> AnalogReading {
    let shift = hw_init::ADC_HW_BITS - 10;
    let max = (1u16 << hw_init::ADC_HW_BITS) - 1;
    (if raw > max { max } else { raw }) >> shift
}

pub struct OneshotAdc {
    channel: u8,
    pending: bool,
    result: Option<AnalogReading>,
    failed_reads: u32,
}

impl Default for OneshotAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl OneshotAdc {
    pub fn new() -> Self {
        Self {
            channel: 0,
            pending: false,
            result: None,
            failed_reads: 0,
        }
    }

    /// Reads the driver rejected since boot.
    pub fn failed_reads(&self) -> u32 {
        self.failed_reads
    }
}

impl AnalogInput for OneshotAdc {
    fn select_channel(&mut self, channel: u8) {
        self.channel = channel;
    }

    fn start_conversion(&mut self) {
        self.pending = true;
        self.result = None;
    }

    fn conversion_done(&mut self) -> bool {
        if !self.pending {
            return self.result.is_some();
        }
        match hw_init::adc1_read(self.channel) {
            Some(raw) => {
                self.result = Some(scale_to_reading(raw));
                self.pending = false;
                true
            }
            None => {
                self.failed_reads = self.failed_reads.saturating_add(1);
                if self.failed_reads.is_power_of_two() {
                    warn!("adc: ch{} read failed ({} so far)", self.channel, self.failed_reads);
                }
                false
            }
        }
    }

    fn read_result(&mut self) -> u16 {
        self.result.unwrap_or(0)
    }
}
