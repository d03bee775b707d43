//! Square-wave burst generator.
//!
//! One parameterised loop serves every band:
//!
//! ```text
//!   set indicator(band)
//!   repeat toggles(band):
//!       osc1 = !osc1 ; osc2 = !osc1
//!       hold(band)                      ── busy-wait via DelayNs
//! ```
//!
//! A burst always runs to completion; nothing samples the input or logs
//! while the loop is running.  The only early exit is a pin write the HAL
//! rejects.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::debug;

use crate::config::OscillatorConfig;
use crate::error::Result;
use crate::mode::{sweep_plan, Band, OperatingMode, SweepStep};

use super::lines::{OutputLines, OutputState};

/// What one burst did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstReport {
    pub band: Band,
    pub toggles: u32,
    /// Hold applied per half-period, after compensation.
    pub hold_units: u32,
}

/// Reports of one sweep, in execution order.
pub type SweepReports = heapless::Vec<BurstReport, 4>;

/// Outcome of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchReport {
    Burst(BurstReport),
    Sweep(SweepReports),
}

pub struct OscillatorDriver<P> {
    lines: OutputLines<P>,
    config: OscillatorConfig,
}

impl<P: OutputPin> OscillatorDriver<P> {
    pub fn new(lines: OutputLines<P>, config: OscillatorConfig) -> Self {
        Self { lines, config }
    }

    pub fn output_state(&self) -> OutputState {
        self.lines.state()
    }

    pub fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    /// Drive all outputs low (start-up idle level).
    pub fn idle(&mut self) -> Result<()> {
        self.lines.all_low()
    }

    /// Run one uninterruptible burst of `band`.
    pub fn burst(&mut self, band: Band, delay: &mut impl DelayNs) -> Result<BurstReport> {
        let profile = band.profile();
        let hold_units = profile.half_period_units(&self.config);
        let hold_ns = self.config.units_to_ns(hold_units);

        // Indicators settle before the first edge.
        self.lines.set_indicator(profile.indicator)?;

        for _ in 0..profile.toggles {
            self.lines.toggle_oscillator()?;
            delay.delay_ns(hold_ns);
        }

        Ok(BurstReport {
            band,
            toggles: profile.toggles,
            hold_units,
        })
    }

    /// One ascending pass through every band with a pause after each.
    pub fn sweep(&mut self, delay: &mut impl DelayNs) -> Result<SweepReports> {
        let mut reports = SweepReports::new();
        for step in sweep_plan(&self.config) {
            match step {
                SweepStep::Burst(band) => {
                    // One burst per band; capacity matches.
                    let _ = reports.push(self.burst(band, delay)?);
                }
                SweepStep::Pause(units) => delay.delay_ns(self.config.units_to_ns(units)),
            }
        }
        debug!("oscillator: sweep finished ({} bursts)", reports.len());
        Ok(reports)
    }

    /// Run exactly one routine for `mode`, blocking until it finishes.
    pub fn dispatch(&mut self, mode: OperatingMode, delay: &mut impl DelayNs) -> Result<DispatchReport> {
        match mode.band() {
            Some(band) => self.burst(band, delay).map(DispatchReport::Burst),
            None => self.sweep(delay).map(DispatchReport::Sweep),
        }
    }
}
