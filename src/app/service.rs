//! Application service: the control loop.
//!
//! [`AppService`] owns the sampler, the oscillator driver (and through it
//! the only copy of the output state), and the busy-wait delay.  Once
//! started, the outer loop is a plain alternation:
//!
//! ```text
//!            ┌──────────┐  reading   ┌──────────┐  mode   ┌────────────────┐
//!   ┌──────▶ │  sample  │ ─────────▶ │ classify │ ──────▶ │ burst / sweep  │ ─┐
//!   │        └──────────┘            └──────────┘         └────────────────┘  │
//!   └──────────────────────────────── routine complete ───────────────────────┘
//! ```
//!
//! The input is read only at the top of a cycle.  A reading that changes
//! while a burst or sweep is running takes effect on the next cycle.  The
//! mode being run is reported through [`AppEvent::ModeSelected`].

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, info};

use crate::config::OscillatorConfig;
use crate::drivers::lines::{OutputLines, OutputState};
use crate::drivers::oscillator::{DispatchReport, OscillatorDriver};
use crate::error::{Error, Result};
use crate::mode::OperatingMode;
use crate::sampler::Sampler;

use super::events::AppEvent;
use super::ports::{AnalogInput, EventSink};

/// Lifecycle of the service as seen between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Constructed; [`AppService::start`] has not succeeded.
    Idle,
    /// Outputs idled and settled; cycles may run.
    Running,
}

pub struct AppService<A, P, D> {
    sampler: Sampler<A>,
    oscillator: OscillatorDriver<P>,
    delay: D,
    state: ControllerState,
    cycles: u64,
}

impl<A, P, D> AppService<A, P, D>
where
    A: AnalogInput,
    P: OutputPin,
    D: DelayNs,
{
    /// Assemble the service.  Does **not** touch the outputs; call
    /// [`start`](Self::start) next.
    pub fn new(config: OscillatorConfig, input: A, lines: OutputLines<P>, delay: D) -> Self {
        let sampler = Sampler::new(input, &config);
        Self {
            sampler,
            oscillator: OscillatorDriver::new(lines, config),
            delay,
            state: ControllerState::Idle,
            cycles: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Validate config, drive every output low, and wait the settle delay.
    pub fn start(&mut self, sink: &mut impl EventSink) -> Result<()> {
        let config = self.oscillator.config();
        config.validate()?;
        let settle_ms = config.settle_delay_ms;

        self.oscillator.idle()?;
        self.delay.delay_ms(settle_ms);

        self.state = ControllerState::Running;
        sink.emit(&AppEvent::Started);
        info!("AppService started (settle {} ms)", settle_ms);
        Ok(())
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// One full cycle: sample → classify → dispatch to completion.
    /// Returns the mode that ran.
    ///
    /// Fails without touching the hardware until [`start`](Self::start)
    /// has succeeded.
    pub fn cycle(&mut self, sink: &mut impl EventSink) -> Result<OperatingMode> {
        if self.state == ControllerState::Idle {
            return Err(Error::Config("cycle before start"));
        }

        let (reading, mode) = self.sampler.sample_mode(&mut self.delay);
        sink.emit(&AppEvent::ModeSelected { reading, mode });

        let report = self.oscillator.dispatch(mode, &mut self.delay)?;
        self.cycles += 1;

        match report {
            DispatchReport::Burst(burst) => sink.emit(&AppEvent::BurstCompleted(burst)),
            DispatchReport::Sweep(bursts) => sink.emit(&AppEvent::SweepCompleted { bursts }),
        }
        debug!("cycle {} done ({:?})", self.cycles, mode);
        Ok(mode)
    }

    /// Run cycles until power-off.  Only returns on a HAL error, or at once
    /// if the service was never started.
    pub fn run(&mut self, sink: &mut impl EventSink) -> Result<Infallible> {
        loop {
            self.cycle(sink)?;
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Completed cycles since start.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn output_state(&self) -> OutputState {
        self.oscillator.output_state()
    }

    pub fn config(&self) -> &OscillatorConfig {
        self.oscillator.config()
    }

    pub fn input_mut(&mut self) -> &mut A {
        self.sampler.input_mut()
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
