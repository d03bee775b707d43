//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port between bursts.

use crate::drivers::oscillator::{BurstReport, SweepReports};
use crate::mode::OperatingMode;
use crate::sampler::AnalogReading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Outputs are in their idle state and the settle delay has elapsed.
    Started,

    /// A reading was taken and classified; the mode is about to run.
    ModeSelected {
        reading: AnalogReading,
        mode: OperatingMode,
    },

    /// A single-band burst ran to completion.
    BurstCompleted(BurstReport),

    /// A sweep ran all four bursts (in execution order).
    SweepCompleted { bursts: SweepReports },
}
