//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | outputs idle, sampling");
            }
            AppEvent::ModeSelected { reading, mode } => {
                info!("MODE  | reading={} -> {:?}", reading, mode);
            }
            AppEvent::BurstCompleted(r) => {
                info!(
                    "BURST | {:?} ({} Hz) | toggles={} hold={}tu",
                    r.band,
                    r.band.nominal_frequency_hz(),
                    r.toggles,
                    r.hold_units,
                );
            }
            AppEvent::SweepCompleted { bursts } => {
                let toggles: u32 = bursts.iter().map(|b| b.toggles).sum();
                info!("SWEEP | {} bands | toggles={}", bursts.len(), toggles);
            }
        }
    }
}
