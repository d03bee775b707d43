//! Antitartre Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  OneshotAdc     GpioLine ×4     BusyDelay     LogEventSink │
//! │  (AnalogInput)  (OutputPin)     (DelayNs)     (EventSink)  │
//! │                                                            │
//! │  ───────────────── Port Trait Boundary ─────────────────   │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │              AppService (pure logic)                 │  │
//! │  │  Sampler · classify · OscillatorDriver               │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use antitartre::adapters::adc::OneshotAdc;
use antitartre::adapters::delay::BusyDelay;
use antitartre::adapters::gpio::GpioLine;
use antitartre::adapters::log_sink::LogEventSink;
use antitartre::app::service::AppService;
use antitartre::config::OscillatorConfig;
use antitartre::drivers::hw_init;
use antitartre::drivers::lines::OutputLines;
use antitartre::error::Error;
use antitartre::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Antitartre v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Peripheral configuration ───────────────────────────
    if let Err(e) = hw_init::init_peripherals().map_err(Error::from) {
        error!("{}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters ─────────────────────────────────
    // Pin writes are sub-microsecond on this core; restore the reference
    // loop overhead so the bands keep their nominal frequencies.
    let config = OscillatorConfig {
        adc_channel: pins::MODE_ADC_CHANNEL,
        ..OscillatorConfig::compensated()
    };
    let lines = OutputLines::new(
        GpioLine::new(pins::OSC_1_GPIO),
        GpioLine::new(pins::OSC_2_GPIO),
        GpioLine::new(pins::LED_A_GPIO),
        GpioLine::new(pins::LED_B_GPIO),
    );
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(config, OneshotAdc::new(), lines, BusyDelay::new());

    // ── 4. Start + control loop ───────────────────────────────
    app.start(&mut sink)?;
    info!("System ready. Entering control loop.");

    // `run` only comes back with an error.  No watchdog: the device
    // freezes with outputs held until power-cycled.
    let Err(e) = app.run(&mut sink);
    error!("Control loop stopped: {}, halting", e);
    #[allow(clippy::empty_loop)]
    loop {}
}
