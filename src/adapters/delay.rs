//! Busy-wait delay adapter.
//!
//! The oscillator's frequency accuracy depends on holds occupying real
//! wall-clock time with the core doing nothing else, so this never yields
//! to a scheduler.
//!
//! - **`target_os = "espidf"`**: `esp_idf_hal::delay::Ets` (ROM
//!   `ets_delay_us` spin).  Sub-microsecond requests round up to 1 µs.
//! - **`not(target_os = "espidf")`**: spins on `std::time::Instant`.

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct BusyDelay;

impl BusyDelay {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        esp_idf_hal::delay::Ets::delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        esp_idf_hal::delay::Ets::delay_us(us);
    }
}

#[cfg(not(target_os = "espidf"))]
impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        let deadline = std::time::Instant::now() + std::time::Duration::from_nanos(u64::from(ns));
        while std::time::Instant::now() < deadline {
            core::hint::spin_loop();
        }
    }
}
