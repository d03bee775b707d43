//! Antitartre firmware library.
//!
//! A band-select square-wave oscillator: one analog reading picks a
//! frequency band (or a sweep through all four), then two outputs are
//! driven in antiphase for one fixed burst before the input is read again.
//!
//! Exposes the pure-logic modules for integration testing.  All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod mode;
pub mod pins;
pub mod sampler;
