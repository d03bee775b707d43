//! Output drivers and hardware initialisation.

pub mod hw_init;
pub mod lines;
pub mod oscillator;
