//! Application core: pure domain logic, zero I/O.
//!
//! The sample → classify → dispatch cycle lives in [`service`].  All
//! interaction with hardware happens through `embedded-hal` traits and
//! the **port traits** defined in [`ports`], keeping this layer fully
//! testable with a simulated clock and recording pins.

pub mod events;
pub mod ports;
pub mod service;
