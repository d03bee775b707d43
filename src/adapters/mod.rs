//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements    | Connects to              |
//! |------------|---------------|--------------------------|
//! | `adc`      | AnalogInput   | ESP32 ADC1 oneshot       |
//! | `delay`    | DelayNs       | ROM busy-wait delay      |
//! | `gpio`     | OutputPin     | ESP32 GPIO               |
//! | `log_sink` | EventSink     | Serial log output        |

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod log_sink;
