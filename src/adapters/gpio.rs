//! GPIO output adapter.
//!
//! Exposes a configured ESP32 output pad as an `embedded-hal`
//! [`OutputPin`].  On host builds the write lands in the `hw_init`
//! simulation stub.

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::drivers::hw_init;

/// ESP-IDF return code from a rejected `gpio_set_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioWriteError(pub i32);

impl embedded_hal::digital::Error for GpioWriteError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One push-pull output, addressed by GPIO number.
#[derive(Debug)]
pub struct GpioLine {
    gpio: i32,
}

impl GpioLine {
    /// The pad must already be configured as an output by
    /// [`hw_init::init_peripherals`].
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    fn write(&mut self, high: bool) -> Result<(), GpioWriteError> {
        match hw_init::gpio_write(self.gpio, high) {
            0 => Ok(()),
            rc => Err(GpioWriteError(rc)),
        }
    }
}

impl ErrorType for GpioLine {
    type Error = GpioWriteError;
}

impl OutputPin for GpioLine {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}
