//! The four digital output lines and their tracked logical state.
//!
//! The oscillator inverts line 1 from its *last written* level, so the
//! level must be known without reading the pin back.  [`OutputState`] is
//! that record; it changes only through [`OutputLines`], which is owned by
//! the single [`OscillatorDriver`](super::oscillator::OscillatorDriver).

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{Error, Line, Result};
use crate::mode::IndicatorCode;

/// Logical level of every output line (`true` = high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputState {
    pub osc1: bool,
    pub osc2: bool,
    pub indicator_a: bool,
    pub indicator_b: bool,
}

impl OutputState {
    pub fn indicator(&self) -> IndicatorCode {
        IndicatorCode {
            a: self.indicator_a,
            b: self.indicator_b,
        }
    }

    /// `true` when the oscillator pair is in antiphase.
    pub fn is_antiphase(&self) -> bool {
        self.osc2 == !self.osc1
    }
}

pub struct OutputLines<P> {
    osc1: P,
    osc2: P,
    indicator_a: P,
    indicator_b: P,
    state: OutputState,
}

impl<P: OutputPin> OutputLines<P> {
    /// Take ownership of the pins.  Levels are unknown until
    /// [`all_low`](Self::all_low) runs.
    pub fn new(osc1: P, osc2: P, indicator_a: P, indicator_b: P) -> Self {
        Self {
            osc1,
            osc2,
            indicator_a,
            indicator_b,
            state: OutputState::default(),
        }
    }

    pub fn state(&self) -> OutputState {
        self.state
    }

    /// Drive every line low and record it.
    pub fn all_low(&mut self) -> Result<()> {
        write(&mut self.osc1, Line::Osc1, false)?;
        write(&mut self.osc2, Line::Osc2, false)?;
        write(&mut self.indicator_a, Line::IndicatorA, false)?;
        write(&mut self.indicator_b, Line::IndicatorB, false)?;
        self.state = OutputState::default();
        Ok(())
    }

    /// Invert oscillator line 1 and set line 2 to the complement of its new
    /// level.  Returns the new level of line 1.
    #[inline]
    pub fn toggle_oscillator(&mut self) -> Result<bool> {
        let level = !self.state.osc1;
        write(&mut self.osc1, Line::Osc1, level)?;
        self.state.osc1 = level;
        write(&mut self.osc2, Line::Osc2, !level)?;
        self.state.osc2 = !level;
        Ok(level)
    }

    /// Show `code` on the indicator lines.
    ///
    /// Only lines that change are written, falling edges first, so between
    /// two band codes the pins pass through all-off and never show both.
    pub fn set_indicator(&mut self, code: IndicatorCode) -> Result<()> {
        for high in [false, true] {
            if code.a == high && self.state.indicator_a != high {
                write(&mut self.indicator_a, Line::IndicatorA, high)?;
                self.state.indicator_a = high;
            }
            if code.b == high && self.state.indicator_b != high {
                write(&mut self.indicator_b, Line::IndicatorB, high)?;
                self.state.indicator_b = high;
            }
        }
        Ok(())
    }

    /// Hand the pins back (e.g. to reconfigure them).
    pub fn release(self) -> (P, P, P, P) {
        (self.osc1, self.osc2, self.indicator_a, self.indicator_b)
    }
}

#[inline]
fn write<P: OutputPin>(pin: &mut P, line: Line, high: bool) -> Result<()> {
    pin.set_state(PinState::from(high))
        .map_err(|_| Error::Gpio(line))
}
