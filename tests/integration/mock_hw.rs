//! Mock hardware for integration tests.
//!
//! Every pin write, hold, and sample lands in one shared [`Trace`] so a
//! test can replay exactly what the outputs looked like at each instant
//! the oscillator was holding.  Time is simulated: holds advance the
//! clock and return immediately.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use antitartre::app::events::AppEvent;
use antitartre::app::ports::{AnalogInput, EventSink};
use antitartre::app::service::AppService;
use antitartre::config::OscillatorConfig;
use antitartre::drivers::lines::{OutputLines, OutputState};
use antitartre::error::Line;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

// ── Trace ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    Write { line: Line, high: bool },
    /// Output levels as observed for the whole hold.
    Hold { ns: u32, levels: OutputState },
    Sample(u16),
}

#[derive(Debug, Default)]
pub struct Trace {
    pub now_ns: u64,
    pub levels: OutputState,
    pub events: Vec<TraceEvent>,
    /// Writes to this line are rejected.
    pub fail_line: Option<Line>,
}

pub type SharedTrace = Rc<RefCell<Trace>>;

#[allow(dead_code)]
impl Trace {
    /// Forget recorded events, keep levels and clock.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn writes_to(&self, line: Line) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Write { line: l, .. } if *l == line))
            .count()
    }

    pub fn samples(&self) -> Vec<u16> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Sample(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn holds(&self) -> Vec<(u32, OutputState)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Hold { ns, levels } => Some((*ns, *levels)),
                _ => None,
            })
            .collect()
    }

    /// Consecutive holds of equal length collapsed to `(ns, count)`.
    pub fn hold_runs(&self) -> Vec<(u32, usize)> {
        let mut runs: Vec<(u32, usize)> = Vec::new();
        for (ns, _) in self.holds() {
            match runs.last_mut() {
                Some((last, count)) if *last == ns => *count += 1,
                _ => runs.push((ns, 1)),
            }
        }
        runs
    }

    /// Index of the first event matching `pred`.
    pub fn position(&self, pred: impl Fn(&TraceEvent) -> bool) -> Option<usize> {
        self.events.iter().position(pred)
    }
}

// ── MockPin ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockPin {
    line: Line,
    trace: SharedTrace,
}

impl MockPin {
    fn write(&mut self, high: bool) -> Result<(), MockPinError> {
        let mut t = self.trace.borrow_mut();
        if t.fail_line == Some(self.line) {
            return Err(MockPinError);
        }
        match self.line {
            Line::Osc1 => t.levels.osc1 = high,
            Line::Osc2 => t.levels.osc2 = high,
            Line::IndicatorA => t.levels.indicator_a = high,
            Line::IndicatorB => t.levels.indicator_b = high,
        }
        t.events.push(TraceEvent::Write { line: self.line, high });
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

// ── SimClock ──────────────────────────────────────────────────

pub struct SimClock {
    trace: SharedTrace,
}

impl DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        let mut t = self.trace.borrow_mut();
        t.now_ns += u64::from(ns);
        let levels = t.levels;
        t.events.push(TraceEvent::Hold { ns, levels });
    }
}

// ── ScriptedAdc ───────────────────────────────────────────────

/// Returns queued readings in order, then repeats the last one.
pub struct ScriptedAdc {
    readings: VecDeque<u16>,
    last: u16,
    channel: Option<u8>,
    converting: bool,
    trace: SharedTrace,
}

#[allow(dead_code)]
impl ScriptedAdc {
    pub fn push(&mut self, reading: u16) {
        self.readings.push_back(reading);
    }

    pub fn channel(&self) -> Option<u8> {
        self.channel
    }
}

impl AnalogInput for ScriptedAdc {
    fn select_channel(&mut self, channel: u8) {
        self.channel = Some(channel);
    }

    fn start_conversion(&mut self) {
        self.converting = true;
    }

    fn conversion_done(&mut self) -> bool {
        self.converting
    }

    fn read_result(&mut self) -> u16 {
        self.converting = false;
        if let Some(r) = self.readings.pop_front() {
            self.last = r;
        }
        self.trace.borrow_mut().events.push(TraceEvent::Sample(self.last));
        self.last
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub type MockApp = AppService<ScriptedAdc, MockPin, SimClock>;

/// Build a service over mock hardware with `readings` queued.
pub fn rig(config: OscillatorConfig, readings: &[u16]) -> (MockApp, SharedTrace) {
    let trace: SharedTrace = Rc::new(RefCell::new(Trace::default()));
    let pin = |line| MockPin {
        line,
        trace: Rc::clone(&trace),
    };
    let lines = OutputLines::new(
        pin(Line::Osc1),
        pin(Line::Osc2),
        pin(Line::IndicatorA),
        pin(Line::IndicatorB),
    );
    let adc = ScriptedAdc {
        readings: readings.iter().copied().collect(),
        last: 0,
        channel: None,
        converting: false,
        trace: Rc::clone(&trace),
    };
    let clock = SimClock {
        trace: Rc::clone(&trace),
    };
    (AppService::new(config, adc, lines, clock), trace)
}

/// [`rig`] with default config, started, and the start-up trace cleared.
#[allow(dead_code)]
pub fn started_rig(readings: &[u16]) -> (MockApp, SharedTrace, RecordingSink) {
    let (mut app, trace) = rig(OscillatorConfig::default(), readings);
    let mut sink = RecordingSink::default();
    app.start(&mut sink).expect("start on mock hardware");
    sink.events.clear();
    trace.borrow_mut().clear();
    (app, trace, sink)
}
