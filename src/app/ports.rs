//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Output lines and the busy-wait delay already have `embedded-hal` traits
//! (`OutputPin`, `DelayNs`) and are consumed directly.  The analog input
//! and the event sink have no standard trait, so they are defined here.

// ───────────────────────────────────────────────────────────────
// Analog input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The primitive steps of one analog-to-digital conversion.
///
/// [`Sampler`](crate::sampler::Sampler) sequences these; adapters only
/// expose the hardware.  There is no timeout: a converter
/// that never reports completion stalls the caller forever.
pub trait AnalogInput {
    /// Route `channel` to the converter.
    fn select_channel(&mut self, channel: u8);

    /// Begin a conversion on the selected channel.
    fn start_conversion(&mut self);

    /// `true` once the conversion started last has finished.
    fn conversion_done(&mut self) -> bool;

    /// Raw result of the last finished conversion, already scaled to the
    /// 10-bit reading domain (0–1023).
    fn read_result(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Emission happens only between bursts.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
