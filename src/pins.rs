//! GPIO / peripheral pin assignments for the Antitartre board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Band-select input (potentiometer wiper)
// ---------------------------------------------------------------------------

/// Analog band-select voltage.  ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const MODE_ADC_GPIO: i32 = 1;
/// ADC1 channel number for [`MODE_ADC_GPIO`].
pub const MODE_ADC_CHANNEL: u8 = 0;

// ---------------------------------------------------------------------------
// Oscillator outputs (antiphase pair)
// ---------------------------------------------------------------------------

pub const OSC_1_GPIO: i32 = 4;
pub const OSC_2_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Band indicator LEDs
// ---------------------------------------------------------------------------

/// Lit for the 1 kHz and 2 kHz bands.
pub const LED_A_GPIO: i32 = 6;
/// Lit for the 5 kHz and 10 kHz bands.
pub const LED_B_GPIO: i32 = 7;

/// Every push-pull output, in the order they are configured.
pub const OUTPUT_GPIOS: [i32; 4] = [OSC_1_GPIO, OSC_2_GPIO, LED_A_GPIO, LED_B_GPIO];
