//! One-shot hardware peripheral initialization.
//!
//! Shuts down the task watchdog ESP-IDF starts by default, configures the
//! oscillator and indicator GPIOs as push-pull outputs and the band-select
//! pin as an ADC1 oneshot channel, using raw ESP-IDF sys calls.  Called
//! once from `main()` before the control loop starts; the settle delay
//! that follows is owned by
//! [`AppService::start`](crate::app::service::AppService::start).
//!
//! The control loop busy-waits on the main task and never yields, so the
//! idle tasks never run.  With the TWDT left on it would reset the chip
//! every few seconds.
//!
//! On host builds every function is a simulation stub.  The raw ADC value
//! can be injected with [`sim_set_adc_raw`], read failures with
//! [`sim_set_adc_fail`].

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    WatchdogDisableFailed(i32),
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WatchdogDisableFailed(rc) => write!(f, "TWDT shutdown failed (rc={})", rc),
            Self::AdcInitFailed(rc)    => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        disable_task_watchdog()?;
        init_gpio_outputs()?;
        init_adc()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── Task watchdog ─────────────────────────────────────────────

/// Unsubscribe the idle tasks, then tear the TWDT down.  A TWDT that was
/// never initialised (`CONFIG_ESP_TASK_WDT_INIT=n`) is left alone.
#[cfg(target_os = "espidf")]
unsafe fn disable_task_watchdog() -> Result<(), HwInitError> {
    // `esp_task_wdt_deinit` refuses while any task is still subscribed.
    let cfg = esp_task_wdt_config_t {
        timeout_ms: 5_000,
        idle_core_mask: 0,
        trigger_panic: false,
    };
    let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
    if ret == ESP_ERR_INVALID_STATE as i32 {
        info!("hw_init: TWDT not running");
        return Ok(());
    }
    if ret != ESP_OK as i32 { return Err(HwInitError::WatchdogDisableFailed(ret)); }

    let ret = unsafe { esp_task_wdt_deinit() };
    if ret != ESP_OK as i32 { return Err(HwInitError::WatchdogDisableFailed(ret)); }

    info!("hw_init: TWDT disabled");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

/// Full-scale bits of the hardware converter.
pub const ADC_HW_BITS: u32 = 12;

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// control-loop sample path.  `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    // Only the band-select channel is enabled; every other pad stays digital.
    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    let ret = unsafe {
        adc_oneshot_config_channel(adc1_handle(), u32::from(pins::MODE_ADC_CHANNEL), &chan_cfg)
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    info!("hw_init: ADC1 configured (CH{}=band select)", pins::MODE_ADC_CHANNEL);
    Ok(())
}

/// One blocking conversion.  `None` if the driver reported an error.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u8) -> Option<u16> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, single-threaded control-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), u32::from(channel), &mut raw) };
    if ret != ESP_OK as i32 {
        return None;
    }
    Some(raw.max(0) as u16)
}

#[cfg(not(target_os = "espidf"))]
static SIM_ADC_RAW: core::sync::atomic::AtomicU16 = core::sync::atomic::AtomicU16::new(0);

/// Inject the raw (12-bit) value the simulated converter returns.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc_raw(raw: u16) {
    SIM_ADC_RAW.store(raw, core::sync::atomic::Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
static SIM_ADC_FAIL: core::sync::atomic::AtomicBool = core::sync::atomic::AtomicBool::new(false);

/// Make every simulated read fail until cleared.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc_fail(fail: bool) {
    SIM_ADC_FAIL.store(fail, core::sync::atomic::Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u8) -> Option<u16> {
    if SIM_ADC_FAIL.load(core::sync::atomic::Ordering::Relaxed) {
        return None;
    }
    Some(SIM_ADC_RAW.load(core::sync::atomic::Ordering::Relaxed))
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    for &pin in &pins::OUTPUT_GPIOS {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        unsafe { gpio_set_level(pin, 0) };
    }

    // The analog pad: no pulls, no interrupt.
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::MODE_ADC_GPIO,
        mode: gpio_mode_t_GPIO_MODE_DISABLE,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

/// Returns the raw ESP-IDF return code (`0` = OK).
#[cfg(target_os = "espidf")]
#[inline]
pub fn gpio_write(pin: i32, high: bool) -> i32 {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Control loop only.
    unsafe { gpio_set_level(pin, u32::from(high)) }
}

#[cfg(not(target_os = "espidf"))]
#[inline]
pub fn gpio_write(_pin: i32, _high: bool) -> i32 {
    0
}
