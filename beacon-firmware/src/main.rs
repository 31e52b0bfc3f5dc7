//! Beacon - Heartbeat Blink Firmware
//!
//! Main firmware binary for RP2040-based boards. Drives one LED through the
//! short-short-long heartbeat signature forever.
//!
//! There is exactly one thread of control and no executor: after setup the
//! blink loop owns the CPU until reset.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use beacon_core::timing::DelayCalibration;
use beacon_drivers::BlinkDriver;
use beacon_hal_rp2040::gpio::FlexOutput;

// BOARD_NAME, LED_PIN, CPU_HZ and led_pin!() from board.toml
include!(concat!(env!("OUT_DIR"), "/board.rs"));

/// Delay calibration for the build-time clock
const CALIBRATION: DelayCalibration = match DelayCalibration::from_hz(CPU_HZ) {
    Some(calibration) => calibration,
    None => core::panic!("board.toml cpu_hz must be non-zero"),
};

#[cfg(not(feature = "timer-delay"))]
type Delay = beacon_hal_rp2040::delay::CycleDelay;

#[cfg(feature = "timer-delay")]
type Delay = beacon_drivers::embedded::EhDelay<embassy_time::Delay>;

#[cfg(not(feature = "timer-delay"))]
fn make_delay() -> Delay {
    info!(
        "Cycle delay: {} Hz, {} cycles/ms",
        CALIBRATION.cpu_hz(),
        CALIBRATION.cycles_per_ms()
    );
    beacon_hal_rp2040::delay::CycleDelay::new(CALIBRATION)
}

#[cfg(feature = "timer-delay")]
fn make_delay() -> Delay {
    info!("Timer delay: busy-waiting on embassy-time");
    beacon_drivers::embedded::EhDelay::new(embassy_time::Delay)
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Beacon firmware starting on board '{}'", BOARD_NAME);

    // Initialize RP2040 peripherals (clocks, time driver)
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let led = FlexOutput::new(led_pin!(p));
    let mut blink = BlinkDriver::new(led, make_delay());

    blink.initialize();
    info!(
        "Heartbeat on GPIO{}: {} toggles per {} ms period",
        LED_PIN,
        blink.pattern().toggles_per_cycle(),
        blink.pattern().period_ms()
    );

    blink.run_forever_with(|cycle| {
        debug!("Heartbeat cycle {} done at {} ms", cycle, Instant::now().as_millis());
    })
}
