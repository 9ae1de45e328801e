//! LED selection test for the XIAO ESP32C3.
//!
//! Checks white LED brightness with 470 Ohm resistors before the permanent
//! connections are soldered. Both LEDs flash together at a 95% duty cycle.
//! If they look too dim, drop the resistors to 330 or 220 Ohm.
//!
//! The following wiring is assumed:
//! - LED1 => GPIO3 (D1) -> 470R -> GND, later ULN2803 input 1
//! - LED2 => GPIO4 (D2) -> 470R -> GND, later ULN2803 input 2
//! - GPIO5 (D3) reserved for ULN2803 input 3, held LOW

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
    main,
};
use led_test_core::{
    config::{LED1_GPIO, LED2_GPIO, RESERVED_GPIO},
    BlinkController, SCHEDULE,
};
use log::info;

#[main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Start LOW so nothing glitches HIGH before the controller takes over
    let led1 = Output::new(peripherals.GPIO3, Level::Low, OutputConfig::default());
    let led2 = Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default());
    let reserved = Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default());

    info!("XIAO ESP32C3 LED selection test: white LEDs + 470R, ULN2803 inputs 1-3");
    info!(
        "GPIO{} + GPIO{} blinking, GPIO{} reserved LOW",
        LED1_GPIO, LED2_GPIO, RESERVED_GPIO
    );
    info!("LEDs too dim? Try 330R or 220R");

    let controller = match BlinkController::new(led1, led2, reserved, Delay::new(), SCHEDULE) {
        Ok(controller) => controller,
        Err(never) => match never {},
    };

    match controller.run() {
        Ok(never) | Err(never) => match never {},
    }
}
