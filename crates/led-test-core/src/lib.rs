//! Bench logic for the XIAO ESP32C3 LED selection test.
//!
//! Two white LEDs (470 Ohm to GND) flash in lockstep on GPIO3 and GPIO4,
//! which later drive ULN2803 inputs 1 and 2. GPIO5 is reserved for input 3
//! and held LOW. Nothing here touches esp-hal: the controller is generic
//! over the `embedded-hal` output and delay traits so it runs on the host
//! under test as well as on the board.

#![no_std]

pub mod config;
pub mod controller;

pub use config::{DutyCycle, SCHEDULE};
pub use controller::BlinkController;
