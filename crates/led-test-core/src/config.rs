//! Pin map and timing, fixed at build time.

/// D1 - antenna 1 indicator + ULN2803 input 1
pub const LED1_GPIO: u8 = 3;
/// D2 - antenna 2 indicator + ULN2803 input 2
pub const LED2_GPIO: u8 = 4;
/// D3 - antenna 3, reserved for ULN2803 input 3
pub const RESERVED_GPIO: u8 = 5;

/// On/off split of one blink period, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyCycle {
    pub on_ms: u32,
    pub off_ms: u32,
}

impl DutyCycle {
    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self { on_ms, off_ms }
    }

    /// Widened so any pair of `u32` halves fits.
    pub const fn period_ms(&self) -> u64 {
        self.on_ms as u64 + self.off_ms as u64
    }

    /// Share of the period spent HIGH, rounded down. Zero for an empty period.
    pub const fn duty_percent(&self) -> u32 {
        match self.period_ms() {
            0 => 0,
            // at most 100
            period => (self.on_ms as u64 * 100 / period) as u32,
        }
    }
}

/// 95% duty cycle: 950ms ON / 50ms OFF
pub const SCHEDULE: DutyCycle = DutyCycle::new(950, 50);

const _: () = assert!(SCHEDULE.period_ms() == 1000);
const _: () = assert!(SCHEDULE.on_ms > SCHEDULE.off_ms);
