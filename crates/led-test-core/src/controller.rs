//! Lockstep blink loop for the two indicator lines.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use log::info;

use crate::config::DutyCycle;

/// Drives two output lines HIGH then LOW together, forever.
///
/// A third reserved line is taken LOW on construction and never written
/// again, so it cannot float while the rest of the harness is wired up.
pub struct BlinkController<P, D> {
    active: [P; 2],
    reserved: P,
    delay: D,
    schedule: DutyCycle,
}

impl<P, D> BlinkController<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Takes ownership of the lines and drives all three LOW before returning.
    pub fn new(
        led1: P,
        led2: P,
        reserved: P,
        delay: D,
        schedule: DutyCycle,
    ) -> Result<Self, P::Error> {
        let mut controller = Self {
            active: [led1, led2],
            reserved,
            delay,
            schedule,
        };
        controller.drive_active(PinState::Low)?;
        controller.reserved.set_low()?;

        info!(
            "blink: 2 lines in lockstep, 1 reserved LOW, {}ms on / {}ms off ({}% duty)",
            schedule.on_ms,
            schedule.off_ms,
            schedule.duty_percent()
        );
        Ok(controller)
    }

    pub fn schedule(&self) -> DutyCycle {
        self.schedule
    }

    /// One full period: on-time HIGH, then off-time LOW.
    pub fn cycle(&mut self) -> Result<(), P::Error> {
        self.drive_active(PinState::High)?;
        self.delay.delay_ms(self.schedule.on_ms);

        self.drive_active(PinState::Low)?;
        self.delay.delay_ms(self.schedule.off_ms);
        Ok(())
    }

    /// Blinks until a line write fails. On hardware whose pins cannot fail
    /// this never returns.
    pub fn run(mut self) -> Result<Infallible, P::Error> {
        loop {
            self.cycle()?;
        }
    }

    // No wait between the two writes.
    fn drive_active(&mut self, state: PinState) -> Result<(), P::Error> {
        for line in self.active.iter_mut() {
            line.set_state(state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCHEDULE;
    use embedded_hal::digital::ErrorType;

    #[derive(Debug, Default)]
    struct MockLine {
        level: Option<bool>,
        writes: u32,
    }

    impl ErrorType for MockLine {
        type Error = Infallible;
    }

    impl OutputPin for MockLine {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.level = Some(false);
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.level = Some(true);
            self.writes += 1;
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockDelay {
        elapsed_ns: u64,
        waits: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ns += u64::from(ns);
            self.waits += 1;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.elapsed_ns += u64::from(ms) * 1_000_000;
            self.waits += 1;
        }
    }

    fn controller() -> BlinkController<MockLine, MockDelay> {
        BlinkController::new(
            MockLine::default(),
            MockLine::default(),
            MockLine::default(),
            MockDelay::default(),
            SCHEDULE,
        )
        .unwrap()
    }

    #[test]
    fn test_new_drives_everything_low() {
        let c = controller();
        assert_eq!(c.active[0].level, Some(false));
        assert_eq!(c.active[1].level, Some(false));
        assert_eq!(c.reserved.level, Some(false));
        assert_eq!(c.delay.waits, 0);
        assert_eq!(c.schedule(), SCHEDULE);
    }

    #[test]
    fn test_cycle_ends_low_after_one_period() {
        let mut c = controller();
        c.cycle().unwrap();

        assert_eq!(c.active[0].level, Some(false));
        assert_eq!(c.active[1].level, Some(false));
        assert_eq!(c.delay.waits, 2);
        assert_eq!(c.delay.elapsed_ns, 1_000 * 1_000_000);
    }

    #[test]
    fn test_reserved_line_written_once() {
        let mut c = controller();
        for _ in 0..5 {
            c.cycle().unwrap();
        }
        assert_eq!(c.reserved.writes, 1);
        // init LOW + (HIGH, LOW) per cycle
        assert_eq!(c.active[0].writes, 11);
        assert_eq!(c.active[1].writes, 11);
    }
}
