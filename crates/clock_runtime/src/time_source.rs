//! Where the scheduler gets the time of day from.

use chrono::{Local, Timelike};
use clock_core::{ClockError, ClockTime};

pub trait TimeSource: Send {
    fn now(&mut self) -> Result<ClockTime, ClockError>;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&mut self) -> Result<ClockTime, ClockError> {
        clock_time_of(&Local::now())
    }
}

pub fn clock_time_of<T: Timelike>(time: &T) -> Result<ClockTime, ClockError> {
    ClockTime::new(time.hour(), time.minute())
}

/// Advances one minute per sample, for watching a whole day go by.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedClock {
    next: ClockTime,
}

impl SimulatedClock {
    pub fn starting_at(start: ClockTime) -> Self {
        Self { next: start }
    }
}

impl TimeSource for SimulatedClock {
    fn now(&mut self) -> Result<ClockTime, ClockError> {
        let current = self.next;
        self.next = current.next_minute();
        Ok(current)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl TimeSource for FixedClock {
    fn now(&mut self) -> Result<ClockTime, ClockError> {
        Ok(self.0)
    }
}
