//! Drives the clock core from a time source: settings, time sources and the
//! scheduler thread that publishes fresh snapshots.

pub mod config;
pub mod scheduler;
pub mod time_source;

pub use config::{load_settings, ConfigError, Settings};
pub use scheduler::{ClockEvent, Scheduler, SchedulerHandle};
pub use time_source::{FixedClock, SimulatedClock, SystemClock, TimeSource};

use clock_core::{ClockError, ClockState, ClockTime};

/// Picks the time source the settings ask for.
pub fn time_source_for(settings: &Settings) -> Box<dyn TimeSource> {
    if settings.simulate {
        let start = SystemClock.now().unwrap_or(ClockTime::MIDNIGHT);
        return Box::new(SimulatedClock::starting_at(start));
    }
    Box::new(SystemClock)
}

/// Builds the clock state (running the start-up table check) and a scheduler
/// around it.
pub fn scheduler_for(settings: &Settings) -> Result<Scheduler, ClockError> {
    let state = ClockState::new(settings.phrasing)?;
    Ok(Scheduler::new(state, time_source_for(settings)))
}
