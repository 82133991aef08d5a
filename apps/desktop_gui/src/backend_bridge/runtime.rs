//! Starts the scheduler that feeds snapshots to the UI.

use anyhow::{Context, Result};
use clock_runtime::{scheduler_for, ClockEvent, SchedulerHandle, Settings};
use crossbeam_channel::{bounded, Receiver};

const CLOCK_EVENT_QUEUE: usize = 16;

pub fn launch(settings: &Settings) -> Result<(Receiver<ClockEvent>, SchedulerHandle)> {
    let scheduler = scheduler_for(settings).context("clock tables failed the start-up check")?;

    let (ui_tx, ui_rx) = bounded::<ClockEvent>(CLOCK_EVENT_QUEUE);
    let handle = scheduler
        .spawn(settings.tick_interval(), ui_tx)
        .context("failed to start scheduler thread")?;

    Ok((ui_rx, handle))
}
