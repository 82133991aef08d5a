//! Periodic sampling of a time source into whole `ActiveState` snapshots.

use std::{
    io,
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use clock_core::{ActiveState, ClockError, ClockState, ClockTime};
use crossbeam_channel::{bounded, RecvTimeoutError, Sender, TrySendError};
use tracing::{debug, error, info};

use crate::time_source::TimeSource;

#[derive(Debug)]
pub enum ClockEvent {
    Tick(Arc<ActiveState>),
    Failed(String),
}

pub struct Scheduler {
    state: ClockState,
    source: Box<dyn TimeSource>,
    last_published: Option<ClockTime>,
}

impl Scheduler {
    pub fn new(state: ClockState, source: Box<dyn TimeSource>) -> Self {
        Self {
            state,
            source,
            last_published: None,
        }
    }

    /// Samples the source once. Yields a snapshot only when the minute has
    /// changed since the last one handed out.
    pub fn poll(&mut self) -> Result<Option<Arc<ActiveState>>, ClockError> {
        let time = self.source.now()?;
        if self.last_published == Some(time) {
            return Ok(None);
        }

        let snapshot = self.state.tick_time(time)?;
        self.last_published = Some(time);
        Ok(Some(snapshot))
    }

    /// Makes the next `poll` publish even if the minute is unchanged.
    pub fn force_republish(&mut self) {
        self.last_published = None;
    }

    pub fn current(&self) -> Option<Arc<ActiveState>> {
        self.state.current()
    }

    pub fn spawn(
        mut self,
        interval: Duration,
        events: Sender<ClockEvent>,
    ) -> io::Result<SchedulerHandle> {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let join = thread::Builder::new()
            .name("wordclock-scheduler".to_string())
            .spawn(move || {
                info!(interval_ms = interval.as_millis() as u64, "scheduler started");

                loop {
                    if !self.publish_once(&events) {
                        break;
                    }

                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }

                info!("scheduler stopped");
            })?;

        Ok(SchedulerHandle {
            stop_tx: Some(stop_tx),
            join: Some(join),
        })
    }

    // Returns false once the receiving side is gone.
    fn publish_once(&mut self, events: &Sender<ClockEvent>) -> bool {
        let event = match self.poll() {
            Ok(Some(snapshot)) => {
                debug!(
                    time = %snapshot.time,
                    cells = snapshot.cells.len(),
                    corners = snapshot.corners,
                    "publishing clock snapshot"
                );
                ClockEvent::Tick(snapshot)
            }
            Ok(None) => return true,
            Err(err) => {
                error!(error = %err, "clock tick failed");
                ClockEvent::Failed(err.to_string())
            }
        };

        match events.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("clock event queue full; snapshot dropped");
                self.force_republish();
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

pub struct SchedulerHandle {
    stop_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    pub fn stop(mut self) {
        self.shutdown();
    }

    pub fn is_running(&self) -> bool {
        self.join
            .as_ref()
            .is_some_and(|join| !join.is_finished())
    }

    fn shutdown(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.try_send(());
        }
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                error!("scheduler thread panicked");
            }
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
