use std::sync::Arc;

use clock_core::ActiveState;
use clock_runtime::ClockEvent;
use crossbeam_channel::Receiver;
use tracing::warn;

#[derive(Debug, Default)]
pub struct ClockModel {
    latest: Option<Arc<ActiveState>>,
    failure: Option<String>,
    ticks: u64,
}

impl ClockModel {
    pub fn apply(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::Tick(snapshot) => {
                self.latest = Some(snapshot);
                self.failure = None;
                self.ticks = self.ticks.wrapping_add(1);
            }
            ClockEvent::Failed(reason) => {
                warn!(%reason, "clock update failed");
                self.failure = Some(reason);
            }
        }
    }

    /// Applies everything queued; the newest snapshot wins.
    pub fn drain(&mut self, events: &Receiver<ClockEvent>) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn latest(&self) -> Option<&ActiveState> {
        self.latest.as_deref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use clock_core::{ClockState, PhrasingKind};
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn newest_snapshot_wins() {
        let mut clock = ClockState::new(PhrasingKind::Standard).expect("clock");
        let (tx, rx) = bounded(4);
        tx.send(ClockEvent::Tick(clock.tick(7, 0).expect("tick")))
            .expect("send");
        tx.send(ClockEvent::Tick(clock.tick(7, 1).expect("tick")))
            .expect("send");

        let mut model = ClockModel::default();
        assert_eq!(model.drain(&rx), 2);
        assert_eq!(model.ticks(), 2);
        assert_eq!(model.latest().map(|state| state.corners), Some(1));
    }

    #[test]
    fn failure_keeps_last_face_until_next_tick() {
        let mut clock = ClockState::new(PhrasingKind::Standard).expect("clock");
        let mut model = ClockModel::default();

        model.apply(ClockEvent::Tick(clock.tick(7, 0).expect("tick")));
        model.apply(ClockEvent::Failed("source unavailable".to_string()));
        assert_eq!(model.failure(), Some("source unavailable"));
        assert!(model.latest().is_some());

        model.apply(ClockEvent::Tick(clock.tick(7, 1).expect("tick")));
        assert_eq!(model.failure(), None);
    }
}
