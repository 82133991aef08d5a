use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;
use tracing::info;

use crate::{
    domain::{Cell, ClockTime, Corner},
    encoder::TimeEncoder,
    error::ClockError,
    grid::LetterGrid,
    phrasing::PhrasingKind,
    resolver::CellResolver,
    words::{WordKey, WordPlacement, WordTable, STANDARD_PLACEMENTS},
};

/// Everything a renderer needs for one minute. Replaced wholesale on every
/// tick, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveState {
    pub time: ClockTime,
    pub words: Vec<WordKey>,
    pub cells: BTreeSet<Cell>,
    pub corners: u8,
}

impl ActiveState {
    pub fn is_lit(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn corner_lit(&self, corner: Corner) -> bool {
        corner.index() < usize::from(self.corners)
    }
}

#[derive(Debug)]
pub struct ClockState {
    grid: LetterGrid,
    encoder: TimeEncoder,
    resolver: CellResolver,
    current: Option<Arc<ActiveState>>,
}

impl ClockState {
    /// Builds the standard face and runs the start-up consistency check.
    pub fn new(kind: PhrasingKind) -> Result<Self, ClockError> {
        Self::with_tables(LetterGrid::standard()?, &STANDARD_PLACEMENTS, kind)
    }

    pub fn with_tables(
        grid: LetterGrid,
        placements: &[(WordKey, WordPlacement)],
        kind: PhrasingKind,
    ) -> Result<Self, ClockError> {
        let table = WordTable::from_entries(&grid, placements)?;
        let resolver = CellResolver::new(table);
        let encoder = TimeEncoder::new(kind);
        let verified = resolver.verify_covers(encoder.phrasing())?;

        info!(
            phrasing = %kind,
            placements = resolver.table().len(),
            verified,
            "clock tables consistent"
        );

        Ok(Self {
            grid,
            encoder,
            resolver,
            current: None,
        })
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn phrasing(&self) -> PhrasingKind {
        self.encoder.phrasing().kind
    }

    pub fn compute(&self, time: ClockTime) -> Result<ActiveState, ClockError> {
        let encoding = self.encoder.encode_time(time);
        let cells = self.resolver.resolve(&encoding.words)?;

        Ok(ActiveState {
            time,
            words: encoding.words,
            cells,
            corners: encoding.corners,
        })
    }

    pub fn tick(&mut self, hour: u32, minute: u32) -> Result<Arc<ActiveState>, ClockError> {
        self.tick_time(ClockTime::new(hour, minute)?)
    }

    /// Computes a fresh state and makes it the current one.
    pub fn tick_time(&mut self, time: ClockTime) -> Result<Arc<ActiveState>, ClockError> {
        let state = Arc::new(self.compute(time)?);
        self.current = Some(Arc::clone(&state));
        Ok(state)
    }

    pub fn current(&self) -> Option<Arc<ActiveState>> {
        self.current.clone()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
