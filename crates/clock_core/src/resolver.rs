//! Phrase-words to grid cells.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{domain::Cell, error::ClockError, phrasing::Phrasing, words::WordKey, words::WordTable};

#[derive(Debug, Clone)]
pub struct CellResolver {
    table: WordTable,
}

impl CellResolver {
    pub fn new(table: WordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &WordTable {
        &self.table
    }

    /// Union of the cells covered by each word. Overlapping words collapse.
    pub fn resolve(&self, words: &[WordKey]) -> Result<BTreeSet<Cell>, ClockError> {
        let mut cells = BTreeSet::new();

        for &word in words {
            let placement = self.table.placement(word)?;
            cells.extend(placement.span(word.cell_count()));
        }

        Ok(cells)
    }

    /// Checks that every word the phrasing can produce has a placement.
    /// Returns the number of words verified.
    pub fn verify_covers(&self, phrasing: &Phrasing) -> Result<usize, ClockError> {
        let vocabulary = phrasing.vocabulary();

        for &word in &vocabulary {
            if !self.table.contains(word) {
                return Err(ClockError::UnknownWordKey {
                    key: word.key().to_string(),
                });
            }
        }

        debug!(
            phrasing = %phrasing.kind,
            words = vocabulary.len(),
            "word table covers phrasing"
        );

        Ok(vocabulary.len())
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
