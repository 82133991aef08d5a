//! The fixed letter matrix of the clock face.

use crate::{domain::Cell, error::ClockError};

pub const COLUMNS: usize = 11;
pub const ROWS: usize = 10;

pub const LETTERS: &str = concat!(
    "ESKISTAFÜNF",
    "ZEHNZWANZIG",
    "DREIVIERTEL",
    "VORFUNKNACH",
    "HALBAELFÜNF",
    "EINSXAMZWEI",
    "DREIPMJVIER",
    "SECHSNLACHT",
    "SIEBENZWÖLF",
    "ZEHNEUNKUHR",
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    columns: usize,
    rows: usize,
    letters: Vec<char>,
}

impl LetterGrid {
    pub fn new(columns: usize, rows: usize, letters: &str) -> Result<Self, ClockError> {
        let letters: Vec<char> = letters.chars().collect();

        if columns == 0 || rows == 0 {
            return Err(ClockError::malformed(format!(
                "grid must have at least one cell, got {columns}x{rows}"
            )));
        }
        if columns * rows != letters.len() {
            return Err(ClockError::malformed(format!(
                "{columns}x{rows} grid needs {} letters, got {}",
                columns * rows,
                letters.len()
            )));
        }

        Ok(Self {
            columns,
            rows,
            letters,
        })
    }

    pub fn standard() -> Result<Self, ClockError> {
        Self::new(COLUMNS, ROWS, LETTERS)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letter(&self, cell: Cell) -> Option<char> {
        if cell.column >= self.columns || cell.row >= self.rows {
            return None;
        }
        self.letters.get(cell.row * self.columns + cell.column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.letters[start..start + self.columns])
    }

    /// All cells in reading order, with their letter.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        let columns = self.columns;
        self.letters
            .iter()
            .enumerate()
            .map(move |(index, ch)| (Cell::new(index % columns, index / columns), *ch))
    }

    /// Reads `len` letters left to right starting at `(row, column)`.
    pub fn read(&self, row: usize, column: usize, len: usize) -> Option<String> {
        let row = self.row(row)?;
        row.get(column..column.checked_add(len)?)
            .map(|span| span.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grid_is_eleven_by_ten() {
        let grid = LetterGrid::standard().expect("grid");
        assert_eq!(grid.columns(), 11);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.len(), 110);
    }

    #[test]
    fn counts_umlauts_as_single_cells() {
        let grid = LetterGrid::standard().expect("grid");
        assert_eq!(grid.letter(Cell::new(8, 0)), Some('Ü'));
        assert_eq!(grid.letter(Cell::new(8, 8)), Some('Ö'));
        assert_eq!(grid.read(0, 7, 4).as_deref(), Some("FÜNF"));
    }

    #[test]
    fn rejects_letter_count_mismatch() {
        let err = LetterGrid::new(11, 10, "ESKIST").expect_err("short grid");
        assert!(matches!(err, ClockError::MalformedGrid { .. }));
    }

    #[test]
    fn reading_past_the_row_end_yields_nothing() {
        let grid = LetterGrid::standard().expect("grid");
        assert_eq!(grid.read(0, 9, 3), None);
        assert_eq!(grid.read(10, 0, 1), None);
        assert_eq!(grid.letter(Cell::new(11, 0)), None);
    }

    #[test]
    fn cells_walk_rows_in_reading_order() {
        let grid = LetterGrid::standard().expect("grid");
        let cells: Vec<_> = grid.cells().take(12).collect();
        assert_eq!(cells[0], (Cell::new(0, 0), 'E'));
        assert_eq!(cells[10], (Cell::new(10, 0), 'F'));
        assert_eq!(cells[11], (Cell::new(0, 1), 'Z'));
    }
}
