//! Phrase-words and where they sit on the letter grid.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{domain::Cell, error::ClockError, grid::LetterGrid};

/// A named word on the clock face. Minute words and hour words that share
/// letters ("FÜNF" and "fünf") are distinct keys with distinct placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordKey {
    #[serde(rename = "ES")]
    Es,
    #[serde(rename = "IST")]
    Ist,

    #[serde(rename = "zwölf")]
    Zwolf,
    #[serde(rename = "eins")]
    Eins,
    #[serde(rename = "zwei")]
    Zwei,
    #[serde(rename = "drei")]
    Drei,
    #[serde(rename = "vier")]
    Vier,
    #[serde(rename = "fünf")]
    Funf,
    #[serde(rename = "sechs")]
    Sechs,
    #[serde(rename = "sieben")]
    Sieben,
    #[serde(rename = "acht")]
    Acht,
    #[serde(rename = "neun")]
    Neun,
    #[serde(rename = "zehn")]
    Zehn,
    #[serde(rename = "elf")]
    Elf,

    #[serde(rename = "FÜNF")]
    FunfMinuten,
    #[serde(rename = "ZEHN")]
    ZehnMinuten,
    #[serde(rename = "VIERTEL")]
    Viertel,
    #[serde(rename = "ZWANZIG")]
    Zwanzig,
    #[serde(rename = "DREIVIERTEL")]
    Dreiviertel,
    #[serde(rename = "HALB")]
    Halb,
    #[serde(rename = "UHR")]
    Uhr,

    #[serde(rename = "VOR")]
    Vor,
    #[serde(rename = "NACH")]
    Nach,
}

impl WordKey {
    /// Words lit at every moment, in display order.
    pub const ALWAYS_ON: [WordKey; 2] = [WordKey::Es, WordKey::Ist];

    pub fn key(self) -> &'static str {
        match self {
            WordKey::Es => "ES",
            WordKey::Ist => "IST",
            WordKey::Zwolf => "zwölf",
            WordKey::Eins => "eins",
            WordKey::Zwei => "zwei",
            WordKey::Drei => "drei",
            WordKey::Vier => "vier",
            WordKey::Funf => "fünf",
            WordKey::Sechs => "sechs",
            WordKey::Sieben => "sieben",
            WordKey::Acht => "acht",
            WordKey::Neun => "neun",
            WordKey::Zehn => "zehn",
            WordKey::Elf => "elf",
            WordKey::FunfMinuten => "FÜNF",
            WordKey::ZehnMinuten => "ZEHN",
            WordKey::Viertel => "VIERTEL",
            WordKey::Zwanzig => "ZWANZIG",
            WordKey::Dreiviertel => "DREIVIERTEL",
            WordKey::Halb => "HALB",
            WordKey::Uhr => "UHR",
            WordKey::Vor => "VOR",
            WordKey::Nach => "NACH",
        }
    }

    /// The letters as printed on the grid.
    pub fn letters(self) -> String {
        self.key().to_uppercase()
    }

    /// Number of grid cells the word covers.
    pub fn cell_count(self) -> usize {
        self.key().chars().count()
    }

    pub fn is_direction(self) -> bool {
        matches!(self, WordKey::Vor | WordKey::Nach)
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Anchor of a word: the row and the column of its first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub row: usize,
    pub column: usize,
}

impl WordPlacement {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The cells covered by a word of `len` letters anchored here.
    pub fn span(self, len: usize) -> impl Iterator<Item = Cell> {
        (0..len).map(move |i| Cell::new(self.column + i, self.row))
    }
}

pub const STANDARD_PLACEMENTS: [(WordKey, WordPlacement); 23] = [
    (WordKey::Es, WordPlacement::new(0, 0)),
    (WordKey::Ist, WordPlacement::new(0, 3)),
    (WordKey::Zwolf, WordPlacement::new(8, 6)),
    (WordKey::Eins, WordPlacement::new(5, 0)),
    (WordKey::Zwei, WordPlacement::new(5, 7)),
    (WordKey::Drei, WordPlacement::new(6, 0)),
    (WordKey::Vier, WordPlacement::new(6, 7)),
    (WordKey::Funf, WordPlacement::new(4, 7)),
    (WordKey::Sechs, WordPlacement::new(7, 0)),
    (WordKey::Sieben, WordPlacement::new(8, 0)),
    (WordKey::Acht, WordPlacement::new(7, 7)),
    (WordKey::Neun, WordPlacement::new(9, 3)),
    (WordKey::Zehn, WordPlacement::new(9, 0)),
    (WordKey::Elf, WordPlacement::new(4, 5)),
    (WordKey::FunfMinuten, WordPlacement::new(0, 7)),
    (WordKey::ZehnMinuten, WordPlacement::new(1, 0)),
    (WordKey::Viertel, WordPlacement::new(2, 4)),
    (WordKey::Zwanzig, WordPlacement::new(1, 4)),
    (WordKey::Dreiviertel, WordPlacement::new(2, 0)),
    (WordKey::Halb, WordPlacement::new(4, 0)),
    (WordKey::Uhr, WordPlacement::new(9, 8)),
    (WordKey::Vor, WordPlacement::new(3, 0)),
    (WordKey::Nach, WordPlacement::new(3, 7)),
];

#[derive(Debug, Clone)]
pub struct WordTable {
    placements: HashMap<WordKey, WordPlacement>,
}

impl WordTable {
    /// Builds a table, checking each placement against the grid.
    pub fn from_entries(
        grid: &LetterGrid,
        entries: &[(WordKey, WordPlacement)],
    ) -> Result<Self, ClockError> {
        let mut placements = HashMap::with_capacity(entries.len());

        for &(key, placement) in entries {
            check_placement(grid, key, placement)?;

            if placements.insert(key, placement).is_some() {
                return Err(ClockError::malformed(format!(
                    "word `{key}` is placed more than once"
                )));
            }
        }

        Ok(Self { placements })
    }

    pub fn standard(grid: &LetterGrid) -> Result<Self, ClockError> {
        Self::from_entries(grid, &STANDARD_PLACEMENTS)
    }

    pub fn placement(&self, key: WordKey) -> Result<WordPlacement, ClockError> {
        self.placements
            .get(&key)
            .copied()
            .ok_or_else(|| ClockError::UnknownWordKey {
                key: key.key().to_string(),
            })
    }

    pub fn contains(&self, key: WordKey) -> bool {
        self.placements.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordKey, WordPlacement)> + '_ {
        self.placements.iter().map(|(key, placement)| (*key, *placement))
    }
}

fn check_placement(
    grid: &LetterGrid,
    key: WordKey,
    placement: WordPlacement,
) -> Result<(), ClockError> {
    let len = key.cell_count();

    if placement.row >= grid.rows() {
        return Err(ClockError::malformed(format!(
            "word `{key}` is on row {}, grid has {} rows",
            placement.row,
            grid.rows()
        )));
    }
    if placement.column + len > grid.columns() {
        return Err(ClockError::malformed(format!(
            "word `{key}` at column {} runs past the {}-column grid",
            placement.column,
            grid.columns()
        )));
    }

    let expected = key.letters();
    match grid.read(placement.row, placement.column, len) {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(ClockError::malformed(format!(
            "word `{key}` at ({}, {}) reads `{found}`, expected `{expected}`",
            placement.row, placement.column
        ))),
        None => Err(ClockError::malformed(format!(
            "word `{key}` at ({}, {}) is outside the grid",
            placement.row, placement.column
        ))),
    }
}
