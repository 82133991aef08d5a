use super::*;
use crate::{
    grid::LetterGrid,
    phrasing::{REGIONAL, STANDARD},
    words::{WordPlacement, STANDARD_PLACEMENTS},
    words::WordKey::*,
};

fn standard_resolver() -> CellResolver {
    let grid = LetterGrid::standard().expect("grid");
    CellResolver::new(WordTable::standard(&grid).expect("table"))
}

#[test]
fn always_on_words_cover_five_cells() {
    let cells = standard_resolver().resolve(&[Es, Ist]).expect("resolve");
    assert_eq!(cells.len(), "ES".len() + "IST".len());
    assert!(cells.contains(&Cell::new(0, 0)));
    assert!(cells.contains(&Cell::new(1, 0)));
    assert!(cells.contains(&Cell::new(3, 0)));
    assert!(cells.contains(&Cell::new(5, 0)));
    assert!(!cells.contains(&Cell::new(2, 0)));
}

#[test]
fn umlaut_words_span_their_letter_count() {
    let cells = standard_resolver().resolve(&[Zwolf]).expect("resolve");
    let expected: BTreeSet<_> = (6..11).map(|column| Cell::new(column, 8)).collect();
    assert_eq!(cells, expected);
}

#[test]
fn overlapping_words_collapse() {
    let resolver = standard_resolver();
    let cells = resolver.resolve(&[Dreiviertel, Viertel]).expect("resolve");
    assert_eq!(cells.len(), 11);

    let repeated = resolver.resolve(&[Uhr, Uhr]).expect("resolve");
    assert_eq!(repeated.len(), 3);
}

#[test]
fn cell_count_matches_word_lengths_for_every_minute() {
    let resolver = standard_resolver();
    let encoder = crate::encoder::TimeEncoder::default();

    for time in crate::domain::ClockTime::all_day() {
        let encoding = encoder.encode_time(time);
        let cells = resolver.resolve(&encoding.words).expect("resolve");
        let letters: usize = encoding.words.iter().map(|word| word.cell_count()).sum();
        assert_eq!(cells.len(), letters, "{time}");
    }
}

#[test]
fn missing_placement_is_unknown_word_key() {
    let grid = LetterGrid::standard().expect("grid");
    let entries: Vec<_> = STANDARD_PLACEMENTS
        .iter()
        .copied()
        .filter(|(key, _)| *key != Uhr)
        .collect();
    let resolver = CellResolver::new(WordTable::from_entries(&grid, &entries).expect("table"));

    assert_eq!(
        resolver.resolve(&[Es, Ist, Uhr, Zehn]),
        Err(ClockError::UnknownWordKey {
            key: "UHR".to_string()
        })
    );
    assert!(matches!(
        resolver.verify_covers(&STANDARD),
        Err(ClockError::UnknownWordKey { .. })
    ));
}

#[test]
fn standard_table_covers_both_phrasings() {
    let resolver = standard_resolver();
    assert_eq!(resolver.verify_covers(&STANDARD).expect("standard"), 22);
    assert_eq!(resolver.verify_covers(&REGIONAL).expect("regional"), 22);
}

#[test]
fn every_placement_spells_its_word() {
    let grid = LetterGrid::standard().expect("grid");
    let table = WordTable::standard(&grid).expect("table");

    for (key, placement) in table.iter() {
        let read = grid
            .read(placement.row, placement.column, key.cell_count())
            .expect("span inside grid");
        assert_eq!(read, key.key().to_uppercase(), "{key}");
        assert!(placement.column + key.cell_count() <= grid.columns());
    }
}

#[test]
fn misplaced_word_is_malformed_grid() {
    let grid = LetterGrid::standard().expect("grid");

    let shifted = WordTable::from_entries(&grid, &[(Ist, WordPlacement::new(0, 2))]);
    assert!(matches!(shifted, Err(ClockError::MalformedGrid { .. })));

    let overflowing = WordTable::from_entries(&grid, &[(Nach, WordPlacement::new(3, 8))]);
    assert!(matches!(overflowing, Err(ClockError::MalformedGrid { .. })));

    let duplicated = WordTable::from_entries(
        &grid,
        &[(Es, WordPlacement::new(0, 0)), (Es, WordPlacement::new(0, 0))],
    );
    assert!(matches!(duplicated, Err(ClockError::MalformedGrid { .. })));
}
