//! Plain-text clock face.

use clock_core::{ActiveState, Corner, LetterGrid};

pub const UNLIT_LETTER: char = '·';
pub const LIT_DOT: char = '●';
pub const UNLIT_DOT: char = '○';

pub fn render_face(grid: &LetterGrid, state: &ActiveState) -> String {
    let width = grid.columns() * 2 - 1;
    let dot = |corner| {
        if state.corner_lit(corner) {
            LIT_DOT
        } else {
            UNLIT_DOT
        }
    };

    let mut lines = Vec::with_capacity(grid.rows() + 2);
    lines.push(format!(
        "{}{}{}",
        dot(Corner::TopLeft),
        " ".repeat(width),
        dot(Corner::TopRight)
    ));

    let mut row = Vec::with_capacity(grid.columns());
    for (cell, letter) in grid.cells() {
        row.push(if state.is_lit(cell) {
            letter
        } else {
            UNLIT_LETTER
        });

        if row.len() == grid.columns() {
            let text: Vec<String> = row.drain(..).map(String::from).collect();
            lines.push(format!(" {} ", text.join(" ")));
        }
    }

    lines.push(format!(
        "{}{}{}",
        dot(Corner::BottomLeft),
        " ".repeat(width),
        dot(Corner::BottomRight)
    ));

    lines.join("\n")
}
