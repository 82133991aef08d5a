//! Geometry and painting of the letter grid and the corner dots.

use clock_core::{ActiveState, Cell, Corner, LetterGrid};
use eframe::egui::{self, Align2, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, StrokeKind};

use super::theme::FaceTheme;

pub const MARGIN: f32 = 50.0;
pub const DOT_RADIUS: f32 = 8.0;
// Fraction of the margin a dot sits away from its window corner.
const DOT_INSET: f32 = 0.8;
const LETTER_SCALE: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    window: Rect,
    letters: Rect,
    cell_size: egui::Vec2,
    columns: usize,
}

impl FaceLayout {
    pub fn new(window: Rect, columns: usize, rows: usize) -> Self {
        let letters = window.shrink(MARGIN);
        let cell_size = egui::vec2(
            letters.width().max(0.0) / columns.max(1) as f32,
            letters.height().max(0.0) / rows.max(1) as f32,
        );

        Self {
            window,
            letters,
            cell_size,
            columns,
        }
    }

    pub fn letters_rect(&self) -> Rect {
        self.letters
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let min = self.letters.min
            + egui::vec2(
                cell.column as f32 * self.cell_size.x,
                cell.row as f32 * self.cell_size.y,
            );
        Rect::from_min_size(min, self.cell_size)
    }

    pub fn cell_index(&self, cell: Cell) -> usize {
        cell.row * self.columns + cell.column
    }

    pub fn font_size(&self) -> f32 {
        self.cell_size.x.min(self.cell_size.y) * LETTER_SCALE
    }

    pub fn window_corner(&self, corner: Corner) -> Pos2 {
        match corner {
            Corner::TopLeft => self.window.left_top(),
            Corner::TopRight => self.window.right_top(),
            Corner::BottomLeft => self.window.left_bottom(),
            Corner::BottomRight => self.window.right_bottom(),
        }
    }

    /// The margin-inset point diagonal from the window corner.
    pub fn margin_corner(&self, corner: Corner) -> Pos2 {
        let inward = match corner {
            Corner::TopLeft => egui::vec2(1.0, 1.0),
            Corner::TopRight => egui::vec2(-1.0, 1.0),
            Corner::BottomLeft => egui::vec2(1.0, -1.0),
            Corner::BottomRight => egui::vec2(-1.0, -1.0),
        };
        self.window_corner(corner) + inward * MARGIN
    }

    pub fn dot_center(&self, corner: Corner) -> Pos2 {
        self.window_corner(corner)
            .lerp(self.margin_corner(corner), DOT_INSET)
    }
}

pub fn paint_face(
    painter: &Painter,
    layout: &FaceLayout,
    grid: &LetterGrid,
    state: Option<&ActiveState>,
    theme: &FaceTheme,
    debug_overlay: bool,
) {
    if debug_overlay {
        painter.rect_stroke(
            layout.letters_rect(),
            CornerRadius::ZERO,
            Stroke::new(4.0, theme.debug_outline),
            StrokeKind::Inside,
        );
    }

    let font = FontId::proportional(layout.font_size());
    for (cell, letter) in grid.cells() {
        let rect = layout.cell_rect(cell);

        if debug_overlay {
            painter.rect_filled(rect, CornerRadius::ZERO, theme.debug_cell_fill);
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(1.0, theme.debug_outline),
                StrokeKind::Inside,
            );
            painter.text(
                rect.left_top(),
                Align2::LEFT_TOP,
                format!("{} [{}, {}]", layout.cell_index(cell), cell.column, cell.row),
                FontId::monospace(10.0),
                theme.debug_outline,
            );
        }

        let lit = state.is_some_and(|state| state.is_lit(cell));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            letter,
            font.clone(),
            if lit { theme.active } else { theme.inactive },
        );
    }

    for corner in Corner::ALL {
        if debug_overlay {
            painter.line_segment(
                [layout.margin_corner(corner), layout.window_corner(corner)],
                Stroke::new(1.0, theme.debug_guide),
            );
        }

        let lit = state.is_some_and(|state| state.corner_lit(corner));
        painter.circle_filled(
            layout.dot_center(corner),
            DOT_RADIUS,
            if lit { theme.active } else { theme.inactive },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> FaceLayout {
        FaceLayout::new(
            Rect::from_min_size(Pos2::ZERO, egui::vec2(1200.0, 1100.0)),
            11,
            10,
        )
    }

    #[test]
    fn cells_divide_the_inner_area_evenly() {
        let layout = layout();
        assert_eq!(layout.letters_rect().min, Pos2::new(50.0, 50.0));

        let first = layout.cell_rect(Cell::new(0, 0));
        assert_eq!(first.min, Pos2::new(50.0, 50.0));
        assert_eq!(first.size(), egui::vec2(100.0, 100.0));

        let last = layout.cell_rect(Cell::new(10, 9));
        assert_eq!(last.max, Pos2::new(1150.0, 1050.0));
        assert_eq!(layout.cell_index(Cell::new(10, 9)), 109);
    }

    fn assert_close(actual: Pos2, expected: Pos2) {
        assert!(
            (actual - expected).length() < 1e-3,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn dots_sit_most_of_the_margin_inside_each_corner() {
        let layout = layout();
        assert_close(layout.dot_center(Corner::TopLeft), Pos2::new(40.0, 40.0));
        assert_close(layout.dot_center(Corner::TopRight), Pos2::new(1160.0, 40.0));
        assert_close(layout.dot_center(Corner::BottomLeft), Pos2::new(40.0, 1060.0));
        assert_close(
            layout.dot_center(Corner::BottomRight),
            Pos2::new(1160.0, 1060.0),
        );
    }

    #[test]
    fn tiny_windows_do_not_produce_negative_cells() {
        let layout = FaceLayout::new(
            Rect::from_min_size(Pos2::ZERO, egui::vec2(40.0, 40.0)),
            11,
            10,
        );
        assert!(layout.font_size() >= 0.0);
    }
}
