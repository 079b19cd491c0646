//! Two-panel comparison of the clue grid and the solved grid, with cell
//! backgrounds alternating per 3x3 region for visual separation.

use crate::grid::{Grid, DIMENSION, REGION_DIM};
use colored::Colorize;
use std::fmt::Write;

const PANEL_GAP: &str = "   ";

/// Renders `clue` and `solution` next to each other, blanks left empty.
pub fn side_by_side(clue: &Grid, solution: &Grid) -> String {
    let mut out = String::new();
    let panel_width = DIMENSION * 3;
    let _ = writeln!(
        out,
        "{:<panel_width$}{}{}",
        "Clue", PANEL_GAP, "Solution"
    );
    for row in 0..DIMENSION {
        let mut line = String::new();
        push_row(&mut line, clue, row);
        line.push_str(PANEL_GAP);
        push_row(&mut line, solution, row);
        let _ = writeln!(out, "{line}");
    }
    out
}

fn push_row(line: &mut String, grid: &Grid, row: usize) {
    for col in 0..DIMENSION {
        let text = if grid.is_blank(row, col) {
            "   ".to_string()
        } else {
            format!(" {} ", grid.get(row, col))
        };
        let cell = if (row / REGION_DIM + col / REGION_DIM) % 2 == 0 {
            text.black().on_bright_white()
        } else {
            text.black().on_white()
        };
        line.push_str(&cell.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "5 3 0 0 7 0 0 0 0
6 0 0 1 9 5 0 0 0
0 9 8 0 0 0 0 6 0
8 0 0 0 6 0 0 0 3
4 0 0 8 0 3 0 0 1
7 0 0 0 2 0 0 0 6
0 6 0 0 0 0 2 8 0
0 0 0 4 1 9 0 0 5
0 0 0 0 8 0 0 7 9";

    #[test]
    fn side_by_side_labels_both_panels() {
        colored::control::set_override(false);
        let clue = Grid::from_text(SAMPLE).unwrap();
        let out = side_by_side(&clue, &clue);
        assert!(out.contains("Clue"));
        assert!(out.contains("Solution"));
        assert_eq!(out.lines().count(), DIMENSION + 1);
    }

    #[test]
    fn side_by_side_renders_blanks_empty() {
        colored::control::set_override(false);
        let clue = Grid::from_text(SAMPLE).unwrap();
        let out = side_by_side(&clue, &clue);
        assert!(!out.contains('0'));
    }
}
