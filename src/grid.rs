use colored::Colorize;
use std::{fs, path::Path};

/// Overall size of the grid.
pub const DIMENSION: usize = 9;
/// Size of a 3x3 sub region.
pub const REGION_DIM: usize = 3;
/// Sentinel for a blank cell.
pub const BLANK: u8 = 0;

/// A 9x9 board of digits in `[0,9]`, `0` meaning blank.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: [[u8; DIMENSION]; DIMENSION],
}

impl Grid {
    /// Builds an all-blank grid.
    pub fn blank() -> Self {
        Self {
            cells: [[BLANK; DIMENSION]; DIMENSION],
        }
    }

    /// Parses 81 whitespace-separated integers in row-major order.
    pub fn from_text(text: &str) -> Result<Self, String> {
        let values = text
            .split_whitespace()
            .map(|token| {
                let value: u8 = token
                    .parse()
                    .map_err(|_| format!("Invalid token: {token}"))?;
                if value > 9 {
                    Err(format!("Value out of range: {value}"))
                } else {
                    Ok(value)
                }
            })
            .collect::<Result<Vec<_>, String>>()?;

        if values.len() != DIMENSION * DIMENSION {
            return Err(format!(
                "Expected {} values, found {}",
                DIMENSION * DIMENSION,
                values.len()
            ));
        }

        let mut cells = [[BLANK; DIMENSION]; DIMENSION];
        for (k, value) in values.into_iter().enumerate() {
            cells[k / DIMENSION][k % DIMENSION] = value;
        }
        Ok(Self { cells })
    }

    /// Reads a puzzle file and parses it with [`Grid::from_text`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| format!("Couldn't open {}: {err}", path.display()))?;
        Self::from_text(&text)
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row][col] = value;
    }

    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == BLANK
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut line = String::new();
        let horizontal_line = " ----------------- ";
        for (i, row) in self.cells.iter().enumerate() {
            if i % REGION_DIM == 0 {
                writeln!(f, "{}", horizontal_line)?;
            }
            for (j, &x) in row.iter().enumerate() {
                line.push(if j % REGION_DIM == 0 { '|' } else { ' ' });
                if x == BLANK {
                    line.push_str(&" ".on_blue().to_string());
                } else {
                    line.push_str(&format!("{x}"));
                }
            }
            writeln!(f, "{line}|")?;
            line.clear();
        }
        writeln!(f, "{}", horizontal_line)
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
    fn create_grid_from_text_works() {
        let grid = Grid::from_text(SAMPLE).unwrap();
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(1, 3), 1);
        assert_eq!(grid.get(8, 8), 9);
        assert!(grid.is_blank(0, 2));
        println!("{grid}");
    }

    #[test]
    fn create_grid_from_text_fails_on_bad_token() {
        let text = SAMPLE.replacen('5', "x", 1);
        let err = Grid::from_text(&text).unwrap_err();
        assert!(err.contains("Invalid token"));
    }

    #[test]
    fn create_grid_from_text_fails_on_out_of_range_value() {
        let text = SAMPLE.replacen('5', "12", 1);
        let err = Grid::from_text(&text).unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn create_grid_from_text_fails_on_wrong_count() {
        let err = Grid::from_text("1 2 3").unwrap_err();
        assert!(err.contains("Expected 81 values"));
    }

    #[test]
    fn set_and_get_work() {
        let mut grid = Grid::blank();
        assert!(grid.is_blank(4, 4));
        grid.set(4, 4, 7);
        assert_eq!(grid.get(4, 4), 7);
        grid.set(4, 4, BLANK);
        assert!(grid.is_blank(4, 4));
    }
}
