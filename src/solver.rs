use crate::grid::{Grid, BLANK, DIMENSION, REGION_DIM};
use itertools::Itertools;
use log::debug;

/// Backtracking solver holding the immutable clue grid and the working
/// grid that is mutated during search.
pub struct Solver {
    clue: Grid,
    solution: Grid,
}

impl Solver {
    pub fn new(clue: Grid) -> Self {
        let solution = clue.clone();
        Self { clue, solution }
    }

    pub fn clue(&self) -> &Grid {
        &self.clue
    }

    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Starting at `(row, col)`, fills every blank cell from there on in
    /// row-major order. Returns true iff a full consistent completion
    /// exists; on false, every cell this call assigned is blank again.
    pub fn solve(&mut self, row: usize, col: usize) -> bool {
        // All 81 cells scanned.
        if row > DIMENSION - 1 {
            return true;
        }

        let (next_row, next_col) = if col >= DIMENSION - 1 {
            (row + 1, 0)
        } else {
            (row, col + 1)
        };

        // Clue cells are never re-assigned.
        if !self.solution.is_blank(row, col) {
            return self.solve(next_row, next_col);
        }

        for candidate in 1..=DIMENSION as u8 {
            if self.can_place(row, col, candidate) {
                self.solution.set(row, col, candidate);
                if self.solve(next_row, next_col) {
                    return true;
                }
            }
        }

        self.solution.set(row, col, BLANK);
        false
    }

    /// True iff `value` appears anywhere in the given row of the working grid.
    pub fn row_has_value(&self, row: usize, value: u8) -> bool {
        (0..DIMENSION).any(|j| self.solution.get(row, j) == value)
    }

    /// True iff `value` appears anywhere in the given column of the working grid.
    pub fn col_has_value(&self, col: usize, value: u8) -> bool {
        (0..DIMENSION).any(|i| self.solution.get(i, col) == value)
    }

    /// True iff `value` appears anywhere in the 3x3 region containing `(row, col)`.
    pub fn region_has_value(&self, row: usize, col: usize, value: u8) -> bool {
        let r = row - row % REGION_DIM;
        let c = col - col % REGION_DIM;
        (r..r + REGION_DIM)
            .cartesian_product(c..c + REGION_DIM)
            .any(|(i, j)| self.solution.get(i, j) == value)
    }

    /// True iff placing `value` at `(row, col)` conflicts with no row,
    /// column, or region of the current working grid.
    pub fn can_place(&self, row: usize, col: usize, value: u8) -> bool {
        !self.row_has_value(row, value)
            && !self.col_has_value(col, value)
            && !self.region_has_value(row, col, value)
    }
}

/// Solves a puzzle from its clue grid, returning the solution grid.
pub fn solve_puzzle(clue: Grid) -> Result<Grid, String> {
    let mut solver = Solver::new(clue);
    debug!("Starting search");
    if solver.solve(0, 0) {
        debug!("Search succeeded");
        Ok(solver.solution().clone())
    } else {
        debug!("Search exhausted all candidates");
        Err("No solution is possible.".to_string())
    }
}
