pub mod display;
mod grid;
mod solver;

pub use grid::{Grid, BLANK, DIMENSION, REGION_DIM};
pub use solver::{solve_puzzle, Solver};
