use colored::Colorize;
use log::debug;
use std::{env, process};
use sudoku_backtrack::{display, solve_puzzle, Grid};

fn main() {
    env_logger::init();
    let path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("{}", "Usage: sudoku-backtrack <puzzle-file>".red());
        process::exit(1);
    });
    let clue = match Grid::from_path(&path) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}", err.red());
            process::exit(1);
        }
    };
    debug!("Loaded puzzle from {path}");
    println!("Input:\n{clue}");
    match solve_puzzle(clue.clone()) {
        Ok(solution) => {
            println!("{}", display::side_by_side(&clue, &solution));
        }
        Err(err) => {
            println!("{}", err.red());
            process::exit(2);
        }
    }
}
