//! Winning line detection for the 3x3 board

use crate::board::{Cell, Mark};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the first completed line, returning the winning mark and its cells
///
/// Used both for outcome evaluation and for highlighting the winning cells
/// in the console renderer.
pub fn winning_line(cells: &[Cell; 9]) -> Option<(Mark, [usize; 3])> {
    for line in WINNING_LINES {
        if let Some(mark) = cells[line[0]].to_mark()
            && line.iter().all(|&idx| cells[idx] == mark.to_cell())
        {
            return Some((mark, line));
        }
    }
    None
}

/// Check if a mark has three in a row
pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark.to_cell()))
}
