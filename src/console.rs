//! Console rendering and coordinate input parsing

use std::io::{self, Write};

use crate::{
    Error, Result,
    board::{Cell, GameResult, Move},
    game::Game,
    lines,
};

/// Parse a console coordinate like `A1` or `1A` into a move
///
/// The column is a letter A-C and the row a digit 1-3, in either order,
/// case-insensitive.
pub fn parse_coordinate(input: &str) -> Result<Move> {
    let parse_error = || Error::ParseCoordinate {
        input: input.to_string(),
    };

    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 2 {
        return Err(parse_error());
    }

    let (col_char, row_char) = if chars[0].is_ascii_alphabetic() {
        (chars[0], chars[1])
    } else {
        (chars[1], chars[0])
    };

    let col = match col_char.to_ascii_uppercase() {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        _ => return Err(parse_error()),
    };
    let row = match row_char {
        '1' => 0,
        '2' => 1,
        '3' => 2,
        _ => return Err(parse_error()),
    };

    Ok(Move::new(row, col))
}

/// Render the board with column and row labels
///
/// When the game has a winner the three winning cells blink, and a result
/// line is appended for finished games.
pub fn render(game: &Game) -> String {
    let board = game.board();
    let mut cells: Vec<String> = board
        .cells
        .iter()
        .map(|&cell| match cell {
            Cell::Empty => " ".to_string(),
            occupied => occupied.to_char().to_string(),
        })
        .collect();

    if let Some((_, line)) = lines::winning_line(&board.cells) {
        for index in line {
            cells[index] = blink(&cells[index]);
        }
    }

    let mut out = format!(
        "     A   B   C
   ------------
1 \u{2506}  {} \u{2502} {} \u{2502} {}
  \u{2506} \u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}
2 \u{2506}  {} \u{2502} {} \u{2502} {}
  \u{2506} \u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}
3 \u{2506}  {} \u{2502} {} \u{2502} {}
",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6], cells[7], cells[8],
    );

    match game.result() {
        GameResult::Win(mark) => out.push_str(&format!("\n{mark} wins!\n")),
        GameResult::Draw => out.push_str("\nNo one wins this time.\n"),
        GameResult::InProgress => {}
    }

    out
}

/// Reset the terminal before redrawing
pub fn clear_screen() {
    print!("\x1bc");
    let _ = io::stdout().flush();
}

fn blink(text: &str) -> String {
    format!("\x1b[5m{text}\x1b[0m")
}
