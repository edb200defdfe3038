//! Board representation and core game-state operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, lines};

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// The symbol a player places: X or O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A (row, column) coordinate on the board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / 3,
            col: index % 3,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome classification of a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win(Mark),
    Draw,
    InProgress,
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it is only 10 bytes, and new states are
/// produced by value rather than mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
    pub to_move: Mark,
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            to_move: Mark::X,
        }
    }

    /// Get the cell at a (row, col) coordinate
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * 3 + col]
    }

    /// All empty cells in row-major order
    ///
    /// The ordering is deterministic so strategies that break ties on
    /// enumeration order are reproducible. The list is not filtered on
    /// terminal positions: its length plus the occupied count is always 9.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// Count the number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Apply a move for `mark` and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates fall outside the board, the target
    /// cell is occupied, or `mark` is not the mark to move.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move, mark: Mark) -> crate::Result<Board> {
        if mv.row > 2 || mv.col > 2 {
            return Err(Error::OutOfRange {
                row: mv.row,
                col: mv.col,
            });
        }
        if mark != self.to_move {
            return Err(Error::OutOfTurn { mark });
        }
        if self.cells[mv.index()] != Cell::Empty {
            return Err(Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = mark.to_cell();
        next.to_move = mark.opponent();
        Ok(next)
    }

    /// Classify the position by scanning the 8 winning lines
    ///
    /// Pure function of the cells: calling it repeatedly on the same board
    /// yields the same result.
    pub fn evaluate(&self) -> GameResult {
        if let Some((mark, _)) = lines::winning_line(&self.cells) {
            return GameResult::Win(mark);
        }
        if self.cells.contains(&Cell::Empty) {
            GameResult::InProgress
        } else {
            GameResult::Draw
        }
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        match self.evaluate() {
            GameResult::Win(mark) => Some(mark),
            _ => None,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.evaluate() != GameResult::InProgress
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a board from 9 cell characters (`X`, `O`, `.`), whitespace
    /// ignored. The mark to move is inferred from the piece counts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength { got: chars.len() });
        }

        let mut cells = [Cell::Empty; 9];
        for (position, &character) in chars.iter().enumerate() {
            cells[position] = Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                character,
                position,
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        let to_move = if x_count == o_count {
            Mark::X
        } else if x_count == o_count + 1 {
            Mark::O
        } else {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        };

        if lines::has_won(&cells, Mark::X) && lines::has_won(&cells, Mark::O) {
            return Err(Error::ConflictingWinners);
        }

        Ok(Board { cells, to_move })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.get(row, col).to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.to_move, Mark::X);
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.evaluate(), GameResult::InProgress);
    }

    #[test]
    fn test_apply_alternates_turns() {
        let board = Board::new();
        let board = board.apply(Move::new(1, 1), Mark::X).unwrap();
        assert_eq!(board.get(1, 1), Cell::X);
        assert_eq!(board.to_move, Mark::O);

        let board = board.apply(Move::new(0, 0), Mark::O).unwrap();
        assert_eq!(board.get(0, 0), Cell::O);
        assert_eq!(board.to_move, Mark::X);
    }

    #[test]
    fn test_apply_occupied_cell() {
        let board = Board::new().apply(Move::new(1, 1), Mark::X).unwrap();
        let result = board.apply(Move::new(1, 1), Mark::O);
        assert!(matches!(
            result,
            Err(Error::CellOccupied { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_apply_out_of_range() {
        let board = Board::new();
        let result = board.apply(Move::new(3, 0), Mark::X);
        assert!(matches!(result, Err(Error::OutOfRange { row: 3, col: 0 })));

        let result = board.apply(Move::new(0, 7), Mark::X);
        assert!(matches!(result, Err(Error::OutOfRange { row: 0, col: 7 })));
    }

    #[test]
    fn test_apply_out_of_turn() {
        let board = Board::new();
        let result = board.apply(Move::new(0, 0), Mark::O);
        assert!(matches!(result, Err(Error::OutOfTurn { mark: Mark::O })));
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::new();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[8], Move::new(2, 2));

        let board = board.apply(Move::new(0, 0), Mark::X).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Move::new(0, 1));
    }

    #[test]
    fn test_legal_moves_plus_occupied_is_nine() {
        let mut board = Board::new();
        let script = [
            Move::new(0, 0),
            Move::new(1, 1),
            Move::new(2, 2),
            Move::new(0, 1),
        ];
        for mv in script {
            assert_eq!(board.legal_moves().len() + board.occupied_count(), 9);
            board = board.apply(mv, board.to_move).unwrap();
        }
        assert_eq!(board.legal_moves().len() + board.occupied_count(), 9);
    }

    #[test]
    fn test_top_row_win() {
        // X plays (0,0), (0,1), (0,2); O plays (1,1), (2,2)
        let mut board = Board::new();
        board = board.apply(Move::new(0, 0), Mark::X).unwrap();
        board = board.apply(Move::new(1, 1), Mark::O).unwrap();
        board = board.apply(Move::new(0, 1), Mark::X).unwrap();
        board = board.apply(Move::new(2, 2), Mark::O).unwrap();
        board = board.apply(Move::new(0, 2), Mark::X).unwrap();

        assert_eq!(board.evaluate(), GameResult::Win(Mark::X));
        assert_eq!(board.winner(), Some(Mark::X));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_column_win_for_o() {
        let mut board = Board::new();
        board = board.apply(Move::new(0, 0), Mark::X).unwrap();
        board = board.apply(Move::new(0, 1), Mark::O).unwrap();
        board = board.apply(Move::new(0, 2), Mark::X).unwrap();
        board = board.apply(Move::new(1, 1), Mark::O).unwrap();
        board = board.apply(Move::new(1, 2), Mark::X).unwrap();
        board = board.apply(Move::new(2, 1), Mark::O).unwrap();

        assert_eq!(board.evaluate(), GameResult::Win(Mark::O));
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = Board::new();
        board = board.apply(Move::new(0, 0), Mark::X).unwrap();
        board = board.apply(Move::new(0, 1), Mark::O).unwrap();
        board = board.apply(Move::new(1, 1), Mark::X).unwrap();
        board = board.apply(Move::new(0, 2), Mark::O).unwrap();
        board = board.apply(Move::new(2, 2), Mark::X).unwrap();

        assert_eq!(board.evaluate(), GameResult::Win(Mark::X));
    }

    #[test]
    fn test_full_board_draw() {
        // XOX / XOX / OXO has no three in a row
        let board: Board = "XOX XOX OXO".parse().unwrap();
        assert_eq!(board.evaluate(), GameResult::Draw);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "XOX.O.X..".parse().unwrap();
        assert_eq!(board.evaluate(), board.evaluate());
    }

    #[test]
    fn test_from_str_infers_turn() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.to_move, Mark::O);

        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.to_move, Mark::X);
    }

    #[test]
    fn test_from_str_rejects_bad_length() {
        let result = "XO".parse::<Board>();
        assert!(matches!(result, Err(Error::InvalidBoardLength { got: 2 })));
    }

    #[test]
    fn test_from_str_rejects_bad_character() {
        let result = "XOZ......".parse::<Board>();
        assert!(matches!(
            result,
            Err(Error::InvalidCellCharacter {
                character: 'Z',
                position: 2
            })
        ));
    }

    #[test]
    fn test_from_str_rejects_bad_counts() {
        let result = "XXX......".parse::<Board>();
        assert!(matches!(
            result,
            Err(Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            })
        ));

        let result = "O........".parse::<Board>();
        assert!(matches!(result, Err(Error::InvalidPieceCounts { .. })));
    }

    #[test]
    fn test_from_str_rejects_double_winner() {
        let result = "XXXOOO...".parse::<Board>();
        assert!(matches!(result, Err(Error::ConflictingWinners)));
    }

    #[test]
    fn test_display_roundtrip() {
        let board: Board = "XOX.O.X..".parse().unwrap();
        let shown = board.to_string();
        let reparsed: Board = shown.parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_move_index_roundtrip() {
        for index in 0..9 {
            assert_eq!(Move::from_index(index).index(), index);
        }
        assert_eq!(Move::new(1, 2).index(), 5);
    }
}
