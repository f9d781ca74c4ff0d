//! Chess capture puzzle: every move is a capture by normal chess
//! geometry, and the puzzle is solved when a single piece remains.

use std::fmt;

use smallvec::SmallVec;

use crate::board::{parse_grid, ParseError};
use crate::search::Configuration;

/// A chess piece, identified by its standard letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    King,
    Queen,
    Knight,
    Bishop,
    Rook,
    Pawn,
}

impl Piece {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(Piece::King),
            'Q' => Some(Piece::Queen),
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'P' => Some(Piece::Pawn),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Piece::King => 'K',
            Piece::Queen => 'Q',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Pawn => 'P',
        }
    }
}

const KING_DELTAS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
];

/// Pawns capture toward decreasing row indices.
const PAWN_DELTAS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];

const DIAGONAL_DELTAS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ORTHOGONAL_DELTAS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// One board state of the capture puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChessConfig {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Option<Piece>>>,
}

impl ChessConfig {
    /// Parse a board from its text form: a `rows cols` header, then one
    /// line per row with `.` for empty cells and piece letters
    /// otherwise.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (rows, cols, grid) = parse_grid(input, |token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some('.'), None) => Some(None),
                (Some(c), None) => Piece::from_char(c).map(Some),
                _ => None,
            }
        })?;
        Ok(Self { rows, cols, grid })
    }

    /// Number of pieces still on the board.
    pub fn piece_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// The piece at `(row, col)`, if any.
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.grid[row][col]
    }

    /// Attempt a capture from one square onto another. `None` when the
    /// target lies off the board or holds no piece.
    fn capture(&self, from: (usize, usize), to: (isize, isize)) -> Option<Self> {
        let row = usize::try_from(to.0).ok()?;
        let col = usize::try_from(to.1).ok()?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.grid[row][col]?;

        let mut next = self.clone();
        let mover = next.grid[from.0][from.1].take();
        next.grid[row][col] = mover;
        Some(next)
    }

    /// Captures for a piece that steps directly to each offset.
    fn step_captures(&self, from: (usize, usize), deltas: &[(isize, isize)]) -> SmallVec<[Self; 8]> {
        deltas
            .iter()
            .filter_map(|&(dr, dc)| {
                self.capture(from, (from.0 as isize + dr, from.1 as isize + dc))
            })
            .collect()
    }

    /// Captures for a sliding piece: walk each direction and take the
    /// first occupied square, never passing it.
    fn slide_captures(
        &self,
        from: (usize, usize),
        deltas: &[(isize, isize)],
    ) -> SmallVec<[Self; 8]> {
        let mut captures = SmallVec::new();
        for &(dr, dc) in deltas {
            let mut row = from.0 as isize + dr;
            let mut col = from.1 as isize + dc;
            while row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols {
                if let Some(next) = self.capture(from, (row, col)) {
                    captures.push(next);
                    break;
                }
                row += dr;
                col += dc;
            }
        }
        captures
    }
}

impl Configuration for ChessConfig {
    fn is_goal(&self) -> bool {
        self.piece_count() == 1
    }

    fn neighbors(&self) -> Vec<Self> {
        let mut neighbors = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let Some(piece) = self.grid[row][col] else {
                    continue;
                };
                let from = (row, col);
                let captures = match piece {
                    Piece::King => self.step_captures(from, &KING_DELTAS),
                    Piece::Knight => self.step_captures(from, &KNIGHT_DELTAS),
                    Piece::Pawn => self.step_captures(from, &PAWN_DELTAS),
                    Piece::Bishop => self.slide_captures(from, &DIAGONAL_DELTAS),
                    Piece::Rook => self.slide_captures(from, &ORTHOGONAL_DELTAS),
                    Piece::Queen => {
                        let mut captures = self.slide_captures(from, &DIAGONAL_DELTAS);
                        captures.extend(self.slide_captures(from, &ORTHOGONAL_DELTAS));
                        captures
                    }
                };
                neighbors.extend(captures);
            }
        }
        neighbors
    }
}

impl fmt::Display for ChessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.cols {
            write!(f, " {col}")?;
        }
        write!(f, "\n   {}", "-".repeat(self.cols * 2))?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "\n{row}|")?;
            for cell in cells {
                write!(f, " {}", cell.map_or('.', Piece::to_char))?;
            }
        }
        Ok(())
    }
}
