//! Hoppers puzzle: frogs on lily pads jump over green frogs, removing
//! them, until only the red frog remains.
//!
//! Every pad allows diagonal jumps; pads on an even row and even column
//! additionally allow horizontal and vertical jumps across the
//! intervening water cell.

use std::fmt;

use crate::board::{parse_grid, ParseError};
use crate::search::Configuration;

/// One cell of the pond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unusable water, `*` in board files.
    Water,
    /// An empty lily pad, `.`.
    Lilypad,
    /// A green frog, `G`. Green frogs are the ones jumped over and
    /// removed.
    GreenFrog,
    /// The red frog, `R`. It jumps but is never removed.
    RedFrog,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Cell::Water),
            '.' => Some(Cell::Lilypad),
            'G' => Some(Cell::GreenFrog),
            'R' => Some(Cell::RedFrog),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Water => '*',
            Cell::Lilypad => '.',
            Cell::GreenFrog => 'G',
            Cell::RedFrog => 'R',
        }
    }

    fn is_frog(self) -> bool {
        matches!(self, Cell::GreenFrog | Cell::RedFrog)
    }
}

const DIAGONAL_DELTAS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ORTHOGONAL_DELTAS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// One board state of the Hoppers puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoppersConfig {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Cell>>,
    green_remaining: usize,
}

impl HoppersConfig {
    /// Parse a board from its text form: a `rows cols` header, then one
    /// line per row of `*`, `.`, `G` and `R` cells.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (rows, cols, grid) = parse_grid(input, |token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Cell::from_char(c),
                _ => None,
            }
        })?;
        let green_remaining = grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::GreenFrog)
            .count();
        Ok(Self {
            rows,
            cols,
            grid,
            green_remaining,
        })
    }

    /// Green frogs still on the board.
    pub fn green_remaining(&self) -> usize {
        self.green_remaining
    }

    /// The cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    fn in_bounds(&self, (row, col): (isize, isize)) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Attempt a jump from `from` over `over` onto `to`. `None` unless
    /// the three cells hold a frog, a green frog, and an empty pad, in
    /// that order.
    fn jump(&self, from: (usize, usize), over: (isize, isize), to: (isize, isize)) -> Option<Self> {
        let frog = self.grid[from.0][from.1];
        if !frog.is_frog() {
            return None;
        }
        let over = self.in_bounds(over)?;
        let to = self.in_bounds(to)?;
        if self.grid[over.0][over.1] != Cell::GreenFrog || self.grid[to.0][to.1] != Cell::Lilypad {
            return None;
        }

        let mut next = self.clone();
        next.grid[to.0][to.1] = frog;
        next.grid[over.0][over.1] = Cell::Lilypad;
        next.grid[from.0][from.1] = Cell::Lilypad;
        next.green_remaining -= 1;
        Some(next)
    }
}

impl Configuration for HoppersConfig {
    fn is_goal(&self) -> bool {
        self.green_remaining == 0
    }

    fn neighbors(&self) -> Vec<Self> {
        let mut neighbors = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let from = (row, col);
                let (r, c) = (row as isize, col as isize);
                for &(dr, dc) in &DIAGONAL_DELTAS {
                    neighbors.extend(self.jump(from, (r + dr, c + dc), (r + 2 * dr, c + 2 * dc)));
                }
                // Straight jumps exist only between even-even pads; the
                // odd-odd cells between them are water.
                if row % 2 == 0 && col % 2 == 0 {
                    for &(dr, dc) in &ORTHOGONAL_DELTAS {
                        neighbors.extend(self.jump(
                            from,
                            (r + 2 * dr, c + 2 * dc),
                            (r + 4 * dr, c + 4 * dc),
                        ));
                    }
                }
            }
        }
        neighbors
    }
}

impl fmt::Display for HoppersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Solver;

    fn board(input: &str) -> HoppersConfig {
        HoppersConfig::parse(input).unwrap()
    }

    #[test]
    fn test_parse_counts_green_frogs() {
        let config = board("2 2\nR G\nG .\n");

        assert_eq!(config.green_remaining(), 2);
        assert_eq!(config.cell_at(0, 0), Cell::RedFrog);
        assert_eq!(config.cell_at(1, 1), Cell::Lilypad);
    }

    #[test]
    fn test_parse_rejects_unknown_cell() {
        assert!(HoppersConfig::parse("1 1\nX\n").is_err());
    }

    #[test]
    fn test_diagonal_jump_removes_the_green_frog() {
        let config = board("3 3\nR * *\n* G *\n* * .\n");
        let neighbors = config.neighbors();

        assert_eq!(neighbors.len(), 1);
        let jumped = &neighbors[0];
        assert_eq!(jumped.cell_at(0, 0), Cell::Lilypad);
        assert_eq!(jumped.cell_at(1, 1), Cell::Lilypad);
        assert_eq!(jumped.cell_at(2, 2), Cell::RedFrog);
        assert_eq!(jumped.green_remaining(), 0);
    }

    #[test]
    fn test_straight_jump_from_even_even_pad() {
        let start = board("1 5\nR * G * .\n");
        let solution = Solver::new(start).solve();

        assert!(solution.is_solved());
        assert_eq!(solution.moves(), Some(1));
    }

    #[test]
    fn test_no_straight_jump_from_odd_column() {
        // Same alignment shifted off the even lattice: no legal move.
        let config = board("1 6\n* R * G * .\n");

        assert!(config.neighbors().is_empty());
    }

    #[test]
    fn test_red_frog_cannot_be_jumped() {
        let config = board("3 3\nG * *\n* R *\n* * .\n");

        assert!(config.neighbors().is_empty());
    }

    #[test]
    fn test_green_frogs_may_jump_too() {
        let config = board("3 3\nG * *\n* G *\n* * .\n");
        let neighbors = config.neighbors();

        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].green_remaining(), 1);
        assert_eq!(neighbors[0].cell_at(2, 2), Cell::GreenFrog);
    }

    #[test]
    fn test_two_jump_solve() {
        // Red clears both frogs with two diagonal jumps down the main
        // diagonal.
        let start = board("5 5\nR * * * *\n* G * * *\n* * . * *\n* * * G *\n* * * * .\n");
        let solution = Solver::new(start).solve();

        assert!(solution.is_solved());
        assert_eq!(solution.moves(), Some(2));
        assert!(solution.path.last().is_some_and(|c| c.green_remaining() == 0));
    }

    #[test]
    fn test_stranded_green_frog_is_unsolvable() {
        // No pad within jumping range of anything.
        let start = board("2 2\nR .\nG *\n");
        let solution = Solver::new(start).solve();

        assert!(!solution.is_solved());
        assert!(solution.path.is_empty());
    }
}
