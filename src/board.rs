//! Shared text format for grid-based puzzle boards.
//!
//! A board file is a dimension header line `rows cols` followed by one
//! whitespace-separated line of cell tokens per row. Each puzzle maps
//! the tokens to its own cell type.

/// Errors reading a board from its text form.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing dimension header")]
    MissingHeader,

    #[error("invalid dimension header {0:?}")]
    InvalidHeader(String),

    #[error("expected {expected} rows, found {found}")]
    MissingRow { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unrecognized cell {token:?} in row {row}")]
    UnknownCell { token: String, row: usize },
}

/// Parse the common board format, mapping each cell token through
/// `cell`. Returns `(rows, cols, grid)` with the grid in row-major
/// order.
pub fn parse_grid<T>(
    input: &str,
    cell: impl Fn(&str) -> Option<T>,
) -> Result<(usize, usize, Vec<Vec<T>>), ParseError> {
    let mut lines = input.lines();
    let header = lines.next().ok_or(ParseError::MissingHeader)?;

    let mut dims = header.split_whitespace();
    let (rows, cols) = match (
        dims.next().and_then(|d| d.parse::<usize>().ok()),
        dims.next().and_then(|d| d.parse::<usize>().ok()),
    ) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => return Err(ParseError::InvalidHeader(header.to_string())),
    };

    let mut grid = Vec::with_capacity(rows);
    for row in 0..rows {
        let line = lines.next().ok_or(ParseError::MissingRow {
            expected: rows,
            found: row,
        })?;
        let mut cells = Vec::with_capacity(cols);
        for token in line.split_whitespace() {
            match cell(token) {
                Some(value) => cells.push(value),
                None => {
                    return Err(ParseError::UnknownCell {
                        token: token.to_string(),
                        row,
                    })
                }
            }
        }
        if cells.len() != cols {
            return Err(ParseError::RowWidth {
                row,
                found: cells.len(),
                expected: cols,
            });
        }
        grid.push(cells);
    }

    Ok((rows, cols, grid))
}
