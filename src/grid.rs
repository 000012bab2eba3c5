/// A fully materialised matrix of text cells, `rows` x `cols`, row-major.
///
/// Blank or unreadable source cells are stored as empty strings, never as absence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<String>,
}

impl Grid {
    /// Create a grid of empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![String::new(); rows * cols],
        }
    }

    /// Build a grid from row vectors. The column count is the longest row;
    /// shorter rows are padded with empty cells.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                let idx = grid.index(r, c);
                grid.cells[idx] = value;
            }
        }
        grid
    }

    /// Compute the flat index given (row, col).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the text of a cell, or `None` outside the declared bounds.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&str> {
        if row < self.rows && col < self.cols {
            self.cells.get(self.index(row, col)).map(String::as_str)
        } else {
            None
        }
    }

    /// Set the text of a cell. Out-of-range positions are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = value.into();
        }
    }
}

/// Convert a zero–based column index to its letter label (e.g., 0 → "A", 26 → "AA").
pub fn col_to_letter(mut col: usize) -> String {
    let mut letters = Vec::new();
    col += 1; // shift to one–based index
    while col > 0 {
        col -= 1;
        letters.push((b'A' + (col % 26) as u8) as char);
        col /= 26;
    }
    letters.iter().rev().collect()
}

/// A1-style name of a zero-based (row, col) position.
pub fn cell_name(row: usize, col: usize) -> String {
    format!("{}{}", col_to_letter(col), row + 1)
}
