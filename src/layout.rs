use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Columns per training day. Each day's block starts at `BLOCK_WIDTH * day` and holds
/// exercise name, current weight, rep scheme and one unused column.
pub const BLOCK_WIDTH: usize = 4;

/// What a column inside a day block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Name,
    Weight,
    RepScheme,
    Reserved,
}

impl ColumnRole {
    /// Offset of the role within its block.
    pub const fn offset(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Weight => 1,
            Self::RepScheme => 2,
            Self::Reserved => 3,
        }
    }
}

/// How the number of days is derived from the column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayCountPolicy {
    /// `cols / 4`; a trailing partial block is dropped.
    #[default]
    Floor,
    /// `cols / 4 + 1`; the extra day reads whichever of its columns exist.
    FloorPlusOne,
}

impl DayCountPolicy {
    pub fn day_count(self, cols: usize) -> usize {
        match self {
            Self::Floor => cols / BLOCK_WIDTH,
            Self::FloorPlusOne => cols / BLOCK_WIDTH + 1,
        }
    }
}

/// Absolute column index of `role` for `day`.
pub fn column_index(day: usize, role: ColumnRole) -> usize {
    day * BLOCK_WIDTH + role.offset()
}

/// Walks one role column of one day block, yielding `(row, cell)` in row order.
/// Yields nothing when the column lies beyond the grid.
pub fn column<'a>(
    grid: &'a Grid,
    day: usize,
    role: ColumnRole,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let col = column_index(day, role);
    let rows = if col < grid.cols { grid.rows } else { 0 };
    (0..rows).filter_map(move |row| grid.get_cell(row, col).map(|cell| (row, cell)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_count_policies() {
        assert_eq!(DayCountPolicy::Floor.day_count(8), 2);
        assert_eq!(DayCountPolicy::Floor.day_count(7), 1);
        assert_eq!(DayCountPolicy::Floor.day_count(3), 0);
        assert_eq!(DayCountPolicy::FloorPlusOne.day_count(8), 3);
        assert_eq!(DayCountPolicy::FloorPlusOne.day_count(7), 2);
        assert_eq!(DayCountPolicy::FloorPlusOne.day_count(0), 1);
    }

    #[test]
    fn roles_map_to_block_offsets() {
        assert_eq!(column_index(0, ColumnRole::Name), 0);
        assert_eq!(column_index(1, ColumnRole::Weight), 5);
        assert_eq!(column_index(1, ColumnRole::RepScheme), 6);
        assert_eq!(column_index(2, ColumnRole::Reserved), 11);
    }

    #[test]
    fn column_walks_every_row() {
        let grid = Grid::from_rows(vec![
            vec!["Squat", "100", "5x5-5", "", "Row", "60", "4x8-12", ""],
            vec!["Bench", "80", "3x8-10", "", "", "", "", ""],
        ]);
        let names: Vec<_> = column(&grid, 1, ColumnRole::Name).collect();
        assert_eq!(names, vec![(0, "Row"), (1, "")]);
        let reps: Vec<_> = column(&grid, 0, ColumnRole::RepScheme).map(|(_, c)| c).collect();
        assert_eq!(reps, vec!["5x5-5", "3x8-10"]);
    }

    #[test]
    fn column_beyond_grid_is_empty() {
        let grid = Grid::from_rows(vec![vec!["a", "b", "c", "d", "e"]]);
        assert_eq!(column(&grid, 1, ColumnRole::Name).count(), 1);
        assert_eq!(column(&grid, 1, ColumnRole::Weight).count(), 0);
        assert_eq!(column(&grid, 5, ColumnRole::Name).count(), 0);
    }
}
