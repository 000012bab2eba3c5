use crate::grid::Grid;
use calamine::{open_workbook_auto, Data, Range, Reader};
use log::info;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("workbook not found: {0}")]
    FileNotFound(String),

    #[error("cannot open workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("sheet '{name}' not found")]
    SheetNotFound { name: String },

    #[error("cannot read sheet '{name}': {source}")]
    Sheet {
        name: String,
        #[source]
        source: calamine::Error,
    },
}

/// Reads one sheet of a workbook into a [`Grid`] anchored at A1.
///
/// `sheet` selects a sheet by name; `None` picks the first one.
pub fn load_grid<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound {
                name: wanted.to_string(),
            })?,
        None => sheet_names.first().cloned().ok_or(LoadError::NoSheets)?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|source| LoadError::Sheet {
            name: name.clone(),
            source,
        })?;

    let grid = range_to_grid(&range);
    info!(
        "loaded sheet '{}' from {}: {} row(s) x {} col(s)",
        name,
        path.display(),
        grid.rows,
        grid.cols
    );
    Ok(grid)
}

/// Materialises a used range from A1 to its last used cell. Cells outside the
/// used range, or empty ones, become empty strings.
pub fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((last_row, last_col)) = range.end() else {
        return Grid::default();
    };
    let mut grid = Grid::new(last_row as usize + 1, last_col as usize + 1);
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if let Some(value) = range.get_value((row as u32, col as u32)) {
                grid.set_cell(row, col, value.to_string());
            }
        }
    }
    grid
}
