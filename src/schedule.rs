use crate::grid::{cell_name, Grid};
use crate::layout::{column, column_index, ColumnRole, DayCountPolicy};
use crate::parser::{CellError, Parser, RepScheme};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeOptions {
    pub day_count: DayCountPolicy,
    /// Treat `min_reps > max_reps` as a parse failure.
    pub reject_inverted_ranges: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Zero-based grid row the exercise was read from.
    pub row: usize,
    pub name: String,
    pub rep_scheme: Option<RepScheme>,
    pub current_weight: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingDay {
    /// Zero-based, in block order.
    pub index: usize,
    pub exercises: Vec<Exercise>,
}

impl TrainingDay {
    /// Exercise names in row order, verbatim, including blanks.
    pub fn names(&self) -> Vec<&str> {
        self.exercises.iter().map(|e| e.name.as_str()).collect()
    }

    /// Parsed rep schemes in row order; rows that failed are omitted.
    pub fn rep_schemes(&self) -> Vec<RepScheme> {
        self.exercises.iter().filter_map(|e| e.rep_scheme).collect()
    }

    /// Parsed weights in row order; rows that failed are omitted.
    pub fn weights(&self) -> Vec<f32> {
        self.exercises.iter().filter_map(|e| e.current_weight).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.exercises
            .iter()
            .all(|e| e.rep_scheme.is_some() && e.current_weight.is_some())
    }
}

/// A cell dropped during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellIssue {
    pub day: usize,
    pub row: usize,
    pub col: usize,
    /// A1-style position, e.g. `C4`.
    pub position: String,
    pub cell: String,
    pub error: String,
}

/// The decoded training plan. Built once, read-only afterwards.
///
/// Each grid row inside a day block becomes one [`Exercise`]. A weight or rep scheme
/// cell that fails to parse leaves that field `None` and is recorded as a
/// [`CellIssue`]; decoding never aborts on a bad cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<TrainingDay>,
    pub issues: Vec<CellIssue>,
}

impl Schedule {
    /// Decode `grid` with default options.
    pub fn decode(grid: &Grid) -> Self {
        Self::decode_with(grid, DecodeOptions::default())
    }

    pub fn decode_with(grid: &Grid, options: DecodeOptions) -> Self {
        let num_days = options.day_count.day_count(grid.cols);
        let mut schedule = Schedule {
            days: Vec::with_capacity(num_days),
            issues: Vec::new(),
        };

        for day in 0..num_days {
            let training_day = schedule.decode_day(grid, day, options);
            schedule.days.push(training_day);
        }

        info!(
            "decoded {} day(s), {} exercise(s), {} dropped cell(s)",
            schedule.days.len(),
            schedule.days.iter().map(|d| d.exercises.len()).sum::<usize>(),
            schedule.issues.len()
        );
        schedule
    }

    pub fn day(&self, index: usize) -> Option<&TrainingDay> {
        self.days.get(index)
    }

    fn decode_day(&mut self, grid: &Grid, day: usize, options: DecodeOptions) -> TrainingDay {
        let mut exercises: Vec<Exercise> = column(grid, day, ColumnRole::Name)
            .map(|(row, name)| Exercise {
                row,
                name: name.to_string(),
                rep_scheme: None,
                current_weight: None,
            })
            .collect();

        let parse_scheme: fn(&str) -> Result<RepScheme, CellError> =
            if options.reject_inverted_ranges {
                Parser::ordered_rep_scheme
            } else {
                Parser::rep_scheme
            };

        for (row, cell) in column(grid, day, ColumnRole::RepScheme) {
            let parsed = parse_scheme(cell);
            if let Some(scheme) = self.keep(day, row, ColumnRole::RepScheme, cell, parsed) {
                if let Some(exercise) = exercises.get_mut(row) {
                    exercise.rep_scheme = Some(scheme);
                }
            }
        }

        for (row, cell) in column(grid, day, ColumnRole::Weight) {
            let parsed = Parser::weight(cell);
            if let Some(weight) = self.keep(day, row, ColumnRole::Weight, cell, parsed) {
                if let Some(exercise) = exercises.get_mut(row) {
                    exercise.current_weight = Some(weight);
                }
            }
        }

        TrainingDay {
            index: day,
            exercises,
        }
    }

    /// Returns the parsed value, or records the failure and returns `None`.
    fn keep<T>(
        &mut self,
        day: usize,
        row: usize,
        role: ColumnRole,
        cell: &str,
        parsed: Result<T, CellError>,
    ) -> Option<T> {
        match parsed {
            Ok(value) => Some(value),
            Err(err) => {
                let col = column_index(day, role);
                let position = cell_name(row, col);
                if cell.is_empty() {
                    debug!("day {}: blank cell {} skipped", day + 1, position);
                } else {
                    warn!("day {}: cell {} dropped: {}", day + 1, position, err);
                }
                self.issues.push(CellIssue {
                    day,
                    row,
                    col,
                    position,
                    cell: cell.to_string(),
                    error: err.to_string(),
                });
                None
            }
        }
    }
}
