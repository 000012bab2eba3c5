pub mod commands;
pub mod config;
pub mod grid;
pub mod images;
pub mod layout;
pub mod loader;
pub mod navigator;
pub mod parser;
pub mod schedule;

pub use grid::Grid;
pub use layout::DayCountPolicy;
pub use parser::{CellError, RepScheme};
pub use schedule::{CellIssue, DecodeOptions, Exercise, Schedule, TrainingDay};
