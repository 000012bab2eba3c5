use crate::layout::DayCountPolicy;
use crate::schedule::DecodeOptions;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Browse a strength-training schedule kept in a spreadsheet.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fit-tracker", version, about)]
pub struct Cli {
    /// Workbook to read (xlsx, xlsm, xlsb, xls or ods)
    #[arg(default_value = "FitTrackerTable.xlsx")]
    pub workbook: PathBuf,

    /// Sheet to decode; defaults to the first sheet
    #[arg(long)]
    pub sheet: Option<String>,

    /// How many day blocks to read from the column count
    #[arg(long, value_enum, default_value_t = DayCountArg::Floor)]
    pub day_count: DayCountArg,

    /// Drop rep schemes whose minimum exceeds their maximum
    #[arg(long)]
    pub reject_inverted_ranges: bool,

    /// JSON file mapping exercise names to image URLs
    #[arg(long)]
    pub images: Option<PathBuf>,

    /// Print the decoded schedule as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCountArg {
    Floor,
    FloorPlusOne,
}

impl From<DayCountArg> for DayCountPolicy {
    fn from(arg: DayCountArg) -> Self {
        match arg {
            DayCountArg::Floor => DayCountPolicy::Floor,
            DayCountArg::FloorPlusOne => DayCountPolicy::FloorPlusOne,
        }
    }
}

impl Cli {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            day_count: self.day_count.into(),
            reject_inverted_ranges: self.reject_inverted_ranges,
        }
    }
}
