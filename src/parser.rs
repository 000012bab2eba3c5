use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a single cell could not be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    #[error("expected `<sets>x<min>-<max>`, found {found} part(s) in '{cell}'")]
    SchemeTokens { cell: String, found: usize },

    #[error("expected `<min>-<max>`, found {found} part(s) in '{cell}'")]
    RangeTokens { cell: String, found: usize },

    #[error("invalid number '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("minimum reps {min} exceed maximum reps {max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("invalid weight '{cell}': {source}")]
    InvalidWeight {
        cell: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("weight '{cell}' is not a finite number")]
    WeightOutOfRange { cell: String },
}

/// A prescribed protocol: `sets` sets of between `min_reps` and `max_reps` repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepScheme {
    pub sets: u32,
    pub min_reps: u32,
    pub max_reps: u32,
}

impl RepScheme {
    /// True when the range is ordered (`min_reps <= max_reps`).
    pub fn is_ordered(&self) -> bool {
        self.min_reps <= self.max_reps
    }
}

impl fmt::Display for RepScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}-{}", self.sets, self.min_reps, self.max_reps)
    }
}

impl FromStr for RepScheme {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::rep_scheme(s)
    }
}

/// Cell-level parsers for the workout sheet.
pub struct Parser;

impl Parser {
    /// Parses `4x8-12` into (sets, min, max).
    ///
    /// The separator is the Latin `x` or the Cyrillic `х` (U+0445). Whitespace is
    /// not trimmed, so `" 4x8-12"` fails.
    pub fn rep_scheme(cell: &str) -> Result<RepScheme, CellError> {
        let parts: Vec<&str> = separator().split(cell).collect();
        let found = parts.iter().filter(|part| !part.is_empty()).count();
        if parts.len() != 2 || found != 2 {
            return Err(CellError::SchemeTokens {
                cell: cell.to_string(),
                found,
            });
        }

        let sets = parse_count(parts[0])?;

        let range: Vec<&str> = parts[1].split('-').collect();
        if range.len() != 2 {
            return Err(CellError::RangeTokens {
                cell: parts[1].to_string(),
                found: range.len(),
            });
        }

        Ok(RepScheme {
            sets,
            min_reps: parse_count(range[0])?,
            max_reps: parse_count(range[1])?,
        })
    }

    /// Like [`Parser::rep_scheme`], but also rejects `min_reps > max_reps`.
    pub fn ordered_rep_scheme(cell: &str) -> Result<RepScheme, CellError> {
        let scheme = Self::rep_scheme(cell)?;
        if !scheme.is_ordered() {
            return Err(CellError::InvertedRange {
                min: scheme.min_reps,
                max: scheme.max_reps,
            });
        }
        Ok(scheme)
    }

    /// Parses a working weight, accepting `,` as the decimal separator.
    /// Zero and negative weights are accepted; values that are not a finite `f32`
    /// (`1e40`, `NaN`, `inf`) are rejected.
    pub fn weight(cell: &str) -> Result<f32, CellError> {
        let weight = cell
            .replace(',', ".")
            .parse::<f32>()
            .map_err(|source| CellError::InvalidWeight {
                cell: cell.to_string(),
                source,
            })?;
        if !weight.is_finite() {
            return Err(CellError::WeightOutOfRange {
                cell: cell.to_string(),
            });
        }
        Ok(weight)
    }
}

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[x\x{0445}]").expect("separator pattern is valid"))
}

fn parse_count(token: &str) -> Result<u32, CellError> {
    token.parse::<u32>().map_err(|source| CellError::InvalidNumber {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(sets: u32, min_reps: u32, max_reps: u32) -> RepScheme {
        RepScheme {
            sets,
            min_reps,
            max_reps,
        }
    }

    #[test]
    fn latin_and_cyrillic_separators_are_equivalent() {
        assert_eq!(Parser::rep_scheme("4x8-12"), Ok(scheme(4, 8, 12)));
        assert_eq!(Parser::rep_scheme("4\u{0445}8-12"), Ok(scheme(4, 8, 12)));
        assert_eq!("3x5-5".parse::<RepScheme>(), Ok(scheme(3, 5, 5)));
    }

    #[test]
    fn missing_range_fails() {
        assert!(matches!(
            Parser::rep_scheme("4x8"),
            Err(CellError::RangeTokens { found: 1, .. })
        ));
        assert!(matches!(
            Parser::rep_scheme("4x8-10-12"),
            Err(CellError::RangeTokens { found: 3, .. })
        ));
    }

    #[test]
    fn separator_count_must_be_one() {
        assert!(matches!(
            Parser::rep_scheme("48-12"),
            Err(CellError::SchemeTokens { found: 1, .. })
        ));
        assert!(matches!(
            Parser::rep_scheme("4x8x8-12"),
            Err(CellError::SchemeTokens { .. })
        ));
        assert!(matches!(
            Parser::rep_scheme("x8-12"),
            Err(CellError::SchemeTokens { found: 1, .. })
        ));
        assert!(matches!(
            Parser::rep_scheme(""),
            Err(CellError::SchemeTokens { found: 0, .. })
        ));
    }

    #[test]
    fn non_integer_tokens_fail() {
        match Parser::rep_scheme("ax8-12") {
            Err(CellError::InvalidNumber { token, .. }) => assert_eq!(token, "a"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            Parser::rep_scheme("4x8-"),
            Err(CellError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Parser::rep_scheme("4x-1-12"),
            Err(CellError::RangeTokens { .. })
        ));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert!(Parser::rep_scheme(" 4x8-12").is_err());
        assert!(Parser::rep_scheme("4x8-12 ").is_err());
        assert!(Parser::rep_scheme("4 x 8-12").is_err());
    }

    #[test]
    fn inverted_range_is_accepted_unless_ordered() {
        assert_eq!(Parser::rep_scheme("3x12-8"), Ok(scheme(3, 12, 8)));
        assert_eq!(
            Parser::ordered_rep_scheme("3x12-8"),
            Err(CellError::InvertedRange { min: 12, max: 8 })
        );
        assert_eq!(Parser::ordered_rep_scheme("3x8-8"), Ok(scheme(3, 8, 8)));
    }

    #[test]
    fn display_uses_latin_separator() {
        let parsed = Parser::rep_scheme("5\u{0445}3-5").unwrap();
        assert_eq!(parsed.to_string(), "5x3-5");
    }

    #[test]
    fn weights() {
        assert_eq!(Parser::weight("82,5"), Ok(82.5));
        assert_eq!(Parser::weight("82.5"), Ok(82.5));
        assert_eq!(Parser::weight("-10"), Ok(-10.0));
        assert_eq!(Parser::weight("0"), Ok(0.0));
        assert!(matches!(
            Parser::weight("heavy"),
            Err(CellError::InvalidWeight { .. })
        ));
        assert!(Parser::weight("").is_err());
        assert!(Parser::weight(" 80").is_err());
        assert!(matches!(
            Parser::weight("1,2,3"),
            Err(CellError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        for cell in ["1e40", "-1e40", "NaN", "inf", "infinity"] {
            assert_eq!(
                Parser::weight(cell),
                Err(CellError::WeightOutOfRange {
                    cell: cell.to_string()
                }),
                "{}",
                cell
            );
        }
        assert_eq!(Parser::weight("3,4e38"), Ok(3.4e38));
    }
}
