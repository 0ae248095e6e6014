//! Error types for the hydrec-io crate.

use std::path::PathBuf;

/// Error type for reading and writing hydrec data files.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Underlying filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Returned when a file yields no usable rows.
    #[error("no usable rows in {path}")]
    EmptyFile {
        /// The offending file.
        path: PathBuf,
    },

    /// Returned when a time value is NaN or infinite.
    #[error("non-finite time value at row {row}")]
    InvalidTime {
        /// One-based data row number.
        row: usize,
    },

    /// Returned when time values are not strictly increasing.
    #[error("time is not strictly increasing at row {row}")]
    NonMonotonicTime {
        /// One-based data row number.
        row: usize,
    },

    /// Returned when a soil-profile row does not have the expected
    /// `depth<TAB>name<TAB>specific_yield` shape.
    #[error("malformed soil-profile row {row}")]
    MalformedSoilRow {
        /// One-based data row number.
        row: usize,
    },

    /// Returned when the parsed soil column fails profile validation.
    #[error("invalid soil profile: {0}")]
    Profile(#[from] hydrec_recharge::RechargeError),

    /// Returned when a weather row does not form a valid calendar date.
    #[error("invalid date at row {row}")]
    InvalidDate {
        /// One-based data row number.
        row: usize,
    },

    /// Returned when weather dates are not consecutive days.
    #[error("weather dates are not consecutive at row {row}")]
    NonContiguousDates {
        /// One-based data row number.
        row: usize,
    },

    /// Returned when the parsed weather table fails forcing validation.
    #[error("invalid weather forcing: {0}")]
    Forcing(#[from] hydrec_budget::BudgetError),

    /// Returned when output columns have different lengths.
    #[error("output column '{column}' has {len} rows, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Its length.
        len: usize,
        /// Expected length (that of the first column).
        expected: usize,
    },
}
