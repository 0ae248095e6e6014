//! Water-level CSV reader.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::IoError;

/// One row of a water-level file: `time,level` with time in day numbers and
/// level in meters below ground surface. An empty level marks a gap.
#[derive(Debug, Deserialize)]
struct WaterLevelRow {
    time: f64,
    level: Option<f64>,
}

/// An observed water-level record: day numbers (strictly increasing) and
/// levels in meters below ground surface. Gap rows are dropped on read, so
/// the time axis may be irregular.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterLevelSeries {
    time: Vec<f64>,
    levels: Vec<f64>,
}

impl WaterLevelSeries {
    /// Returns the day numbers.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Returns the levels in meters below ground surface.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if the record holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Reads a `time,level` CSV file (one header row).
///
/// Rows with an empty or non-finite level are skipped and counted as gaps;
/// the remaining time values must be finite and strictly increasing.
pub fn read_water_levels(path: &Path) -> Result<WaterLevelSeries, IoError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut time = Vec::new();
    let mut levels = Vec::new();
    let mut rows = Vec::new();
    let mut gaps = 0usize;

    for (index, result) in reader.deserialize::<WaterLevelRow>().enumerate() {
        let row = index + 1;
        let record = result?;
        if !record.time.is_finite() {
            return Err(IoError::InvalidTime { row });
        }
        match record.level {
            Some(level) if level.is_finite() => {
                time.push(record.time);
                levels.push(level);
                rows.push(row);
            }
            _ => gaps += 1,
        }
    }

    if time.is_empty() {
        return Err(IoError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    for i in 1..time.len() {
        if time[i] <= time[i - 1] {
            return Err(IoError::NonMonotonicTime { row: rows[i] });
        }
    }

    debug!(
        path = %path.display(),
        samples = time.len(),
        gaps,
        "water levels loaded"
    );
    Ok(WaterLevelSeries { time, levels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_basic_file() {
        let file = write_temp("time,level\n0,1.52\n1,1.56\n2,1.60\n");
        let series = read_water_levels(file.path()).unwrap();
        assert_eq!(series.time(), &[0.0, 1.0, 2.0]);
        assert_eq!(series.levels(), &[1.52, 1.56, 1.60]);
    }

    #[test]
    fn gap_rows_are_skipped() {
        let file = write_temp("time,level\n0,1.52\n1,\n2,1.60\n");
        let series = read_water_levels(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.time(), &[0.0, 2.0]);
    }

    #[test]
    fn all_gaps_is_empty_file() {
        let file = write_temp("time,level\n0,\n1,\n");
        let err = read_water_levels(file.path()).unwrap_err();
        assert!(matches!(err, IoError::EmptyFile { .. }));
    }

    #[test]
    fn non_monotonic_time_rejected() {
        let file = write_temp("time,level\n0,1.0\n2,1.1\n1,1.2\n");
        let err = read_water_levels(file.path()).unwrap_err();
        assert!(matches!(err, IoError::NonMonotonicTime { row: 3 }));
    }

    #[test]
    fn unparseable_level_is_a_csv_error() {
        let file = write_temp("time,level\n0,abc\n");
        let err = read_water_levels(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Csv(_)));
    }
}
