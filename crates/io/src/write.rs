//! CSV output for derived series.

use std::path::Path;

use tracing::debug;

use crate::error::IoError;

/// Writes named columns of equal length as a CSV file with a header row.
///
/// Values are written with full `f64` round-trip precision; missing entries
/// (`None`) become empty fields.
pub fn write_series(path: &Path, columns: &[(&str, Vec<Option<f64>>)]) -> Result<(), IoError> {
    let expected = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
    for (name, values) in columns {
        if values.len() != expected {
            return Err(IoError::ColumnLengthMismatch {
                column: name.to_string(),
                len: values.len(),
                expected,
            });
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(columns.iter().map(|(name, _)| *name))?;
    for row in 0..expected {
        let record: Vec<String> = columns
            .iter()
            .map(|(_, values)| match values[row] {
                Some(v) => v.to_string(),
                None => String::new(),
            })
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush().map_err(IoError::Io)?;

    debug!(path = %path.display(), rows = expected, "series written");
    Ok(())
}

/// Convenience wrapper for fully-present columns.
pub fn present(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().map(|&v| Some(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_series(
            file.path(),
            &[
                ("time", present(&[0.0, 1.0, 2.0])),
                ("level", vec![Some(1.5), None, Some(1.6)]),
            ],
        )
        .unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "time,level\n0,1.5\n1,\n2,1.6\n");
    }

    #[test]
    fn column_length_mismatch_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = write_series(
            file.path(),
            &[
                ("time", present(&[0.0, 1.0])),
                ("level", present(&[1.5])),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IoError::ColumnLengthMismatch { len: 1, expected: 2, .. }
        ));
    }

    #[test]
    fn empty_columns_writes_header_only() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_series(file.path(), &[("time", vec![]), ("level", vec![])]).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "time,level\n");
    }
}
