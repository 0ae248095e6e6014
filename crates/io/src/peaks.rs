//! Curated peak-index CSV reader.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::IoError;

/// One row of a peak file: a signed extremum position (positive = peak,
/// negative = recession end). Only the magnitude matters for segment
/// pairing, which goes by chronological alternation.
#[derive(Debug, Deserialize)]
struct PeakRow {
    index: i64,
}

/// Reads an `index` CSV file (one header row) of extremum positions, as
/// exported by an interactive peak editor. Signs are stripped; the
/// magnitudes are returned in file order.
pub fn read_peak_indices(path: &Path) -> Result<Vec<usize>, IoError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut indices = Vec::new();
    for result in reader.deserialize::<PeakRow>() {
        let record = result?;
        indices.push(record.index.unsigned_abs() as usize);
    }
    if indices.is_empty() {
        return Err(IoError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), peaks = indices.len(), "peak indices loaded");
    Ok(indices)
}
