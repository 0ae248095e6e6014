//! Soil-profile TSV reader.

use std::path::Path;

use tracing::debug;

use hydrec_recharge::SoilProfile;

use crate::error::IoError;

/// A soil column read from file: the validated specific-yield profile plus
/// the per-layer texture names.
#[derive(Debug, Clone)]
pub struct SoilColumn {
    profile: SoilProfile,
    names: Vec<String>,
}

impl SoilColumn {
    /// Returns the validated profile.
    pub fn profile(&self) -> &SoilProfile {
        &self.profile
    }

    /// Returns the per-layer texture names.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Reads a tab-delimited soil-profile file without headers: one row per
/// layer, `bottom_depth<TAB>texture<TAB>specific_yield` (extra columns are
/// ignored). The surface boundary at 0 is implicit.
pub fn read_soil_profile(path: &Path) -> Result<SoilColumn, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut boundaries = vec![0.0];
    let mut specific_yield = Vec::new();
    let mut names = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result?;
        if record.len() < 3 {
            return Err(IoError::MalformedSoilRow { row });
        }
        let depth: f64 = record[0]
            .trim()
            .parse()
            .map_err(|_| IoError::MalformedSoilRow { row })?;
        let sy: f64 = record[2]
            .trim()
            .parse()
            .map_err(|_| IoError::MalformedSoilRow { row })?;
        boundaries.push(depth);
        names.push(record[1].trim().to_string());
        specific_yield.push(sy);
    }

    if specific_yield.is_empty() {
        return Err(IoError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let profile = SoilProfile::new(boundaries, specific_yield)?;
    debug!(path = %path.display(), layers = profile.n_layers(), "soil profile loaded");
    Ok(SoilColumn { profile, names })
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
    fn reads_layered_column() {
        let file = write_temp("1.5\tsand\t0.25\n4.0\tsilt\t0.10\n9.0\tclay\t0.03\n");
        let column = read_soil_profile(file.path()).unwrap();
        assert_eq!(column.profile().boundaries(), &[0.0, 1.5, 4.0, 9.0]);
        assert_eq!(column.profile().specific_yield(), &[0.25, 0.10, 0.03]);
        assert_eq!(column.names(), &["sand", "silt", "clay"]);
    }

    #[test]
    fn extra_columns_ignored() {
        let file = write_temp("2.0\tsand\t0.2\t#FFCC00\n");
        let column = read_soil_profile(file.path()).unwrap();
        assert_eq!(column.profile().n_layers(), 1);
    }

    #[test]
    fn short_row_rejected() {
        let file = write_temp("2.0\tsand\n");
        let err = read_soil_profile(file.path()).unwrap_err();
        assert!(matches!(err, IoError::MalformedSoilRow { row: 1 }));
    }

    #[test]
    fn unparseable_yield_rejected() {
        let file = write_temp("2.0\tsand\thigh\n");
        let err = read_soil_profile(file.path()).unwrap_err();
        assert!(matches!(err, IoError::MalformedSoilRow { row: 1 }));
    }

    #[test]
    fn empty_file_rejected() {
        let file = write_temp("");
        let err = read_soil_profile(file.path()).unwrap_err();
        assert!(matches!(err, IoError::EmptyFile { .. }));
    }

    #[test]
    fn profile_validation_propagates() {
        // Decreasing depths fail the profile invariant.
        let file = write_temp("4.0\tsand\t0.2\n2.0\tsilt\t0.1\n");
        let err = read_soil_profile(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Profile(_)));
    }
}
