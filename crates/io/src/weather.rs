//! Daily-weather CSV reader.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use hydrec_budget::Forcing;

use crate::error::IoError;

/// One row of a weather file: calendar date plus the three forcing values.
#[derive(Debug, Deserialize)]
struct WeatherRow {
    year: i32,
    month: u32,
    day: u32,
    tavg: f64,
    ptot: f64,
    etp: f64,
}

/// A daily weather record: consecutive calendar dates and the validated
/// forcing series.
#[derive(Debug, Clone)]
pub struct WeatherTable {
    dates: Vec<NaiveDate>,
    forcing: Forcing,
}

impl WeatherTable {
    /// Returns the calendar dates, one per day.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the validated forcing.
    pub fn forcing(&self) -> &Forcing {
        &self.forcing
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the table holds no days.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns day numbers relative to the first record (0, 1, 2, ...).
    pub fn day_numbers(&self) -> Vec<f64> {
        (0..self.dates.len()).map(|i| i as f64).collect()
    }
}

/// Reads a `year,month,day,tavg,ptot,etp` CSV file (one header row):
/// average air temperature in °C, total precipitation and potential
/// evapotranspiration in mm. Dates must form consecutive days.
pub fn read_weather(path: &Path) -> Result<WeatherTable, IoError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut dates = Vec::new();
    let mut temp = Vec::new();
    let mut precip = Vec::new();
    let mut pet = Vec::new();

    for (index, result) in reader.deserialize::<WeatherRow>().enumerate() {
        let row = index + 1;
        let record = result?;
        let date = NaiveDate::from_ymd_opt(record.year, record.month, record.day)
            .ok_or(IoError::InvalidDate { row })?;
        if let Some(&previous) = dates.last() {
            if date != previous + chrono::Days::new(1) {
                return Err(IoError::NonContiguousDates { row });
            }
        }
        dates.push(date);
        temp.push(record.tavg);
        precip.push(record.ptot);
        pet.push(record.etp);
    }

    if dates.is_empty() {
        return Err(IoError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let forcing = Forcing::new(precip, temp, pet)?;
    debug!(path = %path.display(), days = dates.len(), "weather forcing loaded");
    Ok(WeatherTable { dates, forcing })
}
