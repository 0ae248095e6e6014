//! # hydrec-io
//!
//! File readers and writers for the hydrec toolchain: water-level CSV,
//! tab-delimited soil-profile columns, daily weather CSV, and CSV output
//! for derived series. The numeric crates never touch files; everything
//! enters and leaves through this crate (or an equivalent collaborator).

mod error;
mod peaks;
mod soil;
mod water_level;
mod weather;
mod write;

pub use error::IoError;
pub use peaks::read_peak_indices;
pub use soil::{read_soil_profile, SoilColumn};
pub use water_level::{read_water_levels, WaterLevelSeries};
pub use weather::{read_weather, WeatherTable};
pub use write::{present, write_series};
