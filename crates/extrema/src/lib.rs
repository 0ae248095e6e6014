//! # hydrec-extrema
//!
//! Local-extrema detection for groundwater hydrographs: partitions a
//! water-level series (meters below ground surface) into alternating
//! water-table maxima (recharge peaks) and minima (recession ends) at a
//! chosen timescale.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["water levels (mbgs)"] -->|"PlateauMap::build()"| B["constant runs"]
//!     A -->|"detect_extrema(series, &config)"| C["ExtremaSet"]
//!     C --> D[".extrema() — alternating peaks/ends"]
//!     C --> E[".added_ordinals() — synthesized entries"]
//!     C --> F[".signed_positions() — interop encoding"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use hydrec_extrema::{detect_extrema, DetectConfig};
//!
//! let levels = [0.0, 1.0, 2.0, 3.0, 4.0, 3.0];
//! let set = detect_extrema(&levels, &DetectConfig::new(2))?;
//! assert_eq!(set.len(), 2);
//! # Ok::<(), hydrec_extrema::ExtremaError>(())
//! ```

mod config;
mod detect;
mod error;
mod extremum;
mod plateau;

pub use config::{BoundaryPolicy, DetectConfig};
pub use detect::detect_extrema;
pub use error::ExtremaError;
pub use extremum::{ExtremaSet, Extremum, ExtremumKind};
pub use plateau::PlateauMap;
