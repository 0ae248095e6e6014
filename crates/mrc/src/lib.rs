//! # hydrec-mrc
//!
//! Master Recession Curve calibration for groundwater hydrographs:
//! recession-segment pairing, piecewise implicit recession integration, and
//! a purpose-built damped Gauss-Newton estimator for the recession
//! parameters `(a, b)` of `dh/dt = -a*h + b`.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ExtremaSet / index list"] -->|"RecessionSegments::from_*"| B["RecessionSegments"]
//!     B -->|"MrcSpec::new(model).fit(time, levels, &segments)?"| C["MrcFit"]
//!     C --> D[".a(), .b() — recession parameters"]
//!     C --> E[".rmse() — residual (m)"]
//!     C --> F[".predicted() — in-segment levels"]
//! ```
//!
//! ## Two Model Kinds
//!
//! **Linear** (`dh/dt = b`, decay pinned at zero):
//! ```ignore
//! let fit = MrcSpec::new(MrcModel::Linear).fit(&time, &levels, &segments)?;
//! ```
//!
//! **Exponential** (`dh/dt = -a*h + b`, both parameters free):
//! ```ignore
//! let fit = MrcSpec::new(MrcModel::Exponential).fit(&time, &levels, &segments)?;
//! ```

mod config;
mod error;
mod fit;
mod integrate;
mod segments;
mod spec;

pub(crate) mod linalg;
pub(crate) mod solver;

pub use config::FitConfig;
pub use error::MrcError;
pub use fit::MrcFit;
pub use integrate::{integrate_recession, recession_step};
pub use segments::RecessionSegments;
pub use spec::{MrcModel, MrcSpec};
