//! # hydrec-recharge
//!
//! Groundwater recharge estimation by the water-table fluctuation
//! principle: the difference between the observed water-level change and
//! the change predicted by the calibrated recession model is converted to a
//! water volume through a layered soil specific-yield profile.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["calibrated (a, b)"] --> C["compute_recharge()"]
//!     B["SoilProfile::new(boundaries, sy)?"] --> C
//!     D["observed levels (mbgs)"] --> C
//!     C --> E["RechargeSeries"]
//!     E --> F[".total() — meters"]
//!     E --> G[".annual_mm(elapsed_days)"]
//! ```

mod error;
mod profile;
mod recharge;
mod series;

pub use error::RechargeError;
pub use profile::SoilProfile;
pub use recharge::compute_recharge;
pub use series::RechargeSeries;
