//! # hydrec-budget
//!
//! Daily surface water budget (precipitation, snowmelt, runoff,
//! evapotranspiration, storage) producing a groundwater recharge series,
//! plus the synthetic well hydrograph that turns a recharge series back
//! into water levels for comparison against observations.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Forcing::new(precip, temp, pet)?"] --> B["surface_water_budget()"]
//!     C["BudgetConfig::new(runoff, storage)"] --> B
//!     B --> D["BudgetOutput"]
//!     D -->|".recharge()"| E["synthetic_hydrograph()"]
//!     E --> F["simulated levels"]
//!     F -->|"fit_specific_yield()"| G["SyFit"]
//! ```
//!
//! All transfer terms are in mm of water per day; the hydrograph side works
//! in meters (divide budget recharge by 1000 before driving it).

mod budget;
mod config;
mod error;
mod forcing;
mod hydrograph;
mod syfit;

pub use budget::{surface_water_budget, BudgetOutput};
pub use config::BudgetConfig;
pub use error::BudgetError;
pub use forcing::Forcing;
pub use hydrograph::{synthetic_hydrograph, Direction};
pub use syfit::{fit_specific_yield, SyFit, SyFitConfig};
