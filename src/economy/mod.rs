//! Economy layer - resource kinds, the ledger, and the cost table

pub mod cost;
pub mod ledger;
pub mod resource;

pub use cost::{CostSet, CostTable};
pub use ledger::{accrual_units, ResourceLedger};
pub use resource::{ResourceAccount, ResourceKind};
