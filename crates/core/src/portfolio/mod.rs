//! Portfolio calculations over investment record snapshots.

pub mod aggregation;
pub mod performance;

pub use aggregation::*;
pub use performance::*;
