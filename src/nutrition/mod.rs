//! Nutrition calculation module
//!
//! Handles nutrition aggregation and the mass units a query may use.

pub mod aggregate;
pub mod units;

pub use aggregate::calculate_total;
pub use units::{MassUnit, G_PER_LB, G_PER_OZ};
