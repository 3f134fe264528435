//! Nutrition Tracker Library
//!
//! Validates free-text food queries, resolves them through a nutrition API
//! and totals the results.

pub mod build_info;
pub mod config;
pub mod input;
pub mod lookup;
pub mod models;
pub mod nutrition;
pub mod session;
