//! Data models
//!
//! Value types shared by the session, lookup client and aggregator.

mod food_item;
mod nutrition;

pub use food_item::{FoodItem, Label};
pub use nutrition::Nutrition;
