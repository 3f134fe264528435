//! Nutrition aggregation
//!
//! Folds resolved food items into a single total.

use crate::models::FoodItem;

/// Sum food items into one total.
///
/// Returns `None` when there is nothing to sum, which callers must keep
/// distinct from a total whose fields are all zero. The fold is seeded with
/// the first item, so a single item comes back unchanged with its own label;
/// two or more come back labelled as a total.
pub fn calculate_total<I>(items: I) -> Option<FoodItem>
where
    I: IntoIterator<Item = FoodItem>,
{
    items.into_iter().reduce(|total, item| total + item)
}
