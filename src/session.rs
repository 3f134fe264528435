//! Interactive session
//!
//! Collect queries, resolve each one, print the total.

use std::io::{BufRead, Write};

use crate::input::{collect, Console, FoodQuery};
use crate::lookup::NutritionLookup;
use crate::models::FoodItem;
use crate::nutrition::calculate_total;

/// Heading printed above the session total
pub const TOTAL_HEADING: &str = "\n==TOTAL NUTRITION==";

/// Resolve queries one at a time, in order.
///
/// Each query gets exactly one attempt. Failures print the lookup's own
/// diagnostic and are skipped; they never stop later queries.
pub fn resolve_all<R, W, L>(
    console: &mut Console<R, W>,
    lookup: &L,
    queries: &[FoodQuery],
) -> Vec<FoodItem>
where
    R: BufRead,
    W: Write,
    L: NutritionLookup + ?Sized,
{
    let mut items = Vec::with_capacity(queries.len());

    for query in queries {
        match lookup.resolve(query) {
            Ok(item) => {
                tracing::debug!(query = query.as_str(), calories = item.calories(), "Resolved");
                items.push(item);
            }
            Err(e) => {
                tracing::warn!(query = query.as_str(), error = %e, "Skipping item");
                if let Err(io_err) = console.println(e.user_message()) {
                    tracing::warn!("Could not write diagnostic: {}", io_err);
                }
            }
        }
    }

    items
}

/// Run one full session and return the total, if anything resolved.
pub fn run_session<R, W, L>(console: &mut Console<R, W>, lookup: &L) -> Option<FoodItem>
where
    R: BufRead,
    W: Write,
    L: NutritionLookup + ?Sized,
{
    let queries = collect(console);
    tracing::info!(count = queries.len(), "Collected food queries");

    let items = resolve_all(console, lookup, &queries);
    tracing::info!(resolved = items.len(), skipped = queries.len() - items.len(), "Lookups finished");

    let total = calculate_total(items)?;
    if let Err(e) = console.println(format_args!("{}{}", TOTAL_HEADING, total)) {
        tracing::warn!("Could not write total: {}", e);
    }
    Some(total)
}
