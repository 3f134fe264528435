//! Query collection
//!
//! Prompts until end of input, keeping every line the grammar accepts.

use std::io::{BufRead, Write};

use super::console::Console;
use super::validator::FoodQuery;

/// Prompt shown before each line
pub const PROMPT: &str = "Food and weight: ";

/// Printed for each rejected line
pub const INVALID_FORMAT: &str = "Invalid Format. Example: '20g of almonds'";

/// Collect accepted queries, in arrival order, until end of input.
///
/// Rejected lines print a diagnostic and collection continues. A read error
/// on the source is logged and ends collection like end of input does.
pub fn collect<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Vec<FoodQuery> {
    let mut queries = Vec::new();

    loop {
        let line = match console.read_line(PROMPT) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Input read failed, ending collection: {}", e);
                break;
            }
        };

        match FoodQuery::parse(&line) {
            Some(query) => {
                tracing::debug!(
                    query = query.as_str(),
                    food = query.food(),
                    quantity = ?query.quantity(),
                    unit = ?query.unit(),
                    grams = ?query.grams(),
                    "Accepted food query"
                );
                queries.push(query);
            }
            None => {
                tracing::debug!(line = %line, "Rejected food query");
                if let Err(e) = console.println(INVALID_FORMAT) {
                    tracing::warn!("Could not write diagnostic: {}", e);
                }
            }
        }
    }

    // Finish the prompt line left open by end of input
    if let Err(e) = console.println("") {
        tracing::warn!("Could not write to console: {}", e);
    }

    queries
}
