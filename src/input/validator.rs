//! Food query grammar
//!
//! A query is an optional quantity, optional mass unit and the connector
//! "of", followed by one or more words naming the food. Without the prefix
//! each word must start with a letter:
//!
//! - "100g of apples"
//! - "20 oz of chicken breast"
//! - "banana"
//!
//! Matching is case-insensitive and must cover the whole line.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::nutrition::MassUnit;

/// Either quantity, optional unit, connector and any words, or bare words
/// that each start with a letter.
const QUERY_PATTERN: &str = r"(?i)^(?:(?P<quantity>\d+)(?: ?(?P<unit>oz|g|lbs))? of (?P<food>\w+(?: \w+)*)|(?P<bare>[^\W\d_]\w*(?: [^\W\d_]\w*)*))$";

fn query_regex() -> Option<&'static Regex> {
    static QUERY_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    QUERY_REGEX
        .get_or_init(|| Regex::new(QUERY_PATTERN).ok())
        .as_ref()
}

/// Check a line against the query grammar
pub fn is_valid_query(line: &str) -> bool {
    query_regex().is_some_and(|re| re.is_match(line))
}

/// A line of user input accepted by the query grammar
#[derive(Debug, Clone, PartialEq)]
pub struct FoodQuery {
    raw: String,
    quantity: Option<f64>,
    unit: Option<MassUnit>,
    food: String,
}

impl FoodQuery {
    /// Parse a line, returning None if it does not match the grammar
    pub fn parse(line: &str) -> Option<Self> {
        let caps = query_regex()?.captures(line)?;

        let quantity = caps
            .name("quantity")
            .and_then(|m| m.as_str().parse::<f64>().ok());
        let unit = caps
            .name("unit")
            .and_then(|m| MassUnit::from_token(m.as_str()));
        let food = caps
            .name("food")
            .or_else(|| caps.name("bare"))?
            .as_str()
            .to_string();

        Some(Self {
            raw: line.to_string(),
            quantity,
            unit,
            food,
        })
    }

    /// The line exactly as the user typed it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn quantity(&self) -> Option<f64> {
        self.quantity
    }

    pub fn unit(&self) -> Option<MassUnit> {
        self.unit
    }

    /// The food description words
    pub fn food(&self) -> &str {
        &self.food
    }

    /// Quantity in grams, when both a quantity and a unit were given
    pub fn grams(&self) -> Option<f64> {
        match (self.quantity, self.unit) {
            (Some(q), Some(unit)) => Some(unit.to_grams(q)),
            _ => None,
        }
    }

    /// Human-readable amount, e.g. `20 oz (566.99g)` or `3`
    pub fn quantity_summary(&self) -> Option<String> {
        let quantity = self.quantity?;
        Some(match (self.unit, self.grams()) {
            (Some(unit), Some(grams)) => format!("{} {} ({:.2}g)", quantity, unit, grams),
            _ => format!("{}", quantity),
        })
    }
}

impl fmt::Display for FoodQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
