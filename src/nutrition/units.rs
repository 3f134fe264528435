//! Unit types and conversion constants
//!
//! The fixed set of mass units accepted in a food query.

use serde::{Deserialize, Serialize};

/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// A mass unit recognized by the input grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Grams,
    Ounces,
    Pounds,
}

impl MassUnit {
    /// Every recognized unit, in the order the grammar lists them
    pub const ALL: [MassUnit; 3] = [MassUnit::Ounces, MassUnit::Grams, MassUnit::Pounds];

    /// The token a user types for this unit
    pub fn token(&self) -> &'static str {
        match self {
            MassUnit::Grams => "g",
            MassUnit::Ounces => "oz",
            MassUnit::Pounds => "lbs",
        }
    }

    /// Parse a unit token (case-insensitive)
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" => Some(MassUnit::Grams),
            "oz" => Some(MassUnit::Ounces),
            "lbs" => Some(MassUnit::Pounds),
            _ => None,
        }
    }

    pub fn grams_per_unit(&self) -> f64 {
        match self {
            MassUnit::Grams => 1.0,
            MassUnit::Ounces => G_PER_OZ,
            MassUnit::Pounds => G_PER_LB,
        }
    }

    /// Convert a quantity in this unit to grams
    pub fn to_grams(&self, quantity: f64) -> f64 {
        quantity * self.grams_per_unit()
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
