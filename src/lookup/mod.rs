//! Nutrition lookup module
//!
//! Resolves a food query to a food item through a remote nutrition service.

pub mod client;
pub mod response;

use thiserror::Error;

use crate::input::FoodQuery;
use crate::models::FoodItem;

pub use client::CalorieNinjasClient;
pub use response::{ApiFoodItem, NutritionResponse};

/// Lookup error types
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No nutrition data for '{query}'")]
    NotFound { query: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Response item is missing '{0}'")]
    MissingField(&'static str),
}

impl LookupError {
    /// True when the service answered but had nothing for the query
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }

    /// The line shown to the user when an item is skipped
    pub fn user_message(&self) -> String {
        match self {
            LookupError::NotFound { query } => format!("No Data Found. '{}'", query),
            other => format!("API Request Error: {}", other),
        }
    }
}

/// Result type for lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Anything that can turn a query into a food item
pub trait NutritionLookup {
    fn resolve(&self, query: &FoodQuery) -> LookupResult<FoodItem>;
}
