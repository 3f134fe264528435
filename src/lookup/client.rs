//! CalorieNinjas HTTP client
//!
//! Blocking client for `GET /v1/nutrition?query=...`, authenticated with an
//! `X-Api-Key` header.

use reqwest::blocking::Client;

use super::{LookupError, LookupResult, NutritionLookup, NutritionResponse};
use crate::config::Config;
use crate::input::FoodQuery;
use crate::models::FoodItem;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Nutrition lookup backed by the CalorieNinjas API
pub struct CalorieNinjasClient {
    api_url: String,
    api_key: String,
    client: Client,
}

impl CalorieNinjasClient {
    /// Build a client from configuration. The key is read once, here.
    pub fn new(config: &Config) -> LookupResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config, client))
    }

    /// Build around an already configured HTTP client
    pub fn with_client(config: &Config, client: Client) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            client,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl NutritionLookup for CalorieNinjasClient {
    fn resolve(&self, query: &FoodQuery) -> LookupResult<FoodItem> {
        tracing::debug!(url = %self.api_url, query = query.as_str(), "Requesting nutrition data");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("query", query.as_str())])
            .header(API_KEY_HEADER, &self.api_key)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        NutritionResponse::from_json(&body)?.into_food_item(query)
    }
}
