//! CalorieNinjas response schema
//!
//! Only the fields the tracker reads are modelled; the service sends more.

use serde::Deserialize;

use super::LookupError;
use crate::input::FoodQuery;
use crate::models::FoodItem;

/// Body of `GET /v1/nutrition`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutritionResponse {
    /// Missing `items` means the same as an empty list
    #[serde(default)]
    pub items: Vec<ApiFoodItem>,
}

/// One matched food in a response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiFoodItem {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub protein_g: Option<f64>,
    pub fat_total_g: Option<f64>,
    pub carbohydrates_total_g: Option<f64>,
}

impl NutritionResponse {
    pub fn from_json(body: &str) -> Result<Self, LookupError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Turn the first matched item into a food item.
    ///
    /// The service may split a query into several items; only the first is
    /// used.
    pub fn into_food_item(self, query: &FoodQuery) -> Result<FoodItem, LookupError> {
        let extra = self.items.len().saturating_sub(1);
        let item = self
            .items
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound {
                query: query.as_str().to_string(),
            })?;

        if extra > 0 {
            tracing::debug!(query = query.as_str(), extra, "Ignoring additional matched items");
        }

        item.into_food_item(query)
    }
}

impl ApiFoodItem {
    /// Convert with explicit per-field rules: a missing name falls back to
    /// the query text, a missing numeric field is an error.
    pub fn into_food_item(self, query: &FoodQuery) -> Result<FoodItem, LookupError> {
        let name = self.name.unwrap_or_else(|| query.as_str().to_string());
        Ok(FoodItem::new(
            name,
            required(self.calories, "calories")?,
            required(self.protein_g, "protein_g")?,
            required(self.fat_total_g, "fat_total_g")?,
            required(self.carbohydrates_total_g, "carbohydrates_total_g")?,
        ))
    }
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, LookupError> {
    value.ok_or(LookupError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    fn query(s: &str) -> FoodQuery {
        FoodQuery::parse(s).unwrap()
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "items": [{
                "name": "apple",
                "calories": 52,
                "serving_size_g": 100.0,
                "protein_g": 0.3,
                "fat_total_g": 0.2,
                "carbohydrates_total_g": 14,
                "sugar_g": 10.3
            }]
        }"#;
        let item = NutritionResponse::from_json(body)
            .unwrap()
            .into_food_item(&query("100g of apple"))
            .unwrap();

        assert_eq!(item.label, Label::Food("apple".to_string()));
        assert_eq!(item.calories(), 52.0);
        assert!((item.protein() - 0.3).abs() < 1e-9);
        assert!((item.fat() - 0.2).abs() < 1e-9);
        assert_eq!(item.carbs(), 14.0);
    }

    #[test]
    fn test_empty_items_is_not_found() {
        let result = NutritionResponse::from_json(r#"{"items": []}"#)
            .unwrap()
            .into_food_item(&query("nothing"));
        assert!(matches!(result, Err(LookupError::NotFound { query }) if query == "nothing"));
    }

    #[test]
    fn test_missing_items_is_not_found() {
        let result = NutritionResponse::from_json("{}")
            .unwrap()
            .into_food_item(&query("nothing"));
        assert!(matches!(result, Err(LookupError::NotFound { .. })));
    }

    #[test]
    fn test_first_item_wins() {
        let body = r#"{"items": [
            {"name": "rice", "calories": 130, "protein_g": 2.7, "fat_total_g": 0.3, "carbohydrates_total_g": 28},
            {"name": "beans", "calories": 347, "protein_g": 21, "fat_total_g": 1.2, "carbohydrates_total_g": 63}
        ]}"#;
        let item = NutritionResponse::from_json(body)
            .unwrap()
            .into_food_item(&query("rice and beans"))
            .unwrap();
        assert_eq!(item.label.name(), Some("rice"));
        assert_eq!(item.calories(), 130.0);
    }

    #[test]
    fn test_missing_name_uses_query() {
        let body = r#"{"items": [{"calories": 1, "protein_g": 0, "fat_total_g": 0, "carbohydrates_total_g": 0}]}"#;
        let item = NutritionResponse::from_json(body)
            .unwrap()
            .into_food_item(&query("100g of mystery"))
            .unwrap();
        assert_eq!(item.label.name(), Some("100g of mystery"));
    }

    #[test]
    fn test_missing_numeric_field_is_error() {
        let body = r#"{"items": [{"name": "apple", "calories": 52, "protein_g": 0.3, "carbohydrates_total_g": 14}]}"#;
        let result = NutritionResponse::from_json(body)
            .unwrap()
            .into_food_item(&query("apple"));
        assert!(matches!(result, Err(LookupError::MissingField("fat_total_g"))));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = NutritionResponse::from_json("<html>oops</html>");
        assert!(matches!(result, Err(LookupError::MalformedResponse(_))));
    }
}
