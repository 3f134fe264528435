//! Food Item model
//!
//! Represents a food item with nutritional information, or the running
//! total built by combining several of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// What a food item describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// A single food as named by the nutrition service
    Food(String),
    /// The sum of two or more foods
    Total,
}

impl Label {
    pub fn is_total(&self) -> bool {
        matches!(self, Label::Total)
    }

    /// The food name, or None for a total
    pub fn name(&self) -> Option<&str> {
        match self {
            Label::Food(name) => Some(name.as_str()),
            Label::Total => None,
        }
    }
}

/// A food item with nutritional information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub label: Label,
    pub nutrition: Nutrition,
}

impl FoodItem {
    /// Create a single-food item. Every field is required.
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
    ) -> Self {
        Self {
            label: Label::Food(name.into()),
            nutrition: Nutrition { calories, protein, fat, carbs },
        }
    }

    /// Create an item carrying the total label
    pub fn total(nutrition: Nutrition) -> Self {
        Self {
            label: Label::Total,
            nutrition,
        }
    }

    pub fn calories(&self) -> f64 {
        self.nutrition.calories
    }

    pub fn protein(&self) -> f64 {
        self.nutrition.protein
    }

    pub fn fat(&self) -> f64 {
        self.nutrition.fat
    }

    pub fn carbs(&self) -> f64 {
        self.nutrition.carbs
    }

    /// Combine two items into a total. Neither operand is modified.
    pub fn combine(&self, other: &FoodItem) -> FoodItem {
        FoodItem::total(self.nutrition + other.nutrition)
    }
}

impl std::ops::Add for FoodItem {
    type Output = FoodItem;

    fn add(self, other: FoodItem) -> FoodItem {
        self.combine(&other)
    }
}

impl std::ops::Add<&FoodItem> for &FoodItem {
    type Output = FoodItem;

    fn add(self, other: &FoodItem) -> FoodItem {
        self.combine(other)
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Label::Food(name) = &self.label {
            write!(f, "\nName: {}\n", name)?;
        }
        write!(f, "\nCalories: {:.2}kcal\n", self.nutrition.calories)?;
        write!(f, "\nProtein: {:.2}g\n", self.nutrition.protein)?;
        write!(f, "\nFat: {:.2}g\n", self.nutrition.fat)?;
        write!(f, "\nCarbs: {:.2}g\n", self.nutrition.carbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn rice() -> FoodItem {
        FoodItem::new("rice", 205.0, 4.3, 0.4, 44.5)
    }

    fn banana() -> FoodItem {
        FoodItem::new("banana", 90.0, 1.1, 0.3, 23.0)
    }

    fn apple() -> FoodItem {
        FoodItem::new("apple", 52.0, 0.3, 0.2, 14.0)
    }

    fn assert_same_numbers(a: &FoodItem, b: &FoodItem) {
        assert!((a.calories() - b.calories()).abs() < EPS);
        assert!((a.protein() - b.protein()).abs() < EPS);
        assert!((a.fat() - b.fat()).abs() < EPS);
        assert!((a.carbs() - b.carbs()).abs() < EPS);
    }

    #[test]
    fn test_add_food_items() {
        let total = rice() + banana();
        assert_eq!(total.calories(), 295.0);
        assert!((total.protein() - 5.4).abs() < EPS);
        assert!((total.fat() - 0.7).abs() < EPS);
        assert_eq!(total.carbs(), 67.5);
    }

    #[test]
    fn test_combine_does_not_touch_operands() {
        let a = rice();
        let b = banana();
        let _ = a.combine(&b);
        assert_eq!(a, rice());
        assert_eq!(b, banana());
    }

    #[test]
    fn test_combine_is_commutative() {
        assert_same_numbers(&(rice() + banana()), &(banana() + rice()));
        assert_eq!((rice() + banana()).calories(), (banana() + rice()).calories());
    }

    #[test]
    fn test_combine_is_associative() {
        let left = (rice() + banana()) + apple();
        let right = rice() + (banana() + apple());
        assert_same_numbers(&left, &right);
    }

    #[test]
    fn test_combine_always_labels_total() {
        assert_eq!((rice() + banana()).label, Label::Total);
        assert_eq!((rice() + rice()).label, Label::Total);

        let already_total = FoodItem::total(Nutrition::zero());
        assert!((&already_total + &apple()).label.is_total());
    }

    #[test]
    fn test_display_single_food() {
        let expected = "\nName: rice\n\
                        \nCalories: 205.00kcal\n\
                        \nProtein: 4.30g\n\
                        \nFat: 0.40g\n\
                        \nCarbs: 44.50g\n";
        assert_eq!(rice().to_string(), expected);
    }

    #[test]
    fn test_display_total_omits_name() {
        let rendered = (rice() + banana()).to_string();
        assert!(!rendered.contains("Name:"));
        assert!(rendered.starts_with("\nCalories: 295.00kcal\n"));
        assert!(rendered.contains("\nProtein: 5.40g\n"));
        assert!(rendered.ends_with("\nCarbs: 67.50g\n"));
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        let item = FoodItem::new("oats", 389.123456, 16.899, 6.9, 66.275);
        let rendered = item.to_string();
        assert!(rendered.contains("Calories: 389.12kcal"));
        assert!(rendered.contains("Protein: 16.90g"));
        assert!(rendered.contains("Fat: 6.90g"));
    }

    #[test]
    fn test_food_named_total_is_not_the_sentinel() {
        let item = FoodItem::new("total", 1.0, 1.0, 1.0, 1.0);
        assert!(!item.label.is_total());
        assert_eq!(item.label.name(), Some("total"));
        assert!(item.to_string().contains("Name: total"));
    }
}
