//! Food Item Fixtures
//!
//! Sample surplus food items with their (hardcoded) spoilage predictions.

use chrono::{NaiveDate, NaiveDateTime};

/// How strongly a factor weighs on a prediction
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "High Impact",
            Impact::Medium => "Medium Impact",
            Impact::Low => "Low Impact",
        }
    }

    /// Width of the factor bar, as a CSS percentage
    pub fn bar_width(&self) -> &'static str {
        match self {
            Impact::High => "100%",
            Impact::Medium => "66%",
            Impact::Low => "33%",
        }
    }
}

/// A named factor feeding a prediction or a match score
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Factor {
    pub name: &'static str,
    pub value: &'static str,
    pub impact: Impact,
}

/// A logged surplus food item with its predicted spoilage
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: &'static str,
    pub kind: &'static str,
    pub quantity: &'static str,
    /// Cooking time for cooked meals, purchase time otherwise
    pub prepared_at: NaiveDateTime,
    pub storage: &'static str,
    pub temperature: &'static str,
    pub spoils_at: NaiveDateTime,
    pub hours_remaining: i64,
    pub factors: Vec<Factor>,
}

impl FoodItem {
    pub fn is_cooked(&self) -> bool {
        self.kind == "Cooked Meal"
    }

    /// Label for the `prepared_at` timestamp, which reads differently for
    /// cooked and purchased items.
    pub fn prepared_label(&self) -> &'static str {
        if self.is_cooked() {
            "Cooking Time:"
        } else {
            "Purchase Time:"
        }
    }

    pub fn time_left(&self) -> String {
        time_left_label(self.hours_remaining)
    }

    /// Badge classes for the freshness pill shown in list items
    pub fn freshness_class(&self) -> &'static str {
        if self.hours_remaining < 12 {
            "bg-red-100 text-red-800"
        } else if self.hours_remaining < 48 {
            "bg-yellow-100 text-yellow-800"
        } else {
            "bg-green-100 text-green-800"
        }
    }
}

/// Render remaining shelf time as hours below one day, whole days above
pub fn time_left_label(hours_remaining: i64) -> String {
    if hours_remaining < 24 {
        format!("{} hours left", hours_remaining)
    } else {
        format!("{} days left", hours_remaining / 24)
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Sample food items for spoilage prediction
pub fn food_items() -> Vec<FoodItem> {
    vec![
        FoodItem {
            id: 1,
            name: "Vegetable Biryani",
            kind: "Cooked Meal",
            quantity: "2.5 kg",
            prepared_at: at(2023, 9, 15, 14, 30),
            storage: "Room Temperature",
            temperature: "25°C",
            spoils_at: at(2023, 9, 15, 20, 30),
            hours_remaining: 6,
            factors: vec![
                Factor { name: "Food Type", value: "Cooked Rice Dish", impact: Impact::High },
                Factor { name: "Storage Temperature", value: "25°C", impact: Impact::High },
                Factor { name: "Time Since Cooking", value: "4 hours", impact: Impact::Medium },
                Factor { name: "Ingredients", value: "Contains dairy", impact: Impact::High },
            ],
        },
        FoodItem {
            id: 2,
            name: "Fresh Apples",
            kind: "Raw Fruit",
            quantity: "1.2 kg",
            prepared_at: at(2023, 9, 14, 10, 0),
            storage: "Refrigerated",
            temperature: "4°C",
            spoils_at: at(2023, 9, 21, 10, 0),
            hours_remaining: 168,
            factors: vec![
                Factor { name: "Food Type", value: "Fresh Fruit", impact: Impact::Medium },
                Factor { name: "Storage Temperature", value: "4°C", impact: Impact::High },
                Factor { name: "Time Since Purchase", value: "1 day", impact: Impact::Low },
                Factor { name: "Condition", value: "Intact skin", impact: Impact::High },
            ],
        },
        FoodItem {
            id: 3,
            name: "Milk",
            kind: "Dairy",
            quantity: "1 liter",
            prepared_at: at(2023, 9, 13, 8, 0),
            storage: "Refrigerated",
            temperature: "4°C",
            spoils_at: at(2023, 9, 18, 8, 0),
            hours_remaining: 120,
            factors: vec![
                Factor { name: "Food Type", value: "Dairy", impact: Impact::High },
                Factor { name: "Storage Temperature", value: "4°C", impact: Impact::High },
                Factor { name: "Time Since Opening", value: "2 days", impact: Impact::Medium },
                Factor { name: "Packaging", value: "Sealed", impact: Impact::Medium },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_left_in_hours_below_one_day() {
        assert_eq!(time_left_label(6), "6 hours left");
        assert_eq!(time_left_label(23), "23 hours left");
    }

    #[test]
    fn test_time_left_in_whole_days() {
        assert_eq!(time_left_label(168), "7 days left");
        assert_eq!(time_left_label(120), "5 days left");
        // Integer division truncates partial days
        assert_eq!(time_left_label(47), "1 days left");
    }

    #[test]
    fn test_freshness_class_thresholds() {
        let mut item = food_items().remove(0);
        item.hours_remaining = 6;
        assert_eq!(item.freshness_class(), "bg-red-100 text-red-800");
        item.hours_remaining = 24;
        assert_eq!(item.freshness_class(), "bg-yellow-100 text-yellow-800");
        item.hours_remaining = 120;
        assert_eq!(item.freshness_class(), "bg-green-100 text-green-800");
    }

    #[test]
    fn test_prepared_label_follows_kind() {
        let items = food_items();
        assert_eq!(items[0].prepared_label(), "Cooking Time:");
        assert_eq!(items[1].prepared_label(), "Purchase Time:");
    }
}
