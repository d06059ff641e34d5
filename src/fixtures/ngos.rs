//! NGO Fixtures
//!
//! Nearby NGOs with their (hardcoded) match scores against the current
//! surplus, plus the canned pickup message the "AI" drafts for them.

use super::food::{Factor, Impact};

/// An NGO candidate for food redistribution
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Ngo {
    pub id: u32,
    pub name: &'static str,
    pub distance: &'static str,
    pub available_until: &'static str,
    pub preferred_foods: Vec<&'static str>,
    pub min_quantity: &'static str,
    /// Match score in the 0-100 range
    pub match_score: u8,
    pub match_factors: Vec<Factor>,
}

impl Ngo {
    pub fn preferred_foods_label(&self) -> String {
        self.preferred_foods.join(", ")
    }
}

/// Sample NGOs for matching
pub fn ngo_list() -> Vec<Ngo> {
    vec![
        Ngo {
            id: 1,
            name: "Food For All",
            distance: "1.2 km",
            available_until: "19:00",
            preferred_foods: vec!["Cooked Meals", "Vegetables", "Fruits"],
            min_quantity: "2 kg",
            match_score: 92,
            match_factors: vec![
                Factor { name: "Location Proximity", value: "1.2 km", impact: Impact::High },
                Factor {
                    name: "Time Availability",
                    value: "Available for 4 more hours",
                    impact: Impact::High,
                },
                Factor {
                    name: "Food Preference Match",
                    value: "Prefers cooked meals",
                    impact: Impact::High,
                },
                Factor {
                    name: "Quantity Requirements",
                    value: "Meets minimum quantity",
                    impact: Impact::Medium,
                },
            ],
        },
        Ngo {
            id: 2,
            name: "Community Kitchen",
            distance: "3.5 km",
            available_until: "20:00",
            preferred_foods: vec!["Raw Ingredients", "Vegetables", "Grains"],
            min_quantity: "1 kg",
            match_score: 78,
            match_factors: vec![
                Factor { name: "Location Proximity", value: "3.5 km", impact: Impact::Medium },
                Factor {
                    name: "Time Availability",
                    value: "Available for 5 more hours",
                    impact: Impact::High,
                },
                Factor {
                    name: "Food Preference Match",
                    value: "Prefers raw ingredients",
                    impact: Impact::Low,
                },
                Factor {
                    name: "Quantity Requirements",
                    value: "Meets minimum quantity",
                    impact: Impact::High,
                },
            ],
        },
        Ngo {
            id: 3,
            name: "Shelter Meals",
            distance: "5.8 km",
            available_until: "21:00",
            preferred_foods: vec!["Cooked Meals", "Bread", "Dairy"],
            min_quantity: "3 kg",
            match_score: 65,
            match_factors: vec![
                Factor { name: "Location Proximity", value: "5.8 km", impact: Impact::Low },
                Factor {
                    name: "Time Availability",
                    value: "Available for 6 more hours",
                    impact: Impact::High,
                },
                Factor {
                    name: "Food Preference Match",
                    value: "Prefers cooked meals",
                    impact: Impact::High,
                },
                Factor {
                    name: "Quantity Requirements",
                    value: "Below minimum quantity",
                    impact: Impact::Low,
                },
            ],
        },
    ]
}

/// The canned "AI-generated" pickup message shown in the match detail panel
pub fn pickup_message(ngo: &Ngo) -> String {
    format!(
        "Hi {}! We have 2.5kg of fresh Vegetable Biryani in excellent condition. \
         It was prepared today at 2:30 PM and needs to be picked up before 8:30 PM. \
         Our location is {} from you. Would you be able to collect it? \
         Please reply as soon as possible. Thank you for helping reduce food waste!",
        ngo.name, ngo.distance
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_scores_within_range() {
        for ngo in ngo_list() {
            assert!(ngo.match_score <= 100);
        }
    }

    #[test]
    fn test_preferred_foods_label_joins_with_commas() {
        let ngos = ngo_list();
        assert_eq!(ngos[0].preferred_foods_label(), "Cooked Meals, Vegetables, Fruits");
    }
}
