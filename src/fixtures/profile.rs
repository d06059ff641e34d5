//! Settings Profile Fixture
//!
//! The default user profile the settings view edits. It is initialized once
//! per visit and never persisted.

/// Food categories an NGO match can be restricted to
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Cooked,
    Raw,
    Packaged,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [FoodType::Cooked, FoodType::Raw, FoodType::Packaged];

    pub fn label(&self) -> &'static str {
        match self {
            FoodType::Cooked => "Cooked Meals",
            FoodType::Raw => "Raw Ingredients",
            FoodType::Packaged => "Packaged Food",
        }
    }
}

/// Notification channel toggles
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Notifications {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

/// NGO matching preferences
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchingPrefs {
    pub auto_match: bool,
    pub max_distance_km: u32,
    pub min_quantity_kg: f64,
    pub food_types: Vec<FoodType>,
}

impl MatchingPrefs {
    /// Toggle membership of `food_type` in the preferred set: clicking an
    /// already-selected type removes it, otherwise adds it.
    pub fn toggle_food_type(&mut self, food_type: FoodType) {
        if self.food_types.contains(&food_type) {
            self.food_types.retain(|t| *t != food_type);
        } else {
            self.food_types.push(food_type);
        }
    }
}

/// The user profile edited by the settings view
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notifications: Notifications,
    pub matching: MatchingPrefs,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Main Street, City, Country".to_string(),
            notifications: Notifications { email: true, sms: false, push: true },
            matching: MatchingPrefs {
                auto_match: true,
                max_distance_km: 10,
                min_quantity_kg: 1.0,
                food_types: vec![FoodType::Cooked, FoodType::Raw, FoodType::Packaged],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_removes_then_restores() {
        let mut prefs = Profile::default().matching;
        let before = prefs.food_types.clone();

        prefs.toggle_food_type(FoodType::Cooked);
        assert!(!prefs.food_types.contains(&FoodType::Cooked));

        prefs.toggle_food_type(FoodType::Cooked);
        assert_eq!(prefs.food_types.len(), before.len());
        assert!(prefs.food_types.contains(&FoodType::Cooked));
    }

    #[test]
    fn test_toggle_adds_missing_type() {
        let mut prefs = MatchingPrefs {
            auto_match: false,
            max_distance_km: 5,
            min_quantity_kg: 0.5,
            food_types: vec![FoodType::Raw],
        };
        prefs.toggle_food_type(FoodType::Packaged);
        assert!(prefs.food_types.contains(&FoodType::Packaged));
        assert!(prefs.food_types.contains(&FoodType::Raw));
    }
}
