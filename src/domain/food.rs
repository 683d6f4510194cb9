use serde::{Deserialize, Serialize};

/// Display classification for a food item. The wire format is a closed set:
/// any other string fails deserialization instead of being coerced to junk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Healthy,
    Junk,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Healthy => "healthy",
            FoodCategory::Junk => "junk",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub description: String,
    pub calories: u32,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    #[serde(rename = "type")]
    pub category: FoodCategory,
}
