use crate::domain::food::FoodItem;
use serde::{Deserialize, Serialize};

/// Envelope returned by the auth endpoints. Shared by the server handlers
/// and the headless client so both sides agree on the wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Envelope returned by `GET /api/nutrition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<FoodItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NutritionResponse {
    pub fn ok(foods: Vec<FoodItem>) -> Self {
        Self {
            success: true,
            foods: Some(foods),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            foods: None,
            message: Some(message.into()),
        }
    }
}
