pub mod auth_service;
pub mod nutrition_service;
