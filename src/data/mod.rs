pub mod food_catalog;
pub mod user_repository;
