pub mod error;
pub mod food;
pub mod repository;
pub mod response;
pub mod user;
