use crate::domain::food::FoodItem;
use crate::domain::user::User;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save_user(&self, user: User) -> Result<()>;
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>>;
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>>;
}

#[async_trait]
pub trait FoodCatalog: Send + Sync {
    async fn list_foods(&self) -> Result<Vec<FoodItem>>;
}
