use crate::domain::food::FoodItem;
use crate::domain::repository::FoodCatalog;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct NutritionService<C: FoodCatalog> {
    catalog: Arc<C>,
}

impl<C: FoodCatalog> NutritionService<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    #[instrument(skip(self))]
    pub async fn list_foods(&self) -> Result<Vec<FoodItem>> {
        let foods = self.catalog.list_foods().await?;
        info!(count = foods.len(), "Loaded nutrition dataset");
        Ok(foods)
    }
}
