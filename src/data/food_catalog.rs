use crate::domain::food::{FoodCategory, FoodItem};
use crate::domain::repository::FoodCatalog;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{instrument, trace};

/// Read-only food catalog held in memory. The dataset is fixed at
/// construction; `sample()` provides the stock 28-item set.
#[derive(Clone)]
pub struct StaticFoodCatalog {
    foods: Vec<FoodItem>,
}

impl StaticFoodCatalog {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    pub fn sample() -> Self {
        Self::new(sample_foods())
    }
}

#[async_trait]
impl FoodCatalog for StaticFoodCatalog {
    #[instrument(skip(self))]
    async fn list_foods(&self) -> Result<Vec<FoodItem>> {
        trace!(count = self.foods.len(), "Listing catalog foods");
        Ok(self.foods.clone())
    }
}

fn food(
    name: &str,
    category: FoodCategory,
    calories: u32,
    protein: f64,
    fat: f64,
    carbs: f64,
    description: &str,
) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        description: description.to_string(),
        calories,
        protein,
        fat,
        carbs,
        category,
    }
}

pub fn sample_foods() -> Vec<FoodItem> {
    use FoodCategory::{Healthy, Junk};
    vec![
        food("Burger", Junk, 500, 25.0, 30.0, 40.0, "A classic fast-food item with a juicy patty, cheese, and sauces."),
        food("Pizza", Junk, 600, 20.0, 35.0, 50.0, "Cheesy and savory with high calories, often topped with processed meat."),
        food("French Fries", Junk, 400, 5.0, 20.0, 50.0, "Crispy potato fries deep-fried in oil, very high in fat."),
        food("Fried Chicken", Junk, 700, 30.0, 40.0, 45.0, "Crispy fried chicken with crunchy coating and lots of calories."),
        food("Soft Drink (Cola)", Junk, 150, 0.0, 0.0, 39.0, "Sugary carbonated drink, no nutrition, only empty calories."),
        food("Ice Cream", Junk, 300, 5.0, 15.0, 35.0, "Cold dessert with sugar and fat, very tempting but unhealthy."),
        food("Hot Dog", Junk, 450, 15.0, 25.0, 35.0, "Processed meat sausage in bread, rich in sodium and fats."),
        food("Donut", Junk, 320, 4.0, 18.0, 37.0, "Deep-fried sweet snack loaded with sugar and refined carbs."),
        food("Nachos", Junk, 350, 6.0, 20.0, 40.0, "Crispy chips with cheese and toppings, high in fats."),
        food("Chocolate Bar", Junk, 250, 3.0, 12.0, 30.0, "Sweet treat with sugar and fat, offers quick energy."),
        food("Chips", Junk, 200, 2.0, 15.0, 20.0, "Crispy packaged snack, high in salt and oil."),
        food("Cake", Junk, 450, 6.0, 20.0, 55.0, "Sweet baked dessert, high in sugar and butter."),
        food("Milkshake", Junk, 380, 10.0, 15.0, 50.0, "Sweet blended drink with ice cream, milk, and syrup."),
        food("Popcorn (Butter)", Junk, 300, 5.0, 20.0, 35.0, "Movie snack with added butter and salt, not healthy."),
        food("Salad", Healthy, 150, 5.0, 5.0, 20.0, "A mix of fresh vegetables, rich in vitamins and fiber."),
        food("Grilled Chicken", Healthy, 250, 35.0, 5.0, 10.0, "Lean protein source, cooked without excess oil."),
        food("Apple", Healthy, 95, 0.5, 0.3, 25.0, "A nutritious fruit rich in fiber and antioxidants."),
        food("Banana", Healthy, 105, 1.3, 0.3, 27.0, "Good source of potassium and quick energy."),
        food("Brown Rice", Healthy, 215, 5.0, 1.8, 45.0, "Whole grain rich in fiber and slow-digesting carbs."),
        food("Oatmeal", Healthy, 150, 6.0, 3.0, 27.0, "Great breakfast option with fiber and protein."),
        food("Greek Yogurt", Healthy, 120, 12.0, 4.0, 9.0, "High protein dairy product, good for gut health."),
        food("Almonds (10 pcs)", Healthy, 70, 3.0, 6.0, 2.0, "Nuts rich in healthy fats and vitamin E."),
        food("Carrots", Healthy, 50, 1.0, 0.2, 12.0, "Crunchy vegetable rich in Vitamin A for good vision."),
        food("Spinach", Healthy, 25, 3.0, 0.5, 4.0, "Leafy green packed with iron and vitamins."),
        food("Broccoli", Healthy, 55, 4.0, 0.5, 11.0, "Rich in antioxidants and fiber, great for immunity."),
        food("Strawberries", Healthy, 60, 1.0, 0.5, 15.0, "Sweet fruit packed with vitamin C and antioxidants."),
        food("Fish (Salmon)", Healthy, 220, 25.0, 13.0, 0.0, "High in protein and omega-3 fatty acids."),
        food("Eggs (Boiled)", Healthy, 78, 6.0, 5.0, 1.0, "Excellent protein-rich food with healthy fats."),
    ]
}
