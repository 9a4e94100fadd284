use serde::{Deserialize, Serialize};

/// Stable, unique catalog identifier.
pub type ItemId = u32;

/// A catalog entry. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub image_url: String,
    pub calories: u32,
    #[serde(rename = "prepTime")]
    pub prep_time_minutes: u32,
    pub ingredients: Vec<String>,
    pub is_vegetarian: bool,
    pub is_gluten_free: bool,
    pub tags: Vec<String>,
}

impl FoodItem {
    /// Case-insensitive substring match over name, description, category
    /// and tags. `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Formats the price as dollars with two decimals.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}
