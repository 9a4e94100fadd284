use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::item::{FoodItem, ItemId};

const CATEGORIES: &[&str] = &[
    "Italian",
    "Mexican",
    "Asian",
    "American",
    "Mediterranean",
    "Indian",
    "French",
    "Thai",
    "Chinese",
    "Japanese",
];

const INGREDIENTS: &[&str] = &[
    "tomatoes",
    "onions",
    "garlic",
    "olive oil",
    "basil",
    "oregano",
    "cheese",
    "pasta",
    "rice",
    "chicken",
    "beef",
    "fish",
    "shrimp",
    "mushrooms",
    "bell peppers",
    "spinach",
    "avocado",
    "cilantro",
    "ginger",
    "soy sauce",
];

const TAGS: &[&str] = &[
    "spicy", "mild", "sweet", "savory", "creamy", "crispy", "tender", "fresh", "aromatic", "hearty",
];

const DISHES: &[&str] = &[
    "Margherita Pizza",
    "Chicken Tacos",
    "Pad Thai",
    "Caesar Salad",
    "Beef Stir Fry",
    "Fish Tacos",
    "Pasta Carbonara",
    "Chicken Curry",
    "Sushi Roll",
    "Greek Salad",
    "BBQ Ribs",
    "Vegetable Soup",
    "Chicken Wings",
    "Fried Rice",
    "Burger Deluxe",
    "Shrimp Scampi",
    "Chicken Parmesan",
    "Vegetable Stir Fry",
    "Beef Tacos",
    "Salmon Teriyaki",
    "Pasta Primavera",
    "Chicken Fried Rice",
    "Vegetable Curry",
    "Beef Burger",
    "Chicken Salad",
    "Fish and Chips",
    "Vegetable Pasta",
    "Chicken Teriyaki",
    "Beef Noodles",
    "Shrimp Fried Rice",
];

/// Generates `count` items with ids `1..=count`.
///
/// The same `seed` always produces the same catalog.
pub fn generate_catalog(count: usize, seed: u64) -> Vec<FoodItem> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (1..=count)
        .map(|id| generate_item(&mut rng, id as ItemId))
        .collect()
}

fn generate_item(rng: &mut ChaCha8Rng, id: ItemId) -> FoodItem {
    let dish = pick(rng, DISHES);
    let category = pick(rng, CATEGORIES);
    let ingredient_count = rng.gen_range(3..=7);
    let tag_count = rng.gen_range(1..=3);

    FoodItem {
        id,
        name: format!("{dish} {id}"),
        description: format!(
            "Delicious {} with fresh ingredients and authentic flavors. Perfect for any occasion.",
            dish.to_lowercase()
        ),
        category: category.to_string(),
        price: round_to(rng.gen_range(5.0..30.0), 100.0),
        rating: round_to(rng.gen_range(3.0..5.0), 10.0),
        image_url: format!("https://picsum.photos/300/200?random={id}"),
        calories: rng.gen_range(200..1000),
        prep_time_minutes: rng.gen_range(15..60),
        ingredients: pick_many(rng, INGREDIENTS, ingredient_count),
        is_vegetarian: rng.gen_bool(0.4),
        is_gluten_free: rng.gen_bool(0.3),
        tags: pick_many(rng, TAGS, tag_count),
    }
}

fn pick(rng: &mut ChaCha8Rng, values: &[&'static str]) -> &'static str {
    values[rng.gen_range(0..values.len())]
}

fn pick_many(rng: &mut ChaCha8Rng, values: &[&str], count: usize) -> Vec<String> {
    values
        .choose_multiple(rng, count)
        .map(|value| (*value).to_string())
        .collect()
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
