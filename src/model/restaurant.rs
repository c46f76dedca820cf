//! Restaurants, their menus and their ratings.
//!
//! A [`Restaurant`] owns its [`Dish`]es and its rating list. Dishes point back
//! at their restaurant by name only.

use serde::{Deserialize, Serialize};

/// Highest rating a customer can give. The lowest is 0.
pub const MAX_RATING: u8 = 5;

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub price: f64,
    /// Name of the owning restaurant.
    pub restaurant: String,
}

impl Dish {
    pub fn new(restaurant: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            restaurant: restaurant.into(),
        }
    }

    /// Whether the price lies in `[min, max]`, limits included.
    pub fn priced_between(&self, min: f64, max: f64) -> bool {
        self.price >= min && self.price <= max
    }
}

/// A registered restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub category: String,
    /// Menu in insertion order.
    pub dishes: Vec<Dish>,
    pub ratings: Vec<u8>,
}

impl Restaurant {
    /// Creates a restaurant with an empty menu and no ratings.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            dishes: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn dish(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.name == name)
    }

    pub fn has_dish(&self, name: &str) -> bool {
        self.dish(name).is_some()
    }

    pub fn dish_names(&self) -> impl Iterator<Item = &str> {
        self.dishes.iter().map(|d| d.name.as_str())
    }

    pub fn is_rated(&self) -> bool {
        !self.ratings.is_empty()
    }

    /// Mean of all ratings, truncated toward zero. 0 when unrated.
    pub fn average_rating(&self) -> u32 {
        if self.ratings.is_empty() {
            return 0;
        }
        let sum: u32 = self.ratings.iter().map(|&r| u32::from(r)).sum();
        sum / self.ratings.len() as u32
    }
}
