//! Category, restaurant and dish registries.
//!
//! Writes fail on uniqueness or existence violations and leave the catalog
//! untouched. Listings return empty results for unknown names.

use super::{Delivery, DeliveryError};
use crate::model::{Dish, Restaurant};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

impl Delivery {
    /// Registers a new category.
    pub fn add_category(&mut self, name: &str) -> Result<(), DeliveryError> {
        if self.has_category(name) {
            warn!(category = name, "Category already exists");
            return Err(DeliveryError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(name.to_string());
        info!(category = name, size = self.categories.len(), "Category added");
        Ok(())
    }

    /// Categories in registration order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Registers a restaurant under an existing category.
    pub fn add_restaurant(&mut self, name: &str, category: &str) -> Result<(), DeliveryError> {
        if !self.has_category(category) {
            warn!(restaurant = name, category, "Unknown category");
            return Err(DeliveryError::UnknownCategory(category.to_string()));
        }
        if self.restaurants.contains_key(name) {
            warn!(restaurant = name, "Restaurant already exists");
            return Err(DeliveryError::DuplicateRestaurant(name.to_string()));
        }
        self.restaurants
            .insert(name.to_string(), Restaurant::new(name, category));
        info!(restaurant = name, category, size = self.restaurants.len(), "Restaurant added");
        Ok(())
    }

    pub fn restaurant(&self, name: &str) -> Result<&Restaurant, DeliveryError> {
        self.restaurants
            .get(name)
            .ok_or_else(|| DeliveryError::NotFound(format!("restaurant {name}")))
    }

    /// Restaurants in iteration order, which is ascending by name.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    /// Names of the restaurants in `category`, sorted ascending.
    pub fn restaurants_in_category(&self, category: &str) -> Vec<String> {
        // The map iterates in key order, so the result is already sorted.
        self.restaurants()
            .filter(|r| r.category == category)
            .map(|r| r.name.clone())
            .collect()
    }

    /// Adds a dish to a restaurant's menu.
    ///
    /// Does nothing if the restaurant is unknown.
    pub fn add_dish(&mut self, restaurant: &str, dish: &str, price: f64) -> Result<(), DeliveryError> {
        let Some(entry) = self.restaurants.get_mut(restaurant) else {
            debug!(restaurant, dish, "Dish for unknown restaurant ignored");
            return Ok(());
        };
        if entry.has_dish(dish) {
            warn!(restaurant, dish, "Dish already on the menu");
            return Err(DeliveryError::DuplicateDish {
                restaurant: restaurant.to_string(),
                dish: dish.to_string(),
            });
        }
        entry.dishes.push(Dish::new(restaurant, dish, price));
        info!(restaurant, dish, price, menu = entry.dishes.len(), "Dish added");
        Ok(())
    }

    /// Dish names of a restaurant, sorted ascending.
    pub fn dishes_of_restaurant(&self, restaurant: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .restaurants
            .get(restaurant)
            .map(|r| r.dish_names().map(str::to_string).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Dish names of every restaurant in `category`, restaurant by restaurant
    /// in menu order.
    pub fn dishes_in_category(&self, category: &str) -> Vec<String> {
        if !self.has_category(category) {
            return Vec::new();
        }
        self.restaurants()
            .filter(|r| r.category == category)
            .flat_map(|r| r.dish_names().map(str::to_string))
            .collect()
    }

    /// Dishes priced within `[min, max]`, grouped by restaurant name.
    ///
    /// Restaurants without a matching dish are left out.
    pub fn dishes_by_price_range(&self, min: f64, max: f64) -> BTreeMap<String, Vec<String>> {
        self.restaurants()
            .filter_map(|r| {
                let names: Vec<String> = r
                    .dishes
                    .iter()
                    .filter(|d| d.priced_between(min, max))
                    .map(|d| d.name.clone())
                    .collect();
                (!names.is_empty()).then(|| (r.name.clone(), names))
            })
            .collect()
    }
}
