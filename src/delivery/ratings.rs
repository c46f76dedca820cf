//! Rating ledger.

use super::{Delivery, DeliveryError};
use crate::model::{Restaurant, MAX_RATING};
use std::cmp::Reverse;
use tracing::{debug, info};

impl Delivery {
    /// Records a customer rating for a restaurant.
    ///
    /// Ratings outside `0..=5` are discarded without error; the return value
    /// tells whether the rating was recorded.
    pub fn add_rating(&mut self, restaurant: &str, rating: i32) -> Result<bool, DeliveryError> {
        let entry = self
            .restaurants
            .get_mut(restaurant)
            .ok_or_else(|| DeliveryError::NotFound(format!("restaurant {restaurant}")))?;

        match u8::try_from(rating) {
            Ok(value) if value <= MAX_RATING => {
                entry.ratings.push(value);
                info!(restaurant, rating, count = entry.ratings.len(), "Rating added");
                Ok(true)
            }
            _ => {
                debug!(restaurant, rating, "Rating out of range discarded");
                Ok(false)
            }
        }
    }

    /// Truncated mean rating of a restaurant; 0 if unrated or unknown.
    pub fn average_rating(&self, restaurant: &str) -> u32 {
        self.restaurants
            .get(restaurant)
            .map_or(0, Restaurant::average_rating)
    }

    /// Names of rated restaurants, best average first.
    ///
    /// Equal averages keep restaurant iteration order.
    pub fn restaurants_by_average_rating_desc(&self) -> Vec<String> {
        let mut rated: Vec<&Restaurant> = self.restaurants().filter(|r| r.is_rated()).collect();
        rated.sort_by_key(|r| Reverse(r.average_rating()));
        rated.into_iter().map(|r| r.name.clone()).collect()
    }

    /// The restaurant with the highest average rating.
    ///
    /// Unrated restaurants count as 0. On a tie the first in iteration order
    /// wins. `None` when no restaurant is registered.
    pub fn best_restaurant(&self) -> Option<String> {
        self.restaurants()
            .fold(None::<&Restaurant>, |best, r| match best {
                Some(b) if b.average_rating() >= r.average_rating() => Some(b),
                _ => Some(r),
            })
            .map(|r| r.name.clone())
    }
}
