//! Aggregations across the catalog and the order store.

use super::Delivery;
use std::collections::BTreeMap;

impl Delivery {
    /// Number of orders ever placed per category, assigned or not.
    ///
    /// Every registered category is present, with 0 if it has no orders.
    pub fn orders_per_category(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> =
            self.categories.iter().map(|c| (c.clone(), 0)).collect();
        for order in self.orders() {
            let Some(restaurant) = self.restaurants.get(&order.restaurant) else {
                continue;
            };
            if let Some(count) = counts.get_mut(&restaurant.category) {
                *count += 1;
            }
        }
        counts
    }
}
