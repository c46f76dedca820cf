//! Order admission and lookups.

use super::{Delivery, DeliveryError};
use crate::model::{Order, OrderCreate, OrderId};
use tracing::{info, warn};

impl Delivery {
    /// Admits a new order and returns its ID.
    ///
    /// IDs start at 1 and grow by one per admitted order. A rejected order
    /// does not consume an ID.
    pub fn create_order(&mut self, params: OrderCreate) -> Result<OrderId, DeliveryError> {
        if let Err(e) = self.check_order(&params) {
            warn!(restaurant = %params.restaurant, error = %e, "Order rejected");
            return Err(e);
        }

        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        let order = Order::new(id, params);
        info!(
            %id,
            restaurant = %order.restaurant,
            delivery_time = order.delivery_time,
            delivery_distance = order.delivery_distance,
            "Order created"
        );
        self.orders.insert(id, order);
        Ok(id)
    }

    fn check_order(&self, params: &OrderCreate) -> Result<(), DeliveryError> {
        if !self.delivery_hours.contains(&params.delivery_time) {
            return Err(DeliveryError::InvalidOrderParameters(format!(
                "delivery time {} outside {}..={}",
                params.delivery_time,
                self.delivery_hours.start(),
                self.delivery_hours.end()
            )));
        }
        if params.dish_names.len() != params.quantities.len() {
            return Err(DeliveryError::InvalidOrderParameters(format!(
                "{} dishes but {} quantities",
                params.dish_names.len(),
                params.quantities.len()
            )));
        }
        if !self.restaurants.contains_key(&params.restaurant) {
            return Err(DeliveryError::NotFound(format!("restaurant {}", params.restaurant)));
        }
        Ok(())
    }

    pub fn order(&self, id: OrderId) -> Result<&Order, DeliveryError> {
        self.orders
            .get(&id)
            .ok_or_else(|| DeliveryError::NotFound(id.to_string()))
    }

    /// All orders in arrival order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Number of orders not yet assigned to a delivery batch.
    pub fn pending_order_count(&self) -> usize {
        self.orders().filter(|o| o.is_pending()).count()
    }
}
