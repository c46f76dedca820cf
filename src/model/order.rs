//! Customer orders and their delivery status.
//!
//! Orders reference their restaurant by name and move through exactly one
//! status transition: [`OrderStatus::NotYetAssigned`] to [`OrderStatus::Assigned`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Sequential order identifier. The first order is `OrderId(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    NotYetAssigned,
    Assigned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    /// Name of the restaurant the order was placed with.
    pub restaurant: String,
    /// Requested quantity per dish name.
    pub dishes: BTreeMap<String, u32>,
    /// Hour of the day, 8 to 23.
    pub delivery_time: u8,
    /// Kilometers.
    pub delivery_distance: u32,
    pub status: OrderStatus,
}

/// Payload for creating a new order.
///
/// `dish_names` and `quantities` are parallel lists: the n-th quantity belongs
/// to the n-th dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub dish_names: Vec<String>,
    pub quantities: Vec<u32>,
    pub customer: String,
    pub restaurant: String,
    pub delivery_time: u8,
    pub delivery_distance: u32,
}

impl Order {
    /// Builds a pending order from its creation payload.
    ///
    /// A dish named twice keeps the quantity given last.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let dishes = params
            .dish_names
            .into_iter()
            .zip(params.quantities)
            .collect();
        Self {
            id,
            customer: params.customer,
            restaurant: params.restaurant,
            dishes,
            delivery_time: params.delivery_time,
            delivery_distance: params.delivery_distance,
            status: OrderStatus::NotYetAssigned,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::NotYetAssigned
    }

    /// Marks the order as assigned to a delivery batch.
    pub fn assign(&mut self) {
        self.status = OrderStatus::Assigned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(names: &[&str], quantities: &[u32]) -> OrderCreate {
        OrderCreate {
            dish_names: names.iter().map(|n| n.to_string()).collect(),
            quantities: quantities.to_vec(),
            customer: "Judi Dench".to_string(),
            restaurant: "Sol levante".to_string(),
            delivery_time: 10,
            delivery_distance: 3,
        }
    }

    #[test]
    fn test_dishes_pair_positionally() {
        let order = Order::new(OrderId(1), params(&["Ravioli", "Involtini primavera"], &[2, 5]));
        assert_eq!(order.dishes.get("Ravioli"), Some(&2));
        assert_eq!(order.dishes.get("Involtini primavera"), Some(&5));
        assert!(order.is_pending());
    }

    #[test]
    fn test_repeated_dish_keeps_last_quantity() {
        let order = Order::new(OrderId(7), params(&["Ravioli", "Ravioli"], &[1, 4]));
        assert_eq!(order.dishes.len(), 1);
        assert_eq!(order.dishes["Ravioli"], 4);
    }

    #[test]
    fn test_assign_is_terminal() {
        let mut order = Order::new(OrderId(2), params(&[], &[]));
        order.assign();
        assert_eq!(order.status, OrderStatus::Assigned);
        assert!(!order.is_pending());
        assert_eq!(order.id.to_string(), "order_2");
    }
}
