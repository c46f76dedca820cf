//! # Delivery Scheduler
//!
//! Pulls batches of pending orders for one delivery hour and marks them as
//! assigned.
//!
//! ## Batch selection
//!
//! Candidates are the pending orders whose delivery time equals the requested
//! hour and whose distance is within the cap, in arrival order. With `n`
//! candidates and a limit of `max_orders`:
//!
//! - `n <= max_orders`: the batch is every candidate.
//! - `n > max_orders`: the batch is the oldest `n - max_orders` candidates.
//!   The newest `max_orders` orders are held back for a later call.
//!
//! The batch is checked before any status changes: if one of its orders is
//! already assigned, the call returns an empty batch and assigns nothing.

use super::Delivery;
use crate::model::OrderId;
use tracing::{debug, info, warn};

/// Number of candidates taken, oldest first, out of `candidates`.
pub fn batch_size(candidates: usize, max_orders: usize) -> usize {
    if candidates <= max_orders {
        candidates
    } else {
        candidates - max_orders
    }
}

impl Delivery {
    /// Assigns a batch of pending orders to the `delivery_time` slot and
    /// returns their IDs in arrival order.
    pub fn schedule_delivery(
        &mut self,
        delivery_time: u8,
        max_distance: u32,
        max_orders: usize,
    ) -> Vec<OrderId> {
        let candidates: Vec<OrderId> = self
            .orders()
            .filter(|o| {
                o.is_pending()
                    && o.delivery_time == delivery_time
                    && o.delivery_distance <= max_distance
            })
            .map(|o| o.id)
            .collect();

        let batch = &candidates[..batch_size(candidates.len(), max_orders)];
        if batch.is_empty() {
            debug!(delivery_time, max_distance, max_orders, "No orders to schedule");
            return Vec::new();
        }

        if let Some(id) = batch
            .iter()
            .find(|id| !self.orders.get(*id).is_some_and(|o| o.is_pending()))
        {
            warn!(%id, delivery_time, "Order already assigned, batch aborted");
            return Vec::new();
        }

        for id in batch {
            if let Some(order) = self.orders.get_mut(id) {
                order.assign();
            }
        }
        info!(
            delivery_time,
            max_distance,
            max_orders,
            candidates = candidates.len(),
            assigned = batch.len(),
            pending = self.pending_order_count(),
            "Delivery scheduled"
        );
        batch.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderCreate, OrderStatus};

    fn delivery() -> Delivery {
        let mut delivery = Delivery::new();
        delivery.add_category("Chinese").unwrap();
        delivery.add_restaurant("Sol levante", "Chinese").unwrap();
        delivery.add_dish("Sol levante", "Ravioli", 20.1).unwrap();
        delivery
    }

    fn place(delivery: &mut Delivery, time: u8, distance: u32) -> OrderId {
        delivery
            .create_order(OrderCreate {
                dish_names: vec!["Ravioli".to_string()],
                quantities: vec![1],
                customer: "Ralph Fiennes".to_string(),
                restaurant: "Sol levante".to_string(),
                delivery_time: time,
                delivery_distance: distance,
            })
            .unwrap()
    }

    #[test]
    fn test_batch_size() {
        assert_eq!(batch_size(0, 3), 0);
        assert_eq!(batch_size(2, 3), 2);
        assert_eq!(batch_size(3, 3), 3);
        assert_eq!(batch_size(5, 3), 2);
        assert_eq!(batch_size(4, 0), 4);
    }

    #[test]
    fn test_schedules_all_candidates_within_limit() {
        let mut delivery = delivery();
        let first = place(&mut delivery, 10, 3);
        let second = place(&mut delivery, 10, 4);

        assert_eq!(delivery.schedule_delivery(10, 5, 2), vec![first, second]);
        assert_eq!(delivery.order(first).unwrap().status, OrderStatus::Assigned);
        assert_eq!(delivery.order(second).unwrap().status, OrderStatus::Assigned);
        assert_eq!(delivery.pending_order_count(), 0);

        assert!(delivery.schedule_delivery(10, 5, 2).is_empty());
    }

    #[test]
    fn test_filters_on_time_and_distance() {
        let mut delivery = delivery();
        let near = place(&mut delivery, 10, 5);
        let _far = place(&mut delivery, 10, 6);
        let _later = place(&mut delivery, 11, 1);

        assert_eq!(delivery.schedule_delivery(10, 5, 10), vec![near]);
        assert_eq!(delivery.pending_order_count(), 2);
    }

    #[test]
    fn test_over_capacity_takes_oldest_complement() {
        let mut delivery = delivery();
        let ids: Vec<OrderId> = (0..5).map(|_| place(&mut delivery, 12, 1)).collect();

        // Five candidates, limit three: the two oldest go out.
        assert_eq!(delivery.schedule_delivery(12, 10, 3), ids[..2].to_vec());
        assert_eq!(delivery.pending_order_count(), 3);

        // Three candidates left, within the limit.
        assert_eq!(delivery.schedule_delivery(12, 10, 3), ids[2..].to_vec());
        assert_eq!(delivery.pending_order_count(), 0);
    }

    #[test]
    fn test_assigned_orders_are_not_offered_again() {
        let mut delivery = delivery();
        let first = place(&mut delivery, 9, 1);
        assert_eq!(delivery.schedule_delivery(9, 1, 5), vec![first]);

        let second = place(&mut delivery, 9, 1);
        assert_eq!(delivery.schedule_delivery(9, 1, 5), vec![second]);
    }

    #[test]
    fn test_no_orders() {
        let mut delivery = delivery();
        assert!(delivery.schedule_delivery(10, 100, 10).is_empty());
    }
}
