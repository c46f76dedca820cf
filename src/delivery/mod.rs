//! # Delivery Service
//!
//! This module holds the whole marketplace state in one [`Delivery`] value:
//! the catalog (categories, restaurants, dishes), the rating ledger, the order
//! store and the delivery scheduler.
//!
//! ## Structure
//!
//! - [`catalog`] - Category, restaurant and dish registration and listings
//! - [`ratings`] - Rating submission and rating-based rankings
//! - [`orders`] - Order admission and lookups
//! - [`scheduler`] - Batched assignment of pending orders to delivery slots
//! - [`queries`] - Cross-cutting aggregations
//! - [`requests`] - [`DeliveryRequest`] messages and the actor [`Handler`](crate::framework::Handler)
//! - [`error`] - [`DeliveryError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! `Delivery` can be driven directly by a caller holding `&mut` access:
//!
//! ```rust
//! use food_delivery::delivery::Delivery;
//!
//! let mut delivery = Delivery::new();
//! delivery.add_category("Chinese").unwrap();
//! delivery.add_restaurant("Sol levante", "Chinese").unwrap();
//! delivery.add_dish("Sol levante", "Ravioli", 20.1).unwrap();
//! assert_eq!(delivery.dishes_of_restaurant("Sol levante"), vec!["Ravioli"]);
//! ```
//!
//! or shared between tasks through its actor:
//!
//! ```rust
//! use food_delivery::config::DeliveryConfig;
//! use food_delivery::delivery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = delivery::new(&DeliveryConfig::default());
//!     tokio::spawn(actor.run());
//!
//!     client.add_category("Traditional").await?;
//!     assert_eq!(client.categories().await?, vec!["Traditional"]);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod orders;
pub mod queries;
pub mod ratings;
pub mod requests;
pub mod scheduler;

pub use error::*;
pub use requests::*;

use crate::clients::DeliveryClient;
use crate::config::DeliveryConfig;
use crate::framework::Actor;
use crate::model::{Order, OrderId, Restaurant};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// The marketplace state.
///
/// Restaurants are kept in a name-ordered map, which is the iteration order of
/// every listing that is not explicitly sorted. Orders are kept by ID, which
/// is their arrival order.
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Categories in registration order.
    categories: Vec<String>,
    restaurants: BTreeMap<String, Restaurant>,
    orders: BTreeMap<OrderId, Order>,
    next_order_id: u32,
    delivery_hours: RangeInclusive<u8>,
}

impl Default for Delivery {
    fn default() -> Self {
        Self::new()
    }
}

impl Delivery {
    /// Creates an empty service accepting the default delivery hours.
    pub fn new() -> Self {
        Self::with_config(&DeliveryConfig::default())
    }

    pub fn with_config(config: &DeliveryConfig) -> Self {
        Self {
            categories: Vec::new(),
            restaurants: BTreeMap::new(),
            orders: BTreeMap::new(),
            next_order_id: 1,
            delivery_hours: config.delivery_hours(),
        }
    }
}

/// Creates a new Delivery actor and its client.
pub fn new(config: &DeliveryConfig) -> (Actor<Delivery>, DeliveryClient) {
    let capacity = config.mailbox_capacity.max(1);
    let (actor, mailbox) = Actor::new(Delivery::with_config(config), capacity);
    (actor, DeliveryClient::new(mailbox))
}
