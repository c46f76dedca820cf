//! # Delivery Client
//!
//! Provides a high-level API for interacting with the `Delivery` actor.
//! It wraps a `Mailbox<DeliveryRequest>` and exposes one async method per
//! service operation, with the same arguments and results as the synchronous
//! methods on [`Delivery`](crate::delivery::Delivery).
//!
//! Every method can additionally fail with
//! [`DeliveryError::ActorCommunication`] once the actor has stopped.
use crate::clients::actor_client::ActorClient;
use crate::delivery::{DeliveryError, DeliveryRequest};
use crate::framework::{FrameworkError, Mailbox};
use crate::model::{Order, OrderCreate, OrderId, Restaurant};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Client for interacting with the Delivery actor.
#[derive(Clone)]
pub struct DeliveryClient {
    inner: Mailbox<DeliveryRequest>,
}

impl DeliveryClient {
    pub fn new(inner: Mailbox<DeliveryRequest>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<DeliveryRequest> for DeliveryClient {
    type Error = DeliveryError;

    fn mailbox(&self) -> &Mailbox<DeliveryRequest> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DeliveryError::ActorCommunication(e.to_string())
    }
}

// Catalog
impl DeliveryClient {
    #[instrument(skip(self))]
    pub async fn add_category(&self, name: &str) -> Result<(), DeliveryError> {
        debug!("Sending request");
        let name = name.to_string();
        self.send_request(move |respond_to| DeliveryRequest::AddCategory { name, respond_to })
            .await?
    }

    /// Categories in registration order.
    pub async fn categories(&self) -> Result<Vec<String>, DeliveryError> {
        self.send_request(|respond_to| DeliveryRequest::Categories { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn add_restaurant(&self, name: &str, category: &str) -> Result<(), DeliveryError> {
        debug!("Sending request");
        let name = name.to_string();
        let category = category.to_string();
        self.send_request(move |respond_to| DeliveryRequest::AddRestaurant {
            name,
            category,
            respond_to,
        })
        .await?
    }

    /// Snapshot of a restaurant with its menu and ratings.
    #[instrument(skip(self))]
    pub async fn restaurant(&self, name: &str) -> Result<Restaurant, DeliveryError> {
        let name = name.to_string();
        self.send_request(move |respond_to| DeliveryRequest::GetRestaurant { name, respond_to })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn restaurants_in_category(&self, category: &str) -> Result<Vec<String>, DeliveryError> {
        let category = category.to_string();
        self.send_request(move |respond_to| DeliveryRequest::RestaurantsInCategory {
            category,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn add_dish(&self, restaurant: &str, dish: &str, price: f64) -> Result<(), DeliveryError> {
        debug!("Sending request");
        let restaurant = restaurant.to_string();
        let dish = dish.to_string();
        self.send_request(move |respond_to| DeliveryRequest::AddDish {
            restaurant,
            dish,
            price,
            respond_to,
        })
        .await?
    }

    #[instrument(skip(self))]
    pub async fn dishes_of_restaurant(&self, restaurant: &str) -> Result<Vec<String>, DeliveryError> {
        let restaurant = restaurant.to_string();
        self.send_request(move |respond_to| DeliveryRequest::DishesOfRestaurant {
            restaurant,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn dishes_in_category(&self, category: &str) -> Result<Vec<String>, DeliveryError> {
        let category = category.to_string();
        self.send_request(move |respond_to| DeliveryRequest::DishesInCategory {
            category,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn dishes_by_price_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<BTreeMap<String, Vec<String>>, DeliveryError> {
        self.send_request(move |respond_to| DeliveryRequest::DishesByPriceRange {
            min,
            max,
            respond_to,
        })
        .await
    }
}

// Orders and scheduling
impl DeliveryClient {
    #[instrument(skip(self, params), fields(restaurant = %params.restaurant))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, DeliveryError> {
        debug!(?params, "create_order called");
        self.send_request(move |respond_to| DeliveryRequest::CreateOrder { params, respond_to })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, DeliveryError> {
        self.send_request(move |respond_to| DeliveryRequest::GetOrder { id, respond_to })
            .await?
    }

    /// Assigns a batch of pending orders to `delivery_time` and returns their
    /// IDs in arrival order.
    #[instrument(skip(self))]
    pub async fn schedule_delivery(
        &self,
        delivery_time: u8,
        max_distance: u32,
        max_orders: usize,
    ) -> Result<Vec<OrderId>, DeliveryError> {
        debug!("Sending request");
        self.send_request(move |respond_to| DeliveryRequest::ScheduleDelivery {
            delivery_time,
            max_distance,
            max_orders,
            respond_to,
        })
        .await
    }

    pub async fn pending_order_count(&self) -> Result<usize, DeliveryError> {
        self.send_request(|respond_to| DeliveryRequest::PendingOrderCount { respond_to })
            .await
    }
}

// Ratings and aggregations
impl DeliveryClient {
    /// Returns whether the rating was recorded; out-of-range ratings are not.
    #[instrument(skip(self))]
    pub async fn add_rating(&self, restaurant: &str, rating: i32) -> Result<bool, DeliveryError> {
        debug!("Sending request");
        let restaurant = restaurant.to_string();
        self.send_request(move |respond_to| DeliveryRequest::AddRating {
            restaurant,
            rating,
            respond_to,
        })
        .await?
    }

    #[instrument(skip(self))]
    pub async fn average_rating(&self, restaurant: &str) -> Result<u32, DeliveryError> {
        let restaurant = restaurant.to_string();
        self.send_request(move |respond_to| DeliveryRequest::AverageRating {
            restaurant,
            respond_to,
        })
        .await
    }

    pub async fn restaurants_by_average_rating_desc(&self) -> Result<Vec<String>, DeliveryError> {
        self.send_request(|respond_to| DeliveryRequest::RestaurantsByAverageRating { respond_to })
            .await
    }

    pub async fn best_restaurant(&self) -> Result<Option<String>, DeliveryError> {
        self.send_request(|respond_to| DeliveryRequest::BestRestaurant { respond_to })
            .await
    }

    pub async fn orders_per_category(&self) -> Result<BTreeMap<String, usize>, DeliveryError> {
        self.send_request(|respond_to| DeliveryRequest::OrdersPerCategory { respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_mailbox, expect_request, MockMailbox};

    #[tokio::test]
    async fn test_add_category_forwards_name() {
        let (mailbox, mut receiver) = create_mock_mailbox::<DeliveryRequest>(10);
        let client = DeliveryClient::new(mailbox);

        // Spawn task to call add_category
        let task = tokio::spawn(async move { client.add_category("Chinese").await });

        // Expect the request
        match expect_request(&mut receiver).await {
            Some(DeliveryRequest::AddCategory { name, respond_to }) => {
                assert_eq!(name, "Chinese");
                respond_to.send(Ok(())).unwrap();
            }
            other => panic!("Expected AddCategory request, got {other:?}"),
        }

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_service_error_is_passed_through() {
        let (mailbox, mut receiver) = create_mock_mailbox::<DeliveryRequest>(10);
        let client = DeliveryClient::new(mailbox);

        let task = tokio::spawn(async move { client.add_restaurant("Taco Loco", "Mexican").await });

        match expect_request(&mut receiver).await {
            Some(DeliveryRequest::AddRestaurant {
                name,
                category,
                respond_to,
            }) => {
                assert_eq!(name, "Taco Loco");
                assert_eq!(category, "Mexican");
                respond_to
                    .send(Err(DeliveryError::UnknownCategory(category)))
                    .unwrap();
            }
            other => panic!("Expected AddRestaurant request, got {other:?}"),
        }

        assert_eq!(
            task.await.unwrap(),
            Err(DeliveryError::UnknownCategory("Mexican".to_string()))
        );
    }

    #[tokio::test]
    async fn test_schedule_delivery_forwards_arguments() {
        let mut mock = MockMailbox::<DeliveryRequest>::new();
        mock.expect(|request| match request {
            DeliveryRequest::ScheduleDelivery {
                delivery_time,
                max_distance,
                max_orders,
                respond_to,
            } => {
                assert_eq!((delivery_time, max_distance, max_orders), (10, 5, 3));
                let _ = respond_to.send(vec![OrderId(1), OrderId(2)]);
            }
            other => panic!("Expected ScheduleDelivery request, got {other:?}"),
        });

        let client = DeliveryClient::new(mock.mailbox());
        let batch = client.schedule_delivery(10, 5, 3).await.unwrap();
        assert_eq!(batch, vec![OrderId(1), OrderId(2)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_order_returns_id() {
        let mut mock = MockMailbox::<DeliveryRequest>::new();
        mock.expect(|request| match request {
            DeliveryRequest::CreateOrder { params, respond_to } => {
                assert_eq!(params.restaurant, "Sol levante");
                let _ = respond_to.send(Ok(OrderId(7)));
            }
            other => panic!("Expected CreateOrder request, got {other:?}"),
        });

        let client = DeliveryClient::new(mock.mailbox());
        let id = client
            .create_order(OrderCreate {
                dish_names: vec!["Ravioli".to_string()],
                quantities: vec![1],
                customer: "Judi Dench".to_string(),
                restaurant: "Sol levante".to_string(),
                delivery_time: 12,
                delivery_distance: 3,
            })
            .await
            .unwrap();
        assert_eq!(id, OrderId(7));
        mock.verify();
    }

    #[tokio::test]
    async fn test_unanswered_request_maps_to_communication_error() {
        // No expectations: the mock drops the reply channel.
        let mock = MockMailbox::<DeliveryRequest>::new();
        let client = DeliveryClient::new(mock.mailbox());

        let result = client.pending_order_count().await;
        assert!(matches!(result, Err(DeliveryError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn test_closed_mailbox_maps_to_communication_error() {
        let (mailbox, receiver) = create_mock_mailbox::<DeliveryRequest>(10);
        drop(receiver);
        let client = DeliveryClient::new(mailbox);

        match client.best_restaurant().await {
            Err(DeliveryError::ActorCommunication(msg)) => assert_eq!(msg, "Actor closed"),
            other => panic!("Expected ActorCommunication error, got {other:?}"),
        }
    }
}
