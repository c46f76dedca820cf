//! Request messages for the Delivery actor.
//!
//! Each variant maps 1:1 to a [`Delivery`] operation and carries the reply
//! channel for that operation's result. Write operations answer with
//! `Result<_, DeliveryError>`; read operations answer with plain values.
//!
//! See [`DeliveryClient`](crate::clients::DeliveryClient) for the typed API
//! that builds these messages.

use super::{Delivery, DeliveryError};
use crate::framework::{Handler, Response};
use crate::model::{Order, OrderCreate, OrderId, Restaurant};
use std::collections::BTreeMap;

#[derive(Debug)]
pub enum DeliveryRequest {
    AddCategory {
        name: String,
        respond_to: Response<Result<(), DeliveryError>>,
    },
    Categories {
        respond_to: Response<Vec<String>>,
    },
    AddRestaurant {
        name: String,
        category: String,
        respond_to: Response<Result<(), DeliveryError>>,
    },
    GetRestaurant {
        name: String,
        respond_to: Response<Result<Restaurant, DeliveryError>>,
    },
    RestaurantsInCategory {
        category: String,
        respond_to: Response<Vec<String>>,
    },
    AddDish {
        restaurant: String,
        dish: String,
        price: f64,
        respond_to: Response<Result<(), DeliveryError>>,
    },
    DishesOfRestaurant {
        restaurant: String,
        respond_to: Response<Vec<String>>,
    },
    DishesInCategory {
        category: String,
        respond_to: Response<Vec<String>>,
    },
    DishesByPriceRange {
        min: f64,
        max: f64,
        respond_to: Response<BTreeMap<String, Vec<String>>>,
    },
    CreateOrder {
        params: OrderCreate,
        respond_to: Response<Result<OrderId, DeliveryError>>,
    },
    GetOrder {
        id: OrderId,
        respond_to: Response<Result<Order, DeliveryError>>,
    },
    ScheduleDelivery {
        delivery_time: u8,
        max_distance: u32,
        max_orders: usize,
        respond_to: Response<Vec<OrderId>>,
    },
    PendingOrderCount {
        respond_to: Response<usize>,
    },
    AddRating {
        restaurant: String,
        rating: i32,
        respond_to: Response<Result<bool, DeliveryError>>,
    },
    AverageRating {
        restaurant: String,
        respond_to: Response<u32>,
    },
    RestaurantsByAverageRating {
        respond_to: Response<Vec<String>>,
    },
    BestRestaurant {
        respond_to: Response<Option<String>>,
    },
    OrdersPerCategory {
        respond_to: Response<BTreeMap<String, usize>>,
    },
}

impl Handler for Delivery {
    type Request = DeliveryRequest;

    // A failed send means the caller stopped waiting; the operation itself
    // has already been applied.
    fn handle(&mut self, request: DeliveryRequest) {
        match request {
            DeliveryRequest::AddCategory { name, respond_to } => {
                let _ = respond_to.send(self.add_category(&name));
            }
            DeliveryRequest::Categories { respond_to } => {
                let _ = respond_to.send(self.categories().to_vec());
            }
            DeliveryRequest::AddRestaurant {
                name,
                category,
                respond_to,
            } => {
                let _ = respond_to.send(self.add_restaurant(&name, &category));
            }
            DeliveryRequest::GetRestaurant { name, respond_to } => {
                let _ = respond_to.send(self.restaurant(&name).cloned());
            }
            DeliveryRequest::RestaurantsInCategory {
                category,
                respond_to,
            } => {
                let _ = respond_to.send(self.restaurants_in_category(&category));
            }
            DeliveryRequest::AddDish {
                restaurant,
                dish,
                price,
                respond_to,
            } => {
                let _ = respond_to.send(self.add_dish(&restaurant, &dish, price));
            }
            DeliveryRequest::DishesOfRestaurant {
                restaurant,
                respond_to,
            } => {
                let _ = respond_to.send(self.dishes_of_restaurant(&restaurant));
            }
            DeliveryRequest::DishesInCategory {
                category,
                respond_to,
            } => {
                let _ = respond_to.send(self.dishes_in_category(&category));
            }
            DeliveryRequest::DishesByPriceRange {
                min,
                max,
                respond_to,
            } => {
                let _ = respond_to.send(self.dishes_by_price_range(min, max));
            }
            DeliveryRequest::CreateOrder { params, respond_to } => {
                let _ = respond_to.send(self.create_order(params));
            }
            DeliveryRequest::GetOrder { id, respond_to } => {
                let _ = respond_to.send(self.order(id).cloned());
            }
            DeliveryRequest::ScheduleDelivery {
                delivery_time,
                max_distance,
                max_orders,
                respond_to,
            } => {
                let _ = respond_to.send(self.schedule_delivery(
                    delivery_time,
                    max_distance,
                    max_orders,
                ));
            }
            DeliveryRequest::PendingOrderCount { respond_to } => {
                let _ = respond_to.send(self.pending_order_count());
            }
            DeliveryRequest::AddRating {
                restaurant,
                rating,
                respond_to,
            } => {
                let _ = respond_to.send(self.add_rating(&restaurant, rating));
            }
            DeliveryRequest::AverageRating {
                restaurant,
                respond_to,
            } => {
                let _ = respond_to.send(self.average_rating(&restaurant));
            }
            DeliveryRequest::RestaurantsByAverageRating { respond_to } => {
                let _ = respond_to.send(self.restaurants_by_average_rating_desc());
            }
            DeliveryRequest::BestRestaurant { respond_to } => {
                let _ = respond_to.send(self.best_restaurant());
            }
            DeliveryRequest::OrdersPerCategory { respond_to } => {
                let _ = respond_to.send(self.orders_per_category());
            }
        }
    }
}
