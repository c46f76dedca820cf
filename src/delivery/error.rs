//! Error types for the delivery service.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during delivery service operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// A category with this name is already registered.
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// The referenced category is not registered.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A restaurant with this name is already registered.
    #[error("Restaurant already exists: {0}")]
    DuplicateRestaurant(String),

    /// The restaurant already sells a dish with this name.
    #[error("Dish {dish} already on the menu of {restaurant}")]
    DuplicateDish { restaurant: String, dish: String },

    /// Delivery time out of range or mismatched dish/quantity lists.
    #[error("Invalid order parameters: {0}")]
    InvalidOrderParameters(String),

    /// The referenced restaurant or order does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the service actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for DeliveryError {
    fn from(e: FrameworkError) -> Self {
        DeliveryError::ActorCommunication(e.to_string())
    }
}
