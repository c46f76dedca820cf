//! # Food Delivery Demo
//!
//! Starts a [`DeliverySystem`], registers a small catalog, places a few orders,
//! rates the restaurants and schedules a delivery batch.
//!
//! Configuration comes from the `DELIVERY_*` environment variables (see
//! [`food_delivery::config`]), log levels from `RUST_LOG`.

use food_delivery::config::DeliveryConfig;
use food_delivery::delivery::DeliveryError;
use food_delivery::lifecycle::{setup_tracing, DeliverySystem};
use food_delivery::model::OrderCreate;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = DeliveryConfig::from_env().map_err(|e| e.to_string())?;
    let system = DeliverySystem::with_config(config).map_err(|e| e.to_string())?;
    let client = system.client.clone();

    let span = tracing::info_span!("setup");
    async {
        for category in ["Chinese", "Traditional", "Mexican"] {
            client.add_category(category).await?;
        }
        client.add_restaurant("Sol levante", "Chinese").await?;
        client.add_restaurant("Bamboo", "Chinese").await?;
        client.add_restaurant("Da Mario", "Traditional").await?;
        client.add_dish("Sol levante", "Involtini primavera", 10.1).await?;
        client.add_dish("Sol levante", "Ravioli", 20.1).await?;
        client.add_dish("Bamboo", "Spring rolls", 5.5).await?;
        client.add_dish("Da Mario", "Tagliatelle", 12.0).await?;
        Ok::<(), DeliveryError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let cheap = client
        .dishes_by_price_range(8.1, 18.1)
        .await
        .map_err(|e| e.to_string())?;
    info!(?cheap, "Dishes between 8.1 and 18.1");

    let span = tracing::info_span!("ordering");
    async {
        for (customer, restaurant, distance) in [
            ("Judi Dench", "Sol levante", 3),
            ("Ralph Fiennes", "Sol levante", 4),
            ("Maggie Smith", "Da Mario", 2),
        ] {
            let params = OrderCreate {
                dish_names: vec!["Ravioli".to_string()],
                quantities: vec![2],
                customer: customer.to_string(),
                restaurant: restaurant.to_string(),
                delivery_time: 10,
                delivery_distance: distance,
            };
            match client.create_order(params).await {
                Ok(id) => info!(%id, customer, "Order placed"),
                Err(e) => error!(error = %e, customer, "Order failed"),
            }
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("rating");
    async {
        for (restaurant, rating) in [("Sol levante", 5), ("Sol levante", 3), ("Da Mario", 4), ("Da Mario", 6)] {
            if let Err(e) = client.add_rating(restaurant, rating).await {
                error!(error = %e, restaurant, "Rating failed");
            }
        }
    }
    .instrument(span)
    .await;

    let ranking = client
        .restaurants_by_average_rating_desc()
        .await
        .map_err(|e| e.to_string())?;
    let best = client.best_restaurant().await.map_err(|e| e.to_string())?;
    info!(?ranking, ?best, "Ratings");

    let span = tracing::info_span!("dispatch");
    let batch = async { client.schedule_delivery(10, 5, 2).await }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    info!(?batch, "Batch scheduled");

    let per_category = client.orders_per_category().await.map_err(|e| e.to_string())?;
    info!(?per_category, "Orders per category");

    // Shutdown system gracefully
    drop(client);
    let state = system.shutdown().await?;

    info!(pending = state.pending_order_count(), "Application completed successfully");
    Ok(())
}
