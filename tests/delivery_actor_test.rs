use food_delivery::config::DeliveryConfig;
use food_delivery::delivery::{self, DeliveryError};
use food_delivery::model::{OrderCreate, OrderId};

fn order(restaurant: &str, time: u8) -> OrderCreate {
    OrderCreate {
        dish_names: vec!["Tagliatelle".to_string()],
        quantities: vec![1],
        customer: "Judi Dench".to_string(),
        restaurant: restaurant.to_string(),
        delivery_time: time,
        delivery_distance: 1,
    }
}

#[tokio::test]
async fn test_actor_returns_final_state_on_shutdown() {
    let (actor, client) = delivery::new(&DeliveryConfig::default());
    let handle = tokio::spawn(actor.run());

    client.add_category("Traditional").await.unwrap();
    client.add_restaurant("Da Mario", "Traditional").await.unwrap();
    client.add_dish("Da Mario", "Tagliatelle", 12.0).await.unwrap();
    client.create_order(order("Da Mario", 20)).await.unwrap();

    drop(client);
    let state = handle.await.unwrap();
    assert_eq!(state.dishes_of_restaurant("Da Mario"), vec!["Tagliatelle"]);
    assert_eq!(state.pending_order_count(), 1);
}

#[tokio::test]
async fn test_errors_cross_the_actor_boundary() {
    let (actor, client) = delivery::new(&DeliveryConfig::default());
    tokio::spawn(actor.run());

    assert_eq!(
        client.add_restaurant("Da Mario", "Traditional").await,
        Err(DeliveryError::UnknownCategory("Traditional".to_string()))
    );
    assert_eq!(
        client.create_order(order("Da Mario", 20)).await,
        Err(DeliveryError::NotFound("restaurant Da Mario".to_string()))
    );
    assert_eq!(
        client.add_rating("Da Mario", 4).await,
        Err(DeliveryError::NotFound("restaurant Da Mario".to_string()))
    );
    assert_eq!(
        client.order(OrderId(1)).await,
        Err(DeliveryError::NotFound("order_1".to_string()))
    );

    // Unknown names read as empty, not as errors.
    assert!(client.restaurants_in_category("Traditional").await.unwrap().is_empty());
    assert!(client.dishes_in_category("Traditional").await.unwrap().is_empty());
    assert_eq!(client.average_rating("Da Mario").await.unwrap(), 0);
    assert_eq!(client.best_restaurant().await.unwrap(), None);
}

#[tokio::test]
async fn test_restaurant_snapshot_is_detached() {
    let (actor, client) = delivery::new(&DeliveryConfig::default());
    tokio::spawn(actor.run());

    client.add_category("Traditional").await.unwrap();
    client.add_restaurant("Da Mario", "Traditional").await.unwrap();
    let before = client.restaurant("Da Mario").await.unwrap();

    client.add_dish("Da Mario", "Tagliatelle", 12.0).await.unwrap();
    client.add_rating("Da Mario", 4).await.unwrap();

    assert!(before.dishes.is_empty());
    let after = client.restaurant("Da Mario").await.unwrap();
    assert_eq!(after.dishes.len(), 1);
    assert_eq!(after.ratings, vec![4]);
}

#[tokio::test]
async fn test_stopped_actor_reports_communication_error() {
    let (actor, client) = delivery::new(&DeliveryConfig::default());
    drop(actor);

    let result = client.categories().await;
    assert!(matches!(result, Err(DeliveryError::ActorCommunication(_))));
}
