use food_orders::config::{ConfigError, SystemConfig};
use food_orders::lifecycle::FoodSystem;
use food_orders::model::{
    OrderCreate, OrderItem, OrderQuery, OrderStatus, ScheduleCreate, ScheduleQuery, ScheduleStatus,
    Size,
};
use record_framework::RecordService;

#[tokio::test]
async fn test_order_to_kitchen_flow() {
    let system = FoodSystem::new(&SystemConfig::default()).unwrap();

    let order = system
        .order_client
        .create_order(OrderCreate::new(vec![
            OrderItem::new("Pizza", Size::Medium, 2),
            OrderItem::new("Lemonade", Size::Small, 1),
        ]))
        .await
        .unwrap();
    let order = system.order_client.pay(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Progress);

    let schedule = system
        .schedule_client
        .schedule(ScheduleCreate::from(&order))
        .await
        .unwrap();
    assert_eq!(schedule.items, order.items);
    assert_eq!(schedule.status, ScheduleStatus::Pending);

    system.schedule_client.advance(schedule.id).await.unwrap();
    system
        .schedule_client
        .transition(schedule.id, ScheduleStatus::Dispatched)
        .await
        .unwrap();
    system
        .order_client
        .transition(order.id, OrderStatus::Dispatched)
        .await
        .unwrap();

    let view = system.schedule_client.status(schedule.id).await.unwrap();
    assert_eq!(view.status, ScheduleStatus::Dispatched);

    // the stores are independent
    let orders = system.order_client.list_orders(OrderQuery::default()).await.unwrap();
    let schedules = system
        .schedule_client
        .list_schedules(ScheduleQuery::default())
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(schedules.len(), 1);
    assert_ne!(orders[0].id.0, schedules[0].id.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_clients_share_one_store() {
    let config = SystemConfig::from_toml_str("order_buffer = 2").unwrap();
    let system = FoodSystem::new(&config).unwrap();

    let mut tasks = Vec::new();
    for i in 0..10 {
        let client = system.order_client.clone();
        tasks.push(tokio::spawn(async move {
            let order = client
                .create_order(OrderCreate::new(vec![OrderItem::new("Pizza", Size::Big, i + 1)]))
                .await
                .unwrap();
            if i % 2 == 0 {
                client.cancel(order.id).await.unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let cancelled = system
        .order_client
        .list_orders(OrderQuery {
            cancelled: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    let open = system
        .order_client
        .list_orders(OrderQuery {
            cancelled: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(cancelled.len(), 5);
    assert_eq!(open.len(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_completes_with_idle_stores() {
    let system = FoodSystem::new(&SystemConfig::default()).unwrap();
    assert!(system.shutdown().await.is_ok());
}

#[tokio::test]
async fn test_zero_buffer_config_is_rejected() {
    let config = SystemConfig {
        order_buffer: 0,
        ..SystemConfig::default()
    };
    assert!(matches!(
        FoodSystem::new(&config),
        Err(ConfigError::ZeroBuffer("order_buffer"))
    ));
}

#[tokio::test]
async fn test_zero_buffer_store_factories_do_not_panic() {
    let (actor, client) = food_orders::order_actor::new(0);
    tokio::spawn(actor.run());

    let order = client
        .create_order(OrderCreate::new(vec![OrderItem::new("Pizza", Size::Small, 1)]))
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Created);
}
