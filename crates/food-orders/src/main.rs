//! # Food Orders demo
//!
//! Runs one order through both services:
//! 1. Starts the [`FoodSystem`] from a TOML config (`--config`, defaults otherwise).
//! 2. Places a Pizza order and pays for it.
//! 3. Schedules the order's lines in the kitchen and starts preparation.
//! 4. Cancels the order and lists what is still open.

use clap::Parser;
use food_orders::config::SystemConfig;
use food_orders::lifecycle::FoodSystem;
use food_orders::model::{OrderCreate, OrderItem, OrderQuery, ScheduleCreate, ScheduleQuery, Size};
use record_framework::tracing::setup_tracing;
use std::error::Error;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SystemConfig::from_file(path)?,
        None => SystemConfig::default(),
    };

    setup_tracing(&config.log_level);
    info!(?config, "Starting food system");

    let system = FoodSystem::new(&config)?;

    let span = tracing::info_span!("order_placement");
    let order = async {
        let params = OrderCreate::new(vec![OrderItem::new("Pizza", Size::Medium, 2)]);
        let order = system.order_client.create_order(params).await?;
        system.order_client.pay(order.id).await
    }
    .instrument(span)
    .await?;
    info!(order_id = %order.id, status = ?order.status, "Order paid");

    let span = tracing::info_span!("kitchen");
    let schedule = async {
        let schedule = system
            .schedule_client
            .schedule(ScheduleCreate::from(&order))
            .await?;
        system.schedule_client.advance(schedule.id).await
    }
    .instrument(span)
    .await?;
    let view = system.schedule_client.status(schedule.id).await?;
    info!(schedule_id = %schedule.id, status = ?view.status, "Preparation started");

    system.order_client.cancel(order.id).await?;

    let open = system
        .order_client
        .list_orders(OrderQuery {
            cancelled: Some(false),
            ..Default::default()
        })
        .await?;
    let cooking = system
        .schedule_client
        .list_schedules(ScheduleQuery {
            progress: Some(true),
            ..Default::default()
        })
        .await?;
    info!(open = open.len(), cooking = cooking.len(), "Final state");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
