//! # Food Orders
//!
//! Order and kitchen schedule services built on [`record_framework`].
//!
//! - **[model]**: Wire types ([`Order`](model::Order), [`Schedule`](model::Schedule)) and their payloads
//! - **[order_actor]** / **[schedule_actor]**: Store wiring and domain errors
//! - **[clients]**: [`OrderClient`](clients::OrderClient) and [`ScheduleClient`](clients::ScheduleClient)
//! - **[lifecycle]**: [`FoodSystem`](lifecycle::FoodSystem), which starts and stops both stores
//! - **[config]**: [`SystemConfig`](config::SystemConfig), loaded from TOML

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod schedule_actor;
