#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use feedback_core::gateways::notify::NotificationGateway;
use feedback_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
) {
    web::run(connections, enable_cors, cfg, notify_gw).await;
}
