//! API Gateway Library
//!
//! HTTP surface for the customer service: routing, JSON casing, status
//! codes and API documentation.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the store and serve HTTP until the process is stopped.
pub async fn run(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        service = %config.server.service_name,
        database = ?config.database,
        "Starting customer API"
    );

    let (database, customer_service) = customer_service_lib::bootstrap(&config.database).await?;
    let state = AppState::new(customer_service, database);

    let app = create_router(state);

    let addr: SocketAddr = config.server.addr().parse()?;
    info!("Customer API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
