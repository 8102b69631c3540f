use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_desk::config::DashboardConfig;
use order_desk::{dataset, sample_data};
use order_desk::{OrderCommandHandler, OrderStatus, OrderStore, QuerySummary};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_desk=debug"))
        )
        .init();

    let config = DashboardConfig::from_env()?;
    tracing::info!(
        orders_file = ?config.orders_file,
        utc_offset = %config.utc_offset,
        active_filters = config.query.active_filter_count(),
        "Starting order desk"
    );

    let now = Utc::now().with_timezone(&config.utc_offset);

    // === 1. Load the order collection ===
    let orders = match &config.orders_file {
        Some(path) => dataset::load_file(path)?,
        None => {
            tracing::info!("No orders file configured, using sample orders");
            sample_data::sample_orders(now.with_timezone(&Utc))
        }
    };
    let mut store = OrderStore::from_orders(orders)?;

    // === 2. Run the configured query ===
    let view = store.query(&config.query, &now);
    let summary = QuerySummary::of(&view);
    tracing::info!(
        matched = summary.count,
        total = store.len(),
        revenue = %summary.revenue,
        "Query complete"
    );

    println!("{}", serde_json::to_string_pretty(&view)?);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let utc_now = now.with_timezone(&Utc);
    for order in view.iter().filter(|o| !o.status.is_terminal()) {
        if let Some(eta) = order.delivery_eta(utc_now) {
            tracing::info!(order_id = %order.id, code = %order.order_id, %eta, "Delivery estimate");
        }
    }

    // === 3. Walk the first new order through its lifecycle ===
    let first_new = store
        .orders()
        .find(|o| o.status == OrderStatus::New)
        .map(|o| o.id.clone());

    let Some(order_id) = first_new else {
        tracing::info!("No new orders to process");
        return Ok(());
    };

    let mut handler = OrderCommandHandler::new(&mut store);
    let confirmed = handler.advance(&order_id)?;
    if confirmed.status.offers_cancel() {
        handler.cancel(&order_id)?;
    }

    for change in store.history() {
        tracing::info!(
            order_id = %change.order_id,
            from = %change.from,
            to = %change.to,
            event_id = %change.event_id,
            "Recorded status change"
        );
    }

    Ok(())
}
