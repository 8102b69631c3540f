use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::order::Order;

/// Parse an order collection from a JSON array
pub fn from_json_str(json: &str) -> Result<Vec<Order>> {
    serde_json::from_str(json).context("Failed to parse orders JSON")
}

/// Read an order collection from a JSON file
pub fn load_file(path: &Path) -> Result<Vec<Order>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read orders file {}", path.display()))?;

    let orders = from_json_str(&json)
        .with_context(|| format!("Invalid orders file {}", path.display()))?;

    tracing::info!(path = %path.display(), count = orders.len(), "Loaded orders");
    Ok(orders)
}
