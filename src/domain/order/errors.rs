use rust_decimal::Decimal;

use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Order {0} not found")]
    NotFound(OrderId),

    #[error("An order with id {0} already exists")]
    DuplicateId(OrderId),

    #[error("Only the status of order {0} can change")]
    ImmutableFields(OrderId),

    #[error("Order in status {0} has no next status")]
    NoSuccessor(OrderStatus),

    #[error("Unknown order status: {0:?}")]
    InvalidStatus(String),

    #[error("Unknown platform: {0:?}")]
    InvalidPlatform(String),

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Invalid quantity for item {item}: {quantity}")]
    InvalidQuantity { item: String, quantity: u32 },

    #[error("Negative price for item {item}: {price}")]
    NegativePrice { item: String, price: Decimal },

    #[error("Negative order total: {0}")]
    NegativeTotal(Decimal),
}
