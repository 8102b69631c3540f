use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Events - Facts recorded after a command is accepted
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    StatusChanged(OrderStatusChanged),
}

impl OrderEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::StatusChanged(_) => "OrderStatusChanged",
        }
    }

    pub fn order_id(&self) -> &OrderId {
        match self {
            OrderEvent::StatusChanged(e) => &e.order_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusChanged {
    pub event_id: Uuid,
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

impl OrderStatusChanged {
    pub fn new(order_id: OrderId, from: OrderStatus, to: OrderStatus) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            order_id,
            from,
            to,
            occurred_at: Utc::now(),
        }
    }
}
