use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::commands::OrderCommand;
use super::errors::OrderError;
use super::events::{OrderEvent, OrderStatusChanged};
use super::value_objects::{Customer, OrderId, OrderItem, OrderStatus, Platform};

// ============================================================================
// Order - the record every view and transition works on
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    // Identity
    pub id: OrderId,
    /// Ticket code shown to staff, e.g. `#GT-67890`
    pub order_id: String,
    pub platform: Platform,

    // Current State
    pub status: OrderStatus,

    pub customer: Customer,
    pub items: Vec<OrderItem>,
    /// Stored as supplied by the platform, not recomputed from `items`
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Validate the record is well formed before it enters a store
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        for item in &self.items {
            if item.quantity == 0 {
                return Err(OrderError::InvalidQuantity {
                    item: item.name.clone(),
                    quantity: item.quantity,
                });
            }
            if item.price < Decimal::ZERO {
                return Err(OrderError::NegativePrice {
                    item: item.name.clone(),
                    price: item.price,
                });
            }
            for option in &item.options {
                if let Some(price) = option.price {
                    if price < Decimal::ZERO {
                        return Err(OrderError::NegativePrice {
                            item: format!("{} ({})", item.name, option.name),
                            price,
                        });
                    }
                }
            }
        }

        if self.total_amount < Decimal::ZERO {
            return Err(OrderError::NegativeTotal(self.total_amount));
        }

        Ok(())
    }

    /// Sum of `price * quantity` over the line items
    pub fn items_subtotal(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn total_matches_items(&self) -> bool {
        self.items_subtotal() == self.total_amount
    }

    /// True when the order is at or past `step` on the fulfilment timeline
    pub fn has_reached(&self, step: OrderStatus) -> bool {
        match (self.status.timeline_position(), step.timeline_position()) {
            (Some(current), Some(step)) => current >= step,
            _ => false,
        }
    }

    /// Decide which event a command produces, without changing the order
    pub fn handle_command(&self, command: &OrderCommand) -> Result<OrderEvent, OrderError> {
        let to = match command {
            OrderCommand::Advance => self
                .status
                .next()
                .ok_or(OrderError::NoSuccessor(self.status))?,
            // No guard: cancelling a delivered or cancelled order is accepted
            OrderCommand::Cancel => OrderStatus::Cancelled,
        };

        Ok(OrderEvent::StatusChanged(OrderStatusChanged::new(
            self.id.clone(),
            self.status,
            to,
        )))
    }

    /// New record with the event applied; every other field is kept
    pub fn apply_event(&self, event: &OrderEvent) -> Order {
        match event {
            OrderEvent::StatusChanged(e) => Order {
                status: e.to,
                ..self.clone()
            },
        }
    }

    /// The order moved one step along the chain.
    ///
    /// Fails with [`OrderError::NoSuccessor`] on `delivered` and `cancelled`.
    pub fn advanced(&self) -> Result<Order, OrderError> {
        let event = self.handle_command(&OrderCommand::Advance)?;
        Ok(self.apply_event(&event))
    }

    /// The order with status `cancelled`, from any starting status
    pub fn cancelled(&self) -> Order {
        Order {
            status: OrderStatus::Cancelled,
            ..self.clone()
        }
    }

    /// Whole minutes left until the estimated delivery, negative once overdue
    pub fn minutes_until_delivery(&self, now: DateTime<Utc>) -> Option<i64> {
        self.estimated_delivery_time
            .map(|eta| (eta - now).num_minutes())
    }

    /// Countdown shown on the order card, `None` without an estimate
    pub fn delivery_eta(&self, now: DateTime<Utc>) -> Option<DeliveryEta> {
        self.estimated_delivery_time.map(|eta| {
            if eta < now {
                DeliveryEta::Overdue
            } else {
                DeliveryEta::Remaining {
                    minutes: (eta - now).num_minutes(),
                }
            }
        })
    }
}

// ============================================================================
// Delivery ETA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryEta {
    Overdue,
    Remaining { minutes: i64 },
}

impl fmt::Display for DeliveryEta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DeliveryEta::Overdue => f.write_str("Geçmiş"),
            DeliveryEta::Remaining { minutes } if minutes < 60 => write!(f, "{minutes} dk"),
            DeliveryEta::Remaining { minutes } => {
                write!(f, "{}s {}dk", minutes / 60, minutes % 60)
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
