use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::domain::order::{Order, OrderStatus};

/// Totals shown under a view of orders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySummary {
    pub count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    pub new_orders: usize,
    /// `None` when the view is empty
    #[serde(with = "rust_decimal::serde::float_option")]
    pub average_order_value: Option<Decimal>,
}

impl QuerySummary {
    pub fn of(view: &[Order]) -> Self {
        let revenue: Decimal = view.iter().map(|o| o.total_amount).sum();
        // Half-cents round away from zero, as money is displayed
        let average_order_value = (!view.is_empty()).then(|| {
            (revenue / Decimal::from(view.len()))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        });

        Self {
            count: view.len(),
            revenue,
            new_orders: view.iter().filter(|o| o.status == OrderStatus::New).count(),
            average_order_value,
        }
    }
}
