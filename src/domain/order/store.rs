use std::collections::HashMap;

use chrono::{DateTime, TimeZone};

use crate::query::{self, OrderQuery};

use super::aggregate::Order;
use super::errors::OrderError;
use super::events::{OrderEvent, OrderStatusChanged};
use super::value_objects::OrderId;

// ============================================================================
// Order Store - in-memory collection indexed by id
// ============================================================================
//
// Iteration follows insertion order, which is also the tie-break order of
// query results. Status changes replace the stored record and are appended
// to an in-memory history.
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: HashMap<OrderId, Order>,
    sequence: Vec<OrderId>,
    history: Vec<OrderStatusChanged>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_orders(orders: Vec<Order>) -> Result<Self, OrderError> {
        let mut store = Self::new();
        for order in orders {
            store.insert(order)?;
        }
        Ok(store)
    }

    pub fn insert(&mut self, order: Order) -> Result<(), OrderError> {
        order.validate()?;

        if self.orders.contains_key(&order.id) {
            return Err(OrderError::DuplicateId(order.id));
        }

        self.sequence.push(order.id.clone());
        self.orders.insert(order.id.clone(), order);
        Ok(())
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn find(&self, id: &OrderId) -> Result<&Order, OrderError> {
        self.get(id).ok_or_else(|| OrderError::NotFound(id.clone()))
    }

    /// Orders in insertion order
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.sequence.iter().filter_map(|id| self.orders.get(id))
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Swap in a new record for an existing id, keeping its position.
    ///
    /// Only `status` may differ from the stored record; anything else is
    /// rejected with [`OrderError::ImmutableFields`] and the store is untouched.
    pub fn replace(&mut self, order: Order) -> Result<Order, OrderError> {
        order.validate()?;

        let slot = match self.orders.get_mut(&order.id) {
            Some(slot) => slot,
            None => return Err(OrderError::NotFound(order.id)),
        };

        let status_only = Order {
            status: slot.status,
            ..order.clone()
        };
        if status_only != *slot {
            return Err(OrderError::ImmutableFields(order.id));
        }

        Ok(std::mem::replace(slot, order))
    }

    /// Apply an accepted event to the stored order and record it
    pub fn apply(&mut self, event: OrderEvent) -> Result<Order, OrderError> {
        let updated = self.find(event.order_id())?.apply_event(&event);
        self.replace(updated.clone())?;

        match event {
            OrderEvent::StatusChanged(e) => self.history.push(e),
        }

        Ok(updated)
    }

    pub fn history(&self) -> &[OrderStatusChanged] {
        &self.history
    }

    /// Filtered and sorted copy of the collection
    pub fn query<Tz: TimeZone>(&self, query: &OrderQuery, now: &DateTime<Tz>) -> Vec<Order> {
        query::run(self.orders(), query, now)
    }
}
