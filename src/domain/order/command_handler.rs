use super::aggregate::Order;
use super::commands::OrderCommand;
use super::errors::OrderError;
use super::store::OrderStore;
use super::value_objects::OrderId;

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: Command → Order → Event → Store
//
// ============================================================================

pub struct OrderCommandHandler<'a> {
    store: &'a mut OrderStore,
}

impl<'a> OrderCommandHandler<'a> {
    pub fn new(store: &'a mut OrderStore) -> Self {
        Self { store }
    }

    /// Handle a command against a stored order and return its replacement
    pub fn handle(&mut self, order_id: &OrderId, command: OrderCommand) -> Result<Order, OrderError> {
        let order = self.store.find(order_id)?;

        let event = order.handle_command(&command).map_err(|e| {
            tracing::warn!(
                order_id = %order_id,
                status = %order.status,
                command = ?command,
                "Command rejected: {}", e
            );
            e
        })?;

        tracing::debug!(
            order_id = %order_id,
            event_type = event.event_type(),
            "Applying order event"
        );

        let updated = self.store.apply(event)?;

        tracing::info!(
            order_id = %order_id,
            ticket = %updated.order_id,
            status = %updated.status,
            "Order status updated to {}", updated.status.label()
        );

        Ok(updated)
    }

    pub fn advance(&mut self, order_id: &OrderId) -> Result<Order, OrderError> {
        self.handle(order_id, OrderCommand::Advance)
    }

    pub fn cancel(&mut self, order_id: &OrderId) -> Result<Order, OrderError> {
        self.handle(order_id, OrderCommand::Cancel)
    }
}
