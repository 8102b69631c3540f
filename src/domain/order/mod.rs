// ============================================================================
// Order Domain - Lifecycle of a delivery-platform order
// ============================================================================
//
// - Value objects (OrderId, Platform, OrderStatus, Customer, OrderItem)
// - Events (OrderStatusChanged)
// - Commands (Advance, Cancel)
// - Errors (OrderError enum)
// - Aggregate (Order with transition rules)
// - Store (OrderStore, indexed in-memory collection)
// - Command Handler (OrderCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod store;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use store::*;
pub use command_handler::*;
