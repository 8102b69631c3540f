// ============================================================================
// order_desk - order lifecycle and query engine for a multi-platform
// restaurant order desk
// ============================================================================
//
// - domain::order: order record, status transitions, in-memory store
// - query: filter/sort views over the collection and their summaries
// - config: environment-driven runtime settings
// - dataset / sample_data: where the order collection comes from
//
// ============================================================================

pub mod config;
pub mod dataset;
pub mod domain;
pub mod query;
pub mod sample_data;

pub use domain::order::{
    DeliveryEta, Order, OrderCommand, OrderCommandHandler, OrderError, OrderId, OrderStatus,
    OrderStore, Platform,
};
pub use query::{OrderQuery, QueryError, QuerySummary};
