// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Orders and the rules for moving them through fulfilment. Views over the
// collection live in crate::query.
//
// ============================================================================

pub mod order;
