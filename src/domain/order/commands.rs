// ============================================================================
// Order Commands - Represent staff intent
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderCommand {
    /// Move to the next status on the fulfilment chain
    Advance,
    /// Cancel the order, whatever its current status
    Cancel,
}
