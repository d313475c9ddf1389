//! Aggregate root trait for domain models with a lifecycle.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is an entity that owns a consistency boundary (an order
/// and its cart, for instance) and tracks how many state changes it has seen.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Starts at 0 on construction and grows by one per state transition.
    fn version(&self) -> u64;
}
