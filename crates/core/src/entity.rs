//! Entity trait: things with identity (products, customers).

/// An object that keeps its identity while its attributes change.
///
/// A product whose stock drops from 10 to 8 is still the same product.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
