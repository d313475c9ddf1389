//! Products domain module.
//!
//! Inventory units (physical and digital products) and the shared handle carts
//! use to reference them.

pub mod product;

pub use product::{Product, ProductKind, SharedProduct};
