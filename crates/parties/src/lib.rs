//! Parties domain module (customers).

pub mod customer;

pub use customer::{ContactInfo, Customer};
