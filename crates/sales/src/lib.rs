//! Sales domain module: carts, payment methods, orders and order processing.
//!
//! Pure, synchronous domain logic (no IO, no storage). Payment methods only
//! report their charges through `tracing`.

pub mod cart;
pub mod order;
pub mod payment;
pub mod processor;

pub use cart::{Cart, CartLine};
pub use order::{Order, OrderStatus, OrderSummary};
pub use payment::{CreditCardPayment, PayPalPayment, PaymentMethod};
pub use processor::{OrderProcessor, ProcessOutcome};
