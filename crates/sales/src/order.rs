use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use checkout_core::{
    AggregateRoot, CustomerId, DomainError, DomainResult, Entity, Money, OrderId,
};
use checkout_parties::Customer;

use crate::cart::Cart;
use crate::payment::PaymentMethod;

/// Order status lifecycle: `created` -> `processed` (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Processed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Processed => "processed",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable snapshot of an order, for logs and read models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub total: Money,
    pub lines: usize,
    pub payment_method: Option<String>,
}

/// Aggregate root: Order.
///
/// Binds a customer and the cart being bought. The customer is referenced by
/// id (plus the name, for display); the cart is owned.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    created_at: DateTime<Utc>,
    customer_id: CustomerId,
    customer_name: String,
    cart: Cart,
    status: OrderStatus,
    payment: Option<Box<dyn PaymentMethod>>,
    version: u64,
}

impl Order {
    pub fn new(customer: &Customer, cart: Cart) -> Self {
        Self::new_at(customer, cart, Utc::now())
    }

    pub fn new_at(customer: &Customer, cart: Cart, created_at: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::new(),
            created_at,
            customer_id: *customer.id(),
            customer_name: customer.name().to_owned(),
            cart,
            status: OrderStatus::Created,
            payment: None,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn payment(&self) -> Option<&dyn PaymentMethod> {
        self.payment.as_deref()
    }

    pub fn has_payment(&self) -> bool {
        self.payment.is_some()
    }

    pub fn total(&self) -> Money {
        self.cart.get_total()
    }

    /// Attach a payment method. Whether it was actually charged is not checked.
    pub fn set_payment(&mut self, payment: Box<dyn PaymentMethod>) {
        tracing::debug!(order_id = %self.id, method = payment.method_name(), "payment attached");
        self.payment = Some(payment);
        self.version += 1;
    }

    /// Commit the cart's stock changes and mark the order processed.
    ///
    /// Requires a payment. Cart errors propagate and leave the status
    /// untouched. There is no guard against processing twice: a second call
    /// deducts stock again.
    pub fn process(&mut self) -> DomainResult<()> {
        if self.payment.is_none() {
            return Err(DomainError::precondition("payment must be set before processing"));
        }
        self.cart.apply_stock_changes()?;
        self.status = OrderStatus::Processed;
        self.version += 1;
        tracing::debug!(order_id = %self.id, "order processed");
        Ok(())
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            created_at: self.created_at,
            status: self.status,
            customer_id: self.customer_id,
            customer_name: self.customer_name.clone(),
            total: self.total(),
            lines: self.cart.len(),
            payment_method: self.payment.as_ref().map(|p| p.method_name().to_owned()),
        }
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl From<&Order> for OrderId {
    fn from(order: &Order) -> Self {
        order.id
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order: created = {}, status = {}, customer = {}, total = {}",
            self.created_at.format("%Y%m%d%H%M%S"),
            self.status,
            self.customer_name,
            self.total()
        )
    }
}
