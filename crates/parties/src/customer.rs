use serde::{Deserialize, Serialize};

use checkout_core::{CustomerId, Entity, OrderId};

/// Contact information for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub address: String,
}

/// Entity: Customer.
///
/// Keeps the ids of the orders placed, in placement order. History is
/// append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    contact: ContactInfo,
    orders: Vec<OrderId>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            contact: ContactInfo {
                email: email.into(),
                address: address.into(),
            },
            orders: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }

    pub fn address(&self) -> &str {
        &self.contact.address
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    /// Append an order to the history. No dedup, no validation.
    pub fn add_order(&mut self, order: impl Into<OrderId>) {
        let order_id = order.into();
        tracing::debug!(customer_id = %self.id, order_id = %order_id, "order added to history");
        self.orders.push(order_id);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Customer: {}, email = {}, address = {}",
            self.name, self.contact.email, self.contact.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivan() -> Customer {
        Customer::new("Ivan Ivanov", "ivan@example.com", "Moscow, Lenin Ave, 1")
    }

    #[test]
    fn new_customer_has_contact_details_and_no_orders() {
        let customer = ivan();
        assert_eq!(customer.name(), "Ivan Ivanov");
        assert_eq!(customer.email(), "ivan@example.com");
        assert_eq!(customer.address(), "Moscow, Lenin Ave, 1");
        assert!(customer.orders().is_empty());
    }

    #[test]
    fn add_order_appends_without_dedup() {
        let mut customer = ivan();
        let first = OrderId::new();
        let second = OrderId::new();

        customer.add_order(first);
        customer.add_order(second);
        customer.add_order(first);

        assert_eq!(customer.orders(), &[first, second, first]);
    }

    #[test]
    fn display_string() {
        assert_eq!(
            ivan().to_string(),
            "Customer: Ivan Ivanov, email = ivan@example.com, address = Moscow, Lenin Ave, 1"
        );
    }

    #[test]
    fn contact_info_serializes() {
        let json = serde_json::to_value(ivan().contact()).unwrap();
        assert_eq!(json["email"], "ivan@example.com");
    }
}
