//! Demo configuration loaded from environment variables.

use checkout_sales::{CreditCardPayment, PayPalPayment, PaymentMethod};

const DEFAULT_CARD_NUMBER: &str = "1234567890123456";
const DEFAULT_PAYPAL_EMAIL: &str = "ivan@example.com";

/// Which payment method the demo checks out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    Card,
    PayPal,
}

/// Reads from environment variables:
/// - `CHECKOUT_PAYMENT_METHOD`: `card` (default) or `paypal`
/// - `CHECKOUT_CARD_NUMBER`: card number (default: `"1234567890123456"`)
/// - `CHECKOUT_PAYPAL_EMAIL`: PayPal account (default: `"ivan@example.com"`)
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub payment: PaymentChoice,
    pub card_number: String,
    pub paypal_email: String,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let payment = match lookup("CHECKOUT_PAYMENT_METHOD").as_deref().map(str::trim) {
            None | Some("card") => PaymentChoice::Card,
            Some("paypal") => PaymentChoice::PayPal,
            Some(other) => {
                tracing::warn!(method = other, "unknown payment method; using card");
                PaymentChoice::Card
            }
        };
        Self {
            payment,
            card_number: lookup("CHECKOUT_CARD_NUMBER")
                .unwrap_or_else(|| DEFAULT_CARD_NUMBER.to_string()),
            paypal_email: lookup("CHECKOUT_PAYPAL_EMAIL")
                .unwrap_or_else(|| DEFAULT_PAYPAL_EMAIL.to_string()),
        }
    }

    /// Build the configured payment method.
    pub fn payment_method(&self) -> Box<dyn PaymentMethod> {
        match self.payment {
            PaymentChoice::Card => Box::new(CreditCardPayment::new(self.card_number.clone())),
            PaymentChoice::PayPal => Box::new(PayPalPayment::new(self.paypal_email.clone())),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
