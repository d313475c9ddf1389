//! Payment methods.
//!
//! A payment method only needs to answer whether charging an amount succeeded.
//! Orders and the order processor work with `dyn PaymentMethod`, so new methods
//! plug in without touching either.

use checkout_core::Money;

/// Payment capability.
pub trait PaymentMethod: core::fmt::Debug {
    /// Charge `amount`. Returns `true` when the payment went through.
    fn pay(&self, amount: Money) -> bool;

    /// Short, stable name of the method (e.g. "credit_card").
    fn method_name(&self) -> &'static str;
}

/// Credit card payment. Only the last four digits are ever logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }

    /// Last four characters of the card number.
    pub fn masked_number(&self) -> String {
        let count = self.card_number.chars().count();
        self.card_number.chars().skip(count.saturating_sub(4)).collect()
    }
}

impl PaymentMethod for CreditCardPayment {
    fn pay(&self, amount: Money) -> bool {
        tracing::info!(
            method = self.method_name(),
            card = %self.masked_number(),
            amount = %amount,
            "processing credit card payment ({}) for {}",
            self.masked_number(),
            amount
        );
        true
    }

    fn method_name(&self) -> &'static str {
        "credit_card"
    }
}

/// PayPal payment, identified by the account email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PaymentMethod for PayPalPayment {
    fn pay(&self, amount: Money) -> bool {
        tracing::info!(
            method = self.method_name(),
            account = %self.email,
            amount = %amount,
            "processing PayPal payment ({}) for {}",
            self.email,
            amount
        );
        true
    }

    fn method_name(&self) -> &'static str {
        "paypal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_card_payment_succeeds() {
        let payment = CreditCardPayment::new("12345678901234510");
        assert!(payment.pay(Money::new(100, 0)));
        assert_eq!(payment.method_name(), "credit_card");
    }

    #[test]
    fn credit_card_number_is_masked_to_last_four() {
        assert_eq!(CreditCardPayment::new("1234567890123456").masked_number(), "3456");
        assert_eq!(CreditCardPayment::new("12345678901234510").masked_number(), "4510");
        assert_eq!(CreditCardPayment::new("12").masked_number(), "12");
    }

    #[test]
    fn paypal_payment_succeeds() {
        let payment = PayPalPayment::new("ivan@example.com");
        assert!(payment.pay(Money::new(100, 0)));
        assert_eq!(payment.email(), "ivan@example.com");
        assert_eq!(payment.method_name(), "paypal");
    }

    #[test]
    fn boxed_methods_delegate() {
        let payment: Box<dyn PaymentMethod> = Box::new(PayPalPayment::new("a@b.c"));
        assert!(payment.pay(Money::zero()));
        assert_eq!(payment.method_name(), "paypal");
    }
}
