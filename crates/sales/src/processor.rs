//! Order processing: the error boundary of the checkout flow.

use checkout_core::{DomainError, DomainResult};

use crate::order::Order;
use crate::payment::PaymentMethod;

/// Result of [`OrderProcessor::process_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Payment went through and the order was processed.
    Processed,
    /// The payment method declined; the order is still `created` and unpaid.
    PaymentDeclined,
    /// Processing failed with a domain error; the order is still `created`.
    Failed(DomainError),
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Processed)
    }

    /// Human-readable report line.
    pub fn message(&self) -> String {
        match self {
            ProcessOutcome::Processed => "order processed successfully".to_owned(),
            ProcessOutcome::PaymentDeclined => "payment failed".to_owned(),
            ProcessOutcome::Failed(err) => format!("order processing error: {err}"),
        }
    }
}

impl core::fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Charges a payment method for an order and, if that succeeds, processes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderProcessor;

impl OrderProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Charge `payment` for the order total, then attach it and process the order.
    ///
    /// Never returns an error: every failure is reported through the outcome.
    /// When `process` fails after a successful charge the payment stays
    /// attached to the order; no refund is modelled.
    pub fn process_order(
        &self,
        order: &mut Order,
        payment: Box<dyn PaymentMethod>,
    ) -> ProcessOutcome {
        let span = tracing::info_span!("process_order", order_id = %order.id_typed());
        let _guard = span.enter();

        let outcome = match Self::charge_and_process(order, payment) {
            Ok(outcome) => outcome,
            Err(err) => ProcessOutcome::Failed(err),
        };

        match &outcome {
            ProcessOutcome::Processed => {
                tracing::info!(total = %order.total(), "{}", outcome.message())
            }
            ProcessOutcome::PaymentDeclined => tracing::warn!("{}", outcome.message()),
            ProcessOutcome::Failed(err) => {
                tracing::error!(error = %err, status = %order.status(), "{}", outcome.message())
            }
        }
        outcome
    }

    fn charge_and_process(
        order: &mut Order,
        payment: Box<dyn PaymentMethod>,
    ) -> DomainResult<ProcessOutcome> {
        let amount = order.total();
        if !payment.pay(amount) {
            return Ok(ProcessOutcome::PaymentDeclined);
        }
        order.set_payment(payment);
        order.process()?;
        Ok(ProcessOutcome::Processed)
    }
}
