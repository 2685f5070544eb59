//! Payment processing.
//!
//! [`PaymentGateway`] is the seam a real processor client would plug into:
//! one charge operation that resolves within a bounded time with either a
//! gateway-assigned transaction reference or a decline reason. The shipped
//! implementation is [`SimulatedGateway`], which approves 90% of charges
//! after a fixed delay. Callers impose no timeout and never retry; a charge
//! always runs to completion once started.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by a payment gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The gateway declined the charge.
    #[error("payment declined")]
    Declined,
}

/// A charge to submit to the gateway.
#[derive(Debug, Clone)]
pub struct ChargeRequest {
    /// Identifier of the record being paid for (subscription or order id).
    pub reference: String,
    /// Amount to charge in USD.
    pub amount: Decimal,
    /// Human-readable line for gateway statements.
    pub description: String,
}

/// A successful charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// The record identifier the charge was submitted for.
    pub reference: String,
    /// Gateway-assigned transaction reference.
    pub transaction_id: String,
}

/// A payment processor capable of charging a customer.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Submit a charge, resolving with a receipt or a decline.
    async fn charge(&self, request: ChargeRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// Stand-in gateway that approves charges at a fixed rate after a fixed
/// delay.
///
/// An approval rate of `1.0` or `0.0` makes the gateway deterministic,
/// which the tests rely on.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    approval_rate: f64,
}

impl SimulatedGateway {
    /// Create a gateway with the given processing delay and approval rate.
    ///
    /// The rate is clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn new(delay: Duration, approval_rate: f64) -> Self {
        Self {
            delay,
            approval_rate: approval_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for SimulatedGateway {
    /// The production-demo defaults: 1.5s delay, 90% approval.
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), 0.9)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, request: ChargeRequest) -> Result<PaymentReceipt, PaymentError> {
        tokio::time::sleep(self.delay).await;

        if rand::rng().random_bool(self.approval_rate) {
            let receipt = PaymentReceipt {
                reference: request.reference,
                transaction_id: Uuid::new_v4().to_string(),
            };
            tracing::info!(
                reference = %receipt.reference,
                transaction_id = %receipt.transaction_id,
                amount = %request.amount,
                "charge approved"
            );
            Ok(receipt)
        } else {
            tracing::warn!(
                reference = %request.reference,
                amount = %request.amount,
                "charge declined"
            );
            Err(PaymentError::Declined)
        }
    }
}
